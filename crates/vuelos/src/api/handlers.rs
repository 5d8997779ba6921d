//! HTTP request handlers.
//!
//! Handlers translate requests into [`FlightStore`] calls. The store does
//! synchronous file I/O, so every call runs on the blocking thread pool.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{BoxError, Json};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::error::{ApiError, REQUEST_TIMEOUT, ROUTE_NOT_FOUND, SELL_ID_REQUIRED};
use super::AppState;
use crate::flight::{Flight, FlightUpdate, NewFlight, SellRequest};
use crate::store::{FlightStore, DESTINO_REQUIRED};

type ApiResult<T> = Result<T, ApiError>;

/// Run a store operation on the blocking pool.
async fn with_store<T, F>(state: &AppState, op: F) -> ApiResult<T>
where
    F: FnOnce(&FlightStore) -> crate::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let store = state.store.clone();
    tokio::task::spawn_blocking(move || op(&store))
        .await
        .map_err(ApiError::internal)?
        .map_err(ApiError::from)
}

fn flight_id(path: Result<Path<u64>, PathRejection>) -> ApiResult<u64> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            debug!("Rejected flight id: {}", rejection.body_text());
            Err(ApiError::flight_not_found())
        }
    }
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(invalid_body(rejection.body_text())),
    }
}

/// Decode a body that must be a JSON object.
///
/// Any other JSON value (`null`, an array, a number) carries none of the
/// fields the endpoint needs, so it fails with `missing` as the message.
fn json_object<T: DeserializeOwned>(
    body: Result<Json<Value>, JsonRejection>,
    missing: &str,
) -> ApiResult<T> {
    let value = json_body(body)?;
    if !value.is_object() {
        return Err(ApiError::bad_request(missing));
    }
    serde_json::from_value(value).map_err(invalid_body)
}

fn invalid_body(cause: impl std::fmt::Display) -> ApiError {
    ApiError::bad_request(format!("Cuerpo JSON inválido: {cause}"))
}

/// `GET /`
pub async fn index() -> Json<Value> {
    Json(json!({ "mensaje": "API de Vuelos" }))
}

/// `GET /api/vuelos`
pub async fn list_flights(State(state): State<AppState>) -> ApiResult<Json<Vec<Flight>>> {
    with_store(&state, FlightStore::list).await.map(Json)
}

/// `GET /api/vuelos/{id}`
pub async fn get_flight(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<Flight>> {
    let id = flight_id(path)?;
    with_store(&state, move |store| store.get(id)).await.map(Json)
}

/// `POST /api/vuelos`
pub async fn create_flight(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Flight>)> {
    let input: NewFlight = json_object(body, DESTINO_REQUIRED)?;
    let flight = with_store(&state, move |store| store.create(input)).await?;
    Ok((StatusCode::CREATED, Json(flight)))
}

/// `PUT /api/vuelos/{id}`
pub async fn update_flight(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    body: Result<Json<FlightUpdate>, JsonRejection>,
) -> ApiResult<Json<Flight>> {
    let id = flight_id(path)?;
    let input = json_body(body)?;
    with_store(&state, move |store| store.update(id, input))
        .await
        .map(Json)
}

/// `DELETE /api/vuelos/{id}`
pub async fn delete_flight(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<Value>> {
    let id = flight_id(path)?;
    with_store(&state, move |store| store.delete(id)).await?;
    Ok(Json(json!({
        "mensaje": format!("Vuelo {id} eliminado correctamente")
    })))
}

/// `POST /api/vender`
pub async fn sell_seat(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Flight>> {
    let request: SellRequest = json_object(body, SELL_ID_REQUIRED)?;
    let Some(id) = request.id else {
        return Err(ApiError::bad_request(SELL_ID_REQUIRED));
    };
    with_store(&state, move |store| store.sell(id)).await.map(Json)
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, ROUTE_NOT_FOUND)
}

/// Turn a failure from the timeout middleware into a JSON error.
pub async fn handle_timeout(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        warn!("request timed out");
        ApiError::new(StatusCode::REQUEST_TIMEOUT, REQUEST_TIMEOUT)
    } else {
        ApiError::internal(err)
    }
}
