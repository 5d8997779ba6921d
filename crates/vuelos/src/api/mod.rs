//! HTTP interface for vuelos.
//!
//! Maps the REST endpoints onto [`FlightStore`] operations and renders
//! results and errors as JSON.

mod error;
pub mod handlers;
mod server;

use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::routing::{get, post};
use axum::Router;
use tower::timeout::TimeoutLayer;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::store::FlightStore;

pub use error::ApiError;
pub use server::Server;

/// State shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The flight store backing the API.
    pub store: FlightStore,
}

/// Build the axum router with all vuelos endpoints.
#[must_use]
pub fn build_router(store: FlightStore, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/vuelos",
            get(handlers::list_flights).post(handlers::create_flight),
        )
        .route(
            "/api/vuelos/:id",
            get(handlers::get_flight)
                .put(handlers::update_flight)
                .delete(handlers::delete_flight),
        )
        .route("/api/vender", post(handlers::sell_seat))
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handlers::handle_timeout))
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { store })
}
