use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::error::Error;

pub(crate) const FLIGHT_NOT_FOUND: &str = "Vuelo no encontrado";
pub(crate) const FLIGHT_FULL: &str = "Vuelo completo";
pub(crate) const SELL_ID_REQUIRED: &str = "Se requiere el campo 'id'";
pub(crate) const ROUTE_NOT_FOUND: &str = "Recurso no encontrado";
pub(crate) const REQUEST_TIMEOUT: &str = "Tiempo de espera agotado";
pub(crate) const INTERNAL: &str = "Error interno del servidor";

/// An error rendered as `{"error": …}` with a status code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Create an error with an explicit status.
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// A 400 response.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// A 404 response for a missing flight.
    #[must_use]
    pub fn flight_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, FLIGHT_NOT_FOUND)
    }

    /// A 500 response. The cause is logged, not returned to the client.
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        error!("request failed: {cause}");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL)
    }

    /// The status code of this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The message placed under the `error` key.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation { message } => Self::bad_request(message),
            Error::FlightNotFound { .. } => Self::flight_not_found(),
            Error::FlightFull { .. } => Self::bad_request(FLIGHT_FULL),
            other => Self::internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let err = ApiError::from(Error::validation("El campo 'destino' es obligatorio"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "El campo 'destino' es obligatorio");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::from(Error::FlightNotFound { id: 3 });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), FLIGHT_NOT_FOUND);
    }

    #[test]
    fn test_full_maps_to_400() {
        let err = ApiError::from(Error::FlightFull { id: 3 });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), FLIGHT_FULL);
    }

    #[test]
    fn test_storage_fault_maps_to_500_without_details() {
        let err = ApiError::from(Error::DataRead {
            path: "/secret/vuelos.json".into(),
            source: std::io::Error::other("disk gone"),
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message().contains("/secret"));
    }
}
