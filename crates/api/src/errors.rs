use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ip_gate_domain::DomainError;
use serde_json::json;

pub const INVALID_ADDRESS_KEY: &str = "restrict.invalid_address";
pub const SERVER_ERROR_KEY: &str = "server error";

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::InvalidAddress(_) => (StatusCode::BAD_REQUEST, INVALID_ADDRESS_KEY),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_KEY),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Body sent to a client denied by a restriction rule.
pub fn denial_response(status_code: u16, error_key: &str) -> Response {
    let status = StatusCode::from_u16(status_code).unwrap_or(StatusCode::FORBIDDEN);
    (status, Json(json!({ "error": error_key }))).into_response()
}
