use crate::server::rest_api::error::ApiErrorResponse;
use axum::http::StatusCode;
use thiserror::Error;
use tracing::debug;

/// Why a request to a protected route was turned away, clients only ever see "Unauthorized".
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthenticationFailedError {
	#[error("No bearer token in Authorization header")]
	MissingToken,
	#[error("Token is malformed, forged or expired")]
	InvalidToken,
	#[error("Token belongs to an unknown admin")]
	UnknownAdmin,
}

impl From<AuthenticationFailedError> for ApiErrorResponse {
	fn from(error: AuthenticationFailedError) -> Self {
		debug!("Rejected request: {error}");
		ApiErrorResponse::new("unauthorized", StatusCode::UNAUTHORIZED, "Unauthorized")
	}
}
