use crate::database::error::DatabaseError;
use crate::server::rest_api::error::ApiErrorResponse;
use axum::http::StatusCode;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum LoginError {
	#[error("Username and password are required")]
	MissingCredentials,
	#[error("Invalid credentials")]
	InvalidCredentials,
	#[error("Login failed")]
	JwtEncodeError(#[from] jsonwebtoken::errors::Error),
	#[error("{0}")]
	Database(#[from] DatabaseError),
}

impl From<LoginError> for ApiErrorResponse {
	fn from(error: LoginError) -> Self {
		use LoginError::*;
		match error {
			MissingCredentials => {
				ApiErrorResponse::new("login-missing-credentials", StatusCode::BAD_REQUEST, error.to_string())
			}
			InvalidCredentials => ApiErrorResponse::new("login-access-denied", StatusCode::UNAUTHORIZED, error.to_string()),
			JwtEncodeError(ref cause) => {
				error!("Failed to encode token: {cause}");
				ApiErrorResponse::new("login-internal-error", StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
			}
			Database(error) => error.into(),
		}
	}
}
