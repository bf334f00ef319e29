use crate::database::error::DatabaseError;
use crate::server::rest_api::error::ApiErrorResponse;
use axum::http::StatusCode;
use tracing::error;

impl From<DatabaseError> for ApiErrorResponse {
	fn from(error: DatabaseError) -> Self {
		error!("Database error while handling request: {error:?}");
		ApiErrorResponse::new("internal-error", StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
	}
}
