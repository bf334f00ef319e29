use crate::room::RoomLookupError;
use crate::server::rest_api::error::ApiErrorResponse;
use axum::http::StatusCode;

impl From<RoomLookupError> for ApiErrorResponse {
	fn from(error: RoomLookupError) -> Self {
		match error {
			RoomLookupError::NotFound => {
				ApiErrorResponse::new("room-not-found", StatusCode::NOT_FOUND, error.to_string())
			}
			RoomLookupError::Database(error) => error.into(),
		}
	}
}
