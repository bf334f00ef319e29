use crate::booking::BookingError;
use crate::server::rest_api::error::ApiErrorResponse;
use axum::http::StatusCode;

impl From<BookingError> for ApiErrorResponse {
	fn from(error: BookingError) -> Self {
		use BookingError::*;
		match error {
			InvalidTimeRange => {
				ApiErrorResponse::new("booking-invalid-time-range", StatusCode::BAD_REQUEST, error.to_string())
			}
			UnknownRoom => ApiErrorResponse::new("booking-unknown-room", StatusCode::BAD_REQUEST, error.to_string()),
			Conflict => ApiErrorResponse::new("booking-conflict", StatusCode::CONFLICT, error.to_string()),
			NotFound => ApiErrorResponse::new("booking-not-found", StatusCode::NOT_FOUND, error.to_string()),
			Database(error) => error.into(),
		}
	}
}
