use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// JSON body sent with `201 Created`.
pub struct Created<T>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
	fn into_response(self) -> Response {
		(StatusCode::CREATED, Json(self.0)).into_response()
	}
}
