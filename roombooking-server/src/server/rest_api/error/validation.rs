use crate::server::rest_api::error::ApiErrorResponse;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;

impl From<JsonRejection> for ApiErrorResponse {
	fn from(rejection: JsonRejection) -> Self {
		ApiErrorResponse::new("invalid-request-body", StatusCode::BAD_REQUEST, rejection.body_text())
	}
}

impl From<QueryRejection> for ApiErrorResponse {
	fn from(rejection: QueryRejection) -> Self {
		ApiErrorResponse::new("invalid-query", StatusCode::BAD_REQUEST, rejection.body_text())
	}
}
