use crate::admin::AdminService;
use crate::admin::model::Admin;
use crate::server::rest_api::error::ApiErrorResponse;
use crate::server::rest_api::error::authentication_failed::AuthenticationFailedError;
use crate::types::uuid::Uuid;
use crate::utils::time_source::TimeSource;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
	admin_id: Uuid,
	username: String,
	/// [RFC7519, Section 4.1.4](https://www.rfc-editor.org/rfc/rfc7519.html#section-4.1.4)
	exp: i64,
}

impl Claims {
	pub fn admin_id(&self) -> Uuid {
		self.admin_id
	}

	pub fn username(&self) -> &str {
		&self.username
	}
}

/// HMAC keys for signing and checking bearer tokens.
#[derive(Clone)]
pub struct TokenKeys {
	encoding_key: EncodingKey,
	decoding_key: DecodingKey,
	lifetime: Duration,
}

impl TokenKeys {
	pub fn new(secret: &str, lifetime: Duration) -> Self {
		Self {
			encoding_key: EncodingKey::from_secret(secret.as_bytes()),
			decoding_key: DecodingKey::from_secret(secret.as_bytes()),
			lifetime,
		}
	}

	pub fn issue(&self, admin: &Admin, now: DateTime<Utc>) -> Result<String, jsonwebtoken::errors::Error> {
		let lifetime = i64::try_from(self.lifetime.as_secs()).unwrap_or(i64::MAX);
		let claims = Claims {
			admin_id: admin.uuid,
			username: admin.username.clone(),
			exp: now.timestamp().saturating_add(lifetime),
		};

		jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
	}

	/// Expiry is checked against `now` instead of the system clock.
	pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Option<Claims> {
		let mut validation = Validation::new(Algorithm::HS256);
		validation.validate_exp = false;
		validation.set_required_spec_claims(&["exp"]);

		let claims = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &validation)
			.map_err(|error| debug!("Could not decode token, error was: {error}"))
			.ok()?
			.claims;

		if claims.exp <= now.timestamp() {
			debug!("Token of admin '{}' expired", claims.username);
			return None;
		}

		Some(claims)
	}
}

/// Rejects requests without a valid bearer token, otherwise makes the [`Admin`] available as extension.
pub async fn middleware(
	State(token_keys): State<TokenKeys>,
	State(admins): State<AdminService>,
	State(time_source): State<TimeSource>,
	mut request: Request,
	next: Next,
) -> Result<Response, ApiErrorResponse> {
	let token = request
		.headers()
		.get(AUTHORIZATION)
		.and_then(|value| value.to_str().ok())
		.and_then(|value| value.strip_prefix("Bearer "))
		.ok_or(AuthenticationFailedError::MissingToken)?;

	let claims = token_keys
		.verify(token, time_source.now())
		.ok_or(AuthenticationFailedError::InvalidToken)?;

	let Some(admin) = admins.get(claims.admin_id()).await? else {
		debug!("Admin for token of '{}' not found!", claims.username());
		return Err(AuthenticationFailedError::UnknownAdmin.into());
	};
	request.extensions_mut().insert(admin);

	Ok(next.run(request).await)
}
