use crate::types::uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(FromRow, Clone, Debug, PartialEq, Eq)]
pub struct Admin {
	pub uuid: Uuid,
	pub username: String,
	pub password_hash: String,
	pub password_salt: String,
	pub created_at: DateTime<Utc>,
}
