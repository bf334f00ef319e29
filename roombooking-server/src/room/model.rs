use crate::types::uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use typed_builder::TypedBuilder;

#[derive(FromRow, Clone, Debug, PartialEq, Eq)]
pub struct Room {
	pub uuid: Uuid,
	pub name: String,
	pub building: String,
	pub floor: String,
	pub capacity: i64,
	pub image_url: String,
	#[sqlx(json)]
	pub equipment: Vec<String>,
	pub is_accessible: bool,
	pub description: Option<String>,
	pub created_at: DateTime<Utc>,
}

#[derive(TypedBuilder, Clone, Debug, PartialEq, Eq)]
#[builder(field_defaults(setter(into)))]
pub struct NewRoom {
	pub name: String,
	pub building: String,
	pub floor: String,
	pub capacity: i64,
	pub image_url: String,
	#[builder(default)]
	pub equipment: Vec<String>,
	#[builder(default)]
	pub is_accessible: bool,
	#[builder(default, setter(strip_option))]
	pub description: Option<String>,
}
