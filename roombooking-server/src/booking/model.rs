use crate::types::time_of_day::TimeOfDay;
use crate::types::uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(FromRow, Clone, Debug, PartialEq, Eq)]
pub struct Booking {
	pub uuid: Uuid,
	pub room_uuid: Uuid,
	pub user_name: String,
	pub date: NaiveDate,
	pub start_time: TimeOfDay,
	pub end_time: TimeOfDay,
	pub purpose: Option<String>,
	pub status: BookingStatus,
	pub created_at: DateTime<Utc>,
}

#[derive(FromRow, Clone, Debug, PartialEq, Eq)]
pub struct BookingWithRoomName {
	#[sqlx(flatten)]
	pub booking: Booking,
	pub room_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewBooking {
	pub room_uuid: Uuid,
	pub user_name: String,
	pub date: NaiveDate,
	pub start_time: TimeOfDay,
	pub end_time: TimeOfDay,
	pub purpose: Option<String>,
	pub status: BookingStatus,
	pub created_at: DateTime<Utc>,
}

#[derive(sqlx::Type, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[sqlx(type_name = "TEXT")]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
	#[default]
	Confirmed,
	Cancelled,
	Completed,
}
