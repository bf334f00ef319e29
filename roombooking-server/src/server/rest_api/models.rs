use crate::admin::model::Admin;
use crate::availability::TimeSlot;
use crate::booking::model::{Booking, BookingStatus, BookingWithRoomName};
use crate::booking::{BookingPatch, BookingRequest};
use crate::room::RoomWithAvailability;
use crate::room::model::Room;
use crate::types::time_of_day::TimeOfDay;
use crate::types::uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
	pub id: Uuid,
	pub name: String,
	pub building: String,
	pub floor: String,
	pub capacity: i64,
	pub image_url: String,
	pub equipment: Vec<String>,
	pub is_accessible: bool,
	pub description: Option<String>,
	pub created_at: DateTime<Utc>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub today_availability: Option<Vec<TimeSlotResponse>>,
}

impl From<Room> for RoomResponse {
	fn from(room: Room) -> Self {
		let Room {
			uuid,
			name,
			building,
			floor,
			capacity,
			image_url,
			equipment,
			is_accessible,
			description,
			created_at,
		} = room;

		Self {
			id: uuid,
			name,
			building,
			floor,
			capacity,
			image_url,
			equipment,
			is_accessible,
			description,
			created_at,
			today_availability: None,
		}
	}
}

impl From<RoomWithAvailability> for RoomResponse {
	fn from(RoomWithAvailability { room, availability }: RoomWithAvailability) -> Self {
		Self {
			today_availability: Some(availability.into_iter().map(Into::into).collect()),
			..room.into()
		}
	}
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlotResponse {
	pub time: TimeOfDay,
	pub available: bool,
}

impl From<TimeSlot> for TimeSlotResponse {
	fn from(TimeSlot { time, available }: TimeSlot) -> Self {
		Self { time, available }
	}
}

#[derive(Deserialize)]
pub struct AvailabilityQuery {
	pub date: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoomAvailabilityResponse {
	pub room_id: Uuid,
	pub date: NaiveDate,
	pub slots: Vec<TimeSlotResponse>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
	pub id: Uuid,
	pub room_id: Uuid,
	pub user_name: String,
	pub date: NaiveDate,
	pub start_time: TimeOfDay,
	pub end_time: TimeOfDay,
	pub purpose: Option<String>,
	pub status: BookingStatus,
	pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
	fn from(booking: Booking) -> Self {
		let Booking {
			uuid,
			room_uuid,
			user_name,
			date,
			start_time,
			end_time,
			purpose,
			status,
			created_at,
		} = booking;

		Self {
			id: uuid,
			room_id: room_uuid,
			user_name,
			date,
			start_time,
			end_time,
			purpose,
			status,
			created_at,
		}
	}
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingWithRoomNameResponse {
	#[serde(flatten)]
	pub booking: BookingResponse,
	pub room_name: String,
}

impl From<BookingWithRoomName> for BookingWithRoomNameResponse {
	fn from(BookingWithRoomName { booking, room_name }: BookingWithRoomName) -> Self {
		Self {
			booking: booking.into(),
			room_name,
		}
	}
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
	pub room_id: Uuid,
	pub user_name: String,
	pub date: NaiveDate,
	pub start_time: TimeOfDay,
	pub end_time: TimeOfDay,
	#[serde(default)]
	pub purpose: Option<String>,
}

impl From<CreateBookingRequest> for BookingRequest {
	fn from(request: CreateBookingRequest) -> Self {
		let CreateBookingRequest {
			room_id,
			user_name,
			date,
			start_time,
			end_time,
			purpose,
		} = request;

		Self {
			room_uuid: room_id,
			user_name,
			date,
			start_time,
			end_time,
			purpose,
		}
	}
}

/// Every field is optional, absent fields keep their value. `purpose` can be cleared with `null`.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateBookingRequest {
	pub user_name: Option<String>,
	pub date: Option<NaiveDate>,
	pub start_time: Option<TimeOfDay>,
	pub end_time: Option<TimeOfDay>,
	#[serde(deserialize_with = "present")]
	pub purpose: Option<Option<String>>,
	pub status: Option<BookingStatus>,
}

/// Wraps whatever is in the body in `Some`, so `null` becomes `Some(None)` while a missing field stays `None`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de>,
{
	T::deserialize(deserializer).map(Some)
}

impl From<UpdateBookingRequest> for BookingPatch {
	fn from(request: UpdateBookingRequest) -> Self {
		let UpdateBookingRequest {
			user_name,
			date,
			start_time,
			end_time,
			purpose,
			status,
		} = request;

		Self {
			user_name,
			date,
			start_time,
			end_time,
			purpose,
			status,
		}
	}
}

#[derive(Deserialize)]
pub struct LoginRequest {
	pub username: String,
	pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
	pub id: Uuid,
	pub username: String,
	pub token: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AdminResponse {
	pub id: Uuid,
	pub username: String,
}

impl From<Admin> for AdminResponse {
	fn from(admin: Admin) -> Self {
		Self {
			id: admin.uuid,
			username: admin.username,
		}
	}
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
	pub message: String,
}

impl MessageResponse {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}
}
