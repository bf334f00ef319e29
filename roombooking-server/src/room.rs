use crate::availability::{TimeSlot, daily_availability};
use crate::database::error::DatabaseError;
use crate::database::{Database, Repository};
use crate::room::model::Room;
use crate::types::uuid::Uuid;
use crate::utils::time_source::TimeSource;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

pub mod model;
pub mod repository;

#[derive(Error, Debug)]
pub enum RoomLookupError {
	#[error("Room not found")]
	NotFound,
	#[error("{0}")]
	Database(#[from] DatabaseError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomWithAvailability {
	pub room: Room,
	pub availability: Vec<TimeSlot>,
}

/// Read-only access to rooms together with their hourly availability.
#[derive(Clone)]
pub struct RoomService {
	database: Arc<dyn Database>,
	repository: Arc<dyn Repository>,
	time_source: TimeSource,
}

impl RoomService {
	pub fn new(database: Arc<dyn Database>, repository: Arc<dyn Repository>, time_source: TimeSource) -> Self {
		Self {
			database,
			repository,
			time_source,
		}
	}

	/// Every room with the availability grid of the current day.
	pub async fn list_with_today_availability(&self) -> Result<Vec<RoomWithAvailability>, DatabaseError> {
		let today = self.time_source.today();
		let mut connection = self.database.connection().await?;

		let rooms = self.repository.room().list(&mut *connection).await?;
		let todays_bookings = self.repository.booking().list_for_date(&mut *connection, today).await?;

		Ok(rooms
			.into_iter()
			.map(|room| {
				let availability = daily_availability(room.uuid, today, &todays_bookings);
				RoomWithAvailability { room, availability }
			})
			.collect())
	}

	pub async fn get(&self, room_uuid: Uuid) -> Result<Room, RoomLookupError> {
		let mut connection = self.database.connection().await?;

		self.repository
			.room()
			.get(&mut *connection, room_uuid)
			.await?
			.ok_or(RoomLookupError::NotFound)
	}

	/// Availability grid of a room on `date`, today if no date is given.
	pub async fn availability(
		&self,
		room_uuid: Uuid,
		date: Option<NaiveDate>,
	) -> Result<(NaiveDate, Vec<TimeSlot>), RoomLookupError> {
		let date = date.unwrap_or_else(|| self.time_source.today());
		let mut connection = self.database.connection().await?;

		if self.repository.room().get(&mut *connection, room_uuid).await?.is_none() {
			return Err(RoomLookupError::NotFound);
		}

		let bookings = self
			.repository
			.booking()
			.list_for_room_and_date(&mut *connection, room_uuid, date)
			.await?;
		Ok((date, daily_availability(room_uuid, date, &bookings)))
	}
}
