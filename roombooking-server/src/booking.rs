use crate::availability::{TimeRange, is_available};
use crate::booking::model::{Booking, BookingStatus, BookingWithRoomName, NewBooking};
use crate::database::error::DatabaseError;
use crate::database::{Connection, Database, Repository};
use crate::types::time_of_day::TimeOfDay;
use crate::types::uuid::Uuid;
use crate::utils::time_source::TimeSource;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

pub mod model;
pub mod repository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
	pub room_uuid: Uuid,
	pub user_name: String,
	pub date: NaiveDate,
	pub start_time: TimeOfDay,
	pub end_time: TimeOfDay,
	pub purpose: Option<String>,
}

/// Fields to change on an existing booking, `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingPatch {
	pub user_name: Option<String>,
	pub date: Option<NaiveDate>,
	pub start_time: Option<TimeOfDay>,
	pub end_time: Option<TimeOfDay>,
	/// `Some(None)` removes the purpose.
	pub purpose: Option<Option<String>>,
	pub status: Option<BookingStatus>,
}

impl BookingPatch {
	fn apply_to(self, booking: Booking) -> Booking {
		let BookingPatch {
			user_name,
			date,
			start_time,
			end_time,
			purpose,
			status,
		} = self;

		Booking {
			user_name: user_name.unwrap_or(booking.user_name),
			date: date.unwrap_or(booking.date),
			start_time: start_time.unwrap_or(booking.start_time),
			end_time: end_time.unwrap_or(booking.end_time),
			purpose: purpose.unwrap_or(booking.purpose),
			status: status.unwrap_or(booking.status),
			..booking
		}
	}
}

#[derive(Error, Debug)]
pub enum BookingError {
	#[error("Start time must be before end time.")]
	InvalidTimeRange,
	#[error("Room does not exist.")]
	UnknownRoom,
	#[error("Time slot is already booked")]
	Conflict,
	#[error("Booking not found")]
	NotFound,
	#[error("{0}")]
	Database(#[from] DatabaseError),
}

/// Creates, changes and removes bookings while keeping confirmed bookings of a room free of overlaps.
#[derive(Clone)]
pub struct BookingService {
	database: Arc<dyn Database>,
	repository: Arc<dyn Repository>,
	time_source: TimeSource,
	// Serializes check-then-write sequences so two requests can't claim the same slot.
	write_lock: Arc<Mutex<()>>,
}

impl BookingService {
	pub fn new(database: Arc<dyn Database>, repository: Arc<dyn Repository>, time_source: TimeSource) -> Self {
		Self {
			database,
			repository,
			time_source,
			write_lock: Default::default(),
		}
	}

	pub async fn list(&self) -> Result<Vec<BookingWithRoomName>, DatabaseError> {
		let mut connection = self.database.connection().await?;
		self.repository.booking().list_with_room_names(&mut *connection).await
	}

	pub async fn create(&self, request: BookingRequest) -> Result<Booking, BookingError> {
		let BookingRequest {
			room_uuid,
			user_name,
			date,
			start_time,
			end_time,
			purpose,
		} = request;
		let requested = TimeRange::new(start_time, end_time).ok_or(BookingError::InvalidTimeRange)?;

		let _guard = self.write_lock.lock().await;
		let mut connection = self.database.connection().await?;

		if self.repository.room().get(&mut *connection, room_uuid).await?.is_none() {
			return Err(BookingError::UnknownRoom);
		}

		self.ensure_available(&mut *connection, room_uuid, date, requested, None)
			.await?;

		let booking = self
			.repository
			.booking()
			.create(
				&mut *connection,
				&NewBooking {
					room_uuid,
					user_name,
					date,
					start_time,
					end_time,
					purpose,
					status: BookingStatus::Confirmed,
					created_at: self.time_source.now(),
				},
			)
			.await?;

		info!(
			booking = %booking.uuid,
			room = %room_uuid,
			%date,
			%start_time,
			%end_time,
			"Created booking"
		);
		Ok(booking)
	}

	pub async fn update(&self, booking_uuid: Uuid, patch: BookingPatch) -> Result<Booking, BookingError> {
		let _guard = self.write_lock.lock().await;
		let mut connection = self.database.connection().await?;

		let current = self
			.repository
			.booking()
			.get(&mut *connection, booking_uuid)
			.await?
			.ok_or(BookingError::NotFound)?;
		let updated = patch.apply_to(current);

		let requested = TimeRange::new(updated.start_time, updated.end_time).ok_or(BookingError::InvalidTimeRange)?;
		if updated.status == BookingStatus::Confirmed {
			self.ensure_available(
				&mut *connection,
				updated.room_uuid,
				updated.date,
				requested,
				Some(booking_uuid),
			)
			.await?;
		}

		let booking = self
			.repository
			.booking()
			.update(&mut *connection, &updated)
			.await
			.map_err(|error| match error {
				DatabaseError::NotFound(_) => BookingError::NotFound,
				error => error.into(),
			})?;

		info!(booking = %booking_uuid, status = ?booking.status, "Updated booking");
		Ok(booking)
	}

	/// Removing a booking is how it gets cancelled, the slot becomes free immediately.
	pub async fn remove(&self, booking_uuid: Uuid) -> Result<(), BookingError> {
		let mut connection = self.database.connection().await?;

		if !self.repository.booking().remove(&mut *connection, booking_uuid).await? {
			return Err(BookingError::NotFound);
		}

		info!(booking = %booking_uuid, "Removed booking");
		Ok(())
	}

	async fn ensure_available(
		&self,
		connection: &mut dyn Connection,
		room_uuid: Uuid,
		date: NaiveDate,
		requested: TimeRange,
		ignored_booking: Option<Uuid>,
	) -> Result<(), BookingError> {
		let mut existing_bookings = self
			.repository
			.booking()
			.list_for_room_and_date(connection, room_uuid, date)
			.await?;
		existing_bookings.retain(|booking| Some(booking.uuid) != ignored_booking);

		if is_available(room_uuid, date, requested, &existing_bookings) {
			Ok(())
		} else {
			debug!(
				room = %room_uuid,
				%date,
				start_time = %requested.start(),
				end_time = %requested.end(),
				"Rejected overlapping booking"
			);
			Err(BookingError::Conflict)
		}
	}
}
