use crate::booking::model;
use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::types::uuid::Uuid;
use async_trait::async_trait;
use chrono::NaiveDate;
use static_assertions::assert_obj_safe;


#[async_trait]
pub trait BookingRepository: Send + Sync + 'static {
	async fn get(
		&self,
		connection: &mut dyn Connection,
		booking_uuid: Uuid,
	) -> Result<Option<model::Booking>, DatabaseError>;
	/// Every booking of every status, ordered by date and start time.
	async fn list_with_room_names(
		&self,
		connection: &mut dyn Connection,
	) -> Result<Vec<model::BookingWithRoomName>, DatabaseError>;
	async fn list_for_room_and_date(
		&self,
		connection: &mut dyn Connection,
		room_uuid: Uuid,
		date: NaiveDate,
	) -> Result<Vec<model::Booking>, DatabaseError>;
	async fn list_for_date(
		&self,
		connection: &mut dyn Connection,
		date: NaiveDate,
	) -> Result<Vec<model::Booking>, DatabaseError>;
	async fn create(
		&self,
		connection: &mut dyn Connection,
		booking: &model::NewBooking,
	) -> Result<model::Booking, DatabaseError>;
	/// Overwrites every mutable field, fails with [`DatabaseError::NotFound`] if the booking is gone.
	async fn update(
		&self,
		connection: &mut dyn Connection,
		booking: &model::Booking,
	) -> Result<model::Booking, DatabaseError>;
	/// Returns whether a booking was actually removed.
	async fn remove(&self, connection: &mut dyn Connection, booking_uuid: Uuid) -> Result<bool, DatabaseError>;
}

assert_obj_safe!(BookingRepository);
