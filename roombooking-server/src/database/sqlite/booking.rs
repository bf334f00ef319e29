use super::{SqliteRepository, sqlite_connection};
use crate::booking::model::{Booking, BookingWithRoomName, NewBooking};
use crate::booking::repository::BookingRepository;
use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::types::uuid::Uuid;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{query, query_as};

#[async_trait]
impl BookingRepository for SqliteRepository {
	async fn get(&self, connection: &mut dyn Connection, booking_uuid: Uuid) -> Result<Option<Booking>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"SELECT
				uuid,
				room_uuid,
				user_name,
				date,
				start_time,
				end_time,
				purpose,
				status,
				created_at
			FROM booking
			WHERE uuid = ?1",
		)
		.bind(booking_uuid)
		.fetch_optional(connection)
		.await
		.map_err(Into::into)
	}

	async fn list_with_room_names(
		&self,
		connection: &mut dyn Connection,
	) -> Result<Vec<BookingWithRoomName>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"SELECT
				b.uuid,
				b.room_uuid,
				b.user_name,
				b.date,
				b.start_time,
				b.end_time,
				b.purpose,
				b.status,
				b.created_at,
				COALESCE(r.name, 'Unknown Room') AS room_name
			FROM booking b
			LEFT JOIN room r ON r.uuid = b.room_uuid
			ORDER BY b.date ASC, b.start_time ASC, b.created_at ASC",
		)
		.fetch_all(connection)
		.await
		.map_err(Into::into)
	}

	async fn list_for_room_and_date(
		&self,
		connection: &mut dyn Connection,
		room_uuid: Uuid,
		date: NaiveDate,
	) -> Result<Vec<Booking>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"SELECT
				uuid,
				room_uuid,
				user_name,
				date,
				start_time,
				end_time,
				purpose,
				status,
				created_at
			FROM booking
			WHERE room_uuid = ?1 AND date = ?2
			ORDER BY start_time ASC",
		)
		.bind(room_uuid)
		.bind(date)
		.fetch_all(connection)
		.await
		.map_err(Into::into)
	}

	async fn list_for_date(&self, connection: &mut dyn Connection, date: NaiveDate) -> Result<Vec<Booking>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"SELECT
				uuid,
				room_uuid,
				user_name,
				date,
				start_time,
				end_time,
				purpose,
				status,
				created_at
			FROM booking
			WHERE date = ?1
			ORDER BY start_time ASC",
		)
		.bind(date)
		.fetch_all(connection)
		.await
		.map_err(Into::into)
	}

	async fn create(
		&self,
		connection: &mut dyn Connection,
		NewBooking {
			room_uuid,
			user_name,
			date,
			start_time,
			end_time,
			purpose,
			status,
			created_at,
		}: &NewBooking,
	) -> Result<Booking, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		let uuid = Uuid::new_v4();
		query_as(
			r"INSERT INTO booking(
				uuid, room_uuid, user_name, date, start_time, end_time, purpose, status, created_at
			) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
			RETURNING
				uuid,
				room_uuid,
				user_name,
				date,
				start_time,
				end_time,
				purpose,
				status,
				created_at",
		)
		.bind(uuid)
		.bind(room_uuid)
		.bind(user_name)
		.bind(date)
		.bind(start_time)
		.bind(end_time)
		.bind(purpose)
		.bind(status)
		.bind(created_at)
		.fetch_one(connection)
		.await
		.map_err(Into::into)
	}

	async fn update(
		&self,
		connection: &mut dyn Connection,
		Booking {
			uuid,
			room_uuid: _,
			user_name,
			date,
			start_time,
			end_time,
			purpose,
			status,
			created_at: _,
		}: &Booking,
	) -> Result<Booking, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"UPDATE booking
			SET
				user_name = ?1,
				date = ?2,
				start_time = ?3,
				end_time = ?4,
				purpose = ?5,
				status = ?6
			WHERE uuid = ?7
			RETURNING
				uuid,
				room_uuid,
				user_name,
				date,
				start_time,
				end_time,
				purpose,
				status,
				created_at",
		)
		.bind(user_name)
		.bind(date)
		.bind(start_time)
		.bind(end_time)
		.bind(purpose)
		.bind(status)
		.bind(uuid)
		.fetch_one(connection)
		.await
		.map_err(Into::into)
	}

	async fn remove(&self, connection: &mut dyn Connection, booking_uuid: Uuid) -> Result<bool, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		let result = query(r"DELETE FROM booking WHERE uuid = ?1")
			.bind(booking_uuid)
			.execute(connection)
			.await?;
		Ok(result.rows_affected() > 0)
	}
}
