use super::{SqliteRepository, sqlite_connection};
use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::room::model::{NewRoom, Room};
use crate::room::repository::RoomRepository;
use crate::types::uuid::Uuid;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::query_as;
use sqlx::types::Json;

#[async_trait]
impl RoomRepository for SqliteRepository {
	async fn get(&self, connection: &mut dyn Connection, room_uuid: Uuid) -> Result<Option<Room>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"SELECT
				uuid,
				name,
				building,
				floor,
				capacity,
				image_url,
				equipment,
				is_accessible,
				description,
				created_at
			FROM room
			WHERE uuid = ?1",
		)
		.bind(room_uuid)
		.fetch_optional(connection)
		.await
		.map_err(Into::into)
	}

	async fn list(&self, connection: &mut dyn Connection) -> Result<Vec<Room>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"SELECT
				uuid,
				name,
				building,
				floor,
				capacity,
				image_url,
				equipment,
				is_accessible,
				description,
				created_at
			FROM room
			ORDER BY name ASC, uuid ASC",
		)
		.fetch_all(connection)
		.await
		.map_err(Into::into)
	}

	async fn create(
		&self,
		connection: &mut dyn Connection,
		NewRoom {
			name,
			building,
			floor,
			capacity,
			image_url,
			equipment,
			is_accessible,
			description,
		}: &NewRoom,
		created_at: DateTime<Utc>,
	) -> Result<Room, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		let uuid = Uuid::new_v4();
		query_as(
			r"INSERT INTO room(
				uuid, name, building, floor, capacity, image_url, equipment, is_accessible, description, created_at
			) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
			RETURNING
				uuid,
				name,
				building,
				floor,
				capacity,
				image_url,
				equipment,
				is_accessible,
				description,
				created_at",
		)
		.bind(uuid)
		.bind(name)
		.bind(building)
		.bind(floor)
		.bind(capacity)
		.bind(image_url)
		.bind(Json(equipment))
		.bind(is_accessible)
		.bind(description)
		.bind(created_at)
		.fetch_one(connection)
		.await
		.map_err(Into::into)
	}
}
