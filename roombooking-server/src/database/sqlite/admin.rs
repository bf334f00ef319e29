use super::{SqliteRepository, sqlite_connection};
use crate::admin::model::Admin;
use crate::admin::repository::AdminRepository;
use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::types::uuid::Uuid;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::query_as;

#[async_trait]
impl AdminRepository for SqliteRepository {
	async fn get(&self, connection: &mut dyn Connection, admin_uuid: Uuid) -> Result<Option<Admin>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"SELECT uuid, username, password_hash, password_salt, created_at
			FROM admin
			WHERE uuid = ?1",
		)
		.bind(admin_uuid)
		.fetch_optional(connection)
		.await
		.map_err(Into::into)
	}

	async fn get_by_username(
		&self,
		connection: &mut dyn Connection,
		username: &str,
	) -> Result<Option<Admin>, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		query_as(
			r"SELECT uuid, username, password_hash, password_salt, created_at
			FROM admin
			WHERE username = ?1",
		)
		.bind(username)
		.fetch_optional(connection)
		.await
		.map_err(Into::into)
	}

	async fn create(
		&self,
		connection: &mut dyn Connection,
		username: &str,
		password_hash: &str,
		password_salt: &str,
		created_at: DateTime<Utc>,
	) -> Result<Admin, DatabaseError> {
		let connection = sqlite_connection(connection)?;

		let uuid = Uuid::new_v4();
		query_as(
			r"INSERT INTO admin(uuid, username, password_hash, password_salt, created_at)
			VALUES (?1, ?2, ?3, ?4, ?5)
			RETURNING
				uuid,
				username,
				password_hash,
				password_salt,
				created_at",
		)
		.bind(uuid)
		.bind(username)
		.bind(password_hash)
		.bind(password_salt)
		.bind(created_at)
		.fetch_one(connection)
		.await
		.map_err(Into::into)
	}
}
