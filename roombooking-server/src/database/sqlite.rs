use crate::admin::repository::AdminRepository;
use crate::booking::repository::BookingRepository;
use crate::database::error::DatabaseError;
use crate::database::{Connection, Database, Repository};
use crate::room::repository::RoomRepository;
use anyhow::{Context, anyhow};
use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqliteConnection, SqlitePool, migrate};
use std::any::Any;
use std::ops::DerefMut;
use std::str::FromStr;

mod admin;
mod booking;
mod room;

const MAXIMUM_FILE_CONNECTIONS: u32 = 4;

#[derive(Clone)]
pub struct SqliteDatabase {
	pool: SqlitePool,
}

impl SqliteDatabase {
	pub async fn connect(database_url: &str) -> Result<Self, DatabaseError> {
		let options = SqliteConnectOptions::from_str(database_url)
			.context("Invalid database URL")
			.map_err(DatabaseError::Unavailable)?
			.create_if_missing(true)
			.foreign_keys(true);

		// Every connection to an in-memory database opens a new, empty database.
		let maximum_connections = if is_in_memory(database_url) {
			1
		} else {
			MAXIMUM_FILE_CONNECTIONS
		};

		let pool = SqlitePoolOptions::new()
			.max_connections(maximum_connections)
			.min_connections(1)
			.idle_timeout(None)
			.max_lifetime(None)
			.connect_with(options)
			.await
			.context("Failed to connect to database")
			.map_err(DatabaseError::Unavailable)?;

		Ok(Self { pool })
	}
}

fn is_in_memory(database_url: &str) -> bool {
	database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[async_trait]
impl Database for SqliteDatabase {
	async fn migrate(&mut self) -> Result<(), DatabaseError> {
		migrate!().run(&self.pool).await.map_err(Into::into)
	}

	async fn connection(&self) -> Result<Box<dyn Connection>, DatabaseError> {
		self.pool
			.acquire()
			.await
			.map(|connection| Box::new(connection) as Box<dyn Connection>)
			.map_err(Into::into)
	}
}

impl Connection for SqliteConnection {}
impl Connection for PoolConnection<Sqlite> {}

#[derive(Default, Clone, Copy)]
pub struct SqliteRepository;

impl Repository for SqliteRepository {
	fn room(&self) -> &dyn RoomRepository {
		self
	}

	fn booking(&self) -> &dyn BookingRepository {
		self
	}

	fn admin(&self) -> &dyn AdminRepository {
		self
	}
}

fn sqlite_connection(connection: &mut dyn Connection) -> Result<&mut SqliteConnection, DatabaseError> {
	let type_name = connection.type_name();

	let connection: &mut dyn Any = connection;

	if connection.is::<PoolConnection<Sqlite>>() {
		return connection
			.downcast_mut::<PoolConnection<Sqlite>>()
			.map(DerefMut::deref_mut)
			.ok_or_else(|| DatabaseError::DatabaseMismatch(anyhow!("Expected SQLite connection, got {type_name}")));
	}

	connection
		.downcast_mut::<SqliteConnection>()
		.ok_or_else(|| DatabaseError::DatabaseMismatch(anyhow!("Expected SQLite connection, got {type_name}")))
}
