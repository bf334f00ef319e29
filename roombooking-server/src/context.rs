use crate::admin::AdminService;
use crate::booking::BookingService;
use crate::configuration::Configuration;
use crate::database::error::DatabaseError;
use crate::database::sqlite::{SqliteDatabase, SqliteRepository};
use crate::database::{Database, Repository};
use crate::room::RoomService;
use crate::server::rest_api::auth::TokenKeys;
use crate::utils::time_source::TimeSource;
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationContext {
	pub configuration: Configuration,
	pub time_source: TimeSource,
	pub database: Arc<dyn Database>,
	pub repository: Arc<dyn Repository>,
	pub rooms: RoomService,
	pub bookings: BookingService,
	pub admins: AdminService,
	pub token_keys: TokenKeys,
}

impl ApplicationContext {
	pub async fn new(configuration: Configuration, time_source: TimeSource) -> Result<ApplicationContext, DatabaseError> {
		let mut database = SqliteDatabase::connect(&configuration.database_url).await?;
		database.migrate().await?;
		let database: Arc<dyn Database> = Arc::new(database);
		let repository: Arc<dyn Repository> = Arc::new(SqliteRepository);

		let token_keys = TokenKeys::new(&configuration.jwt_secret, configuration.token_lifetime);

		Ok(Self {
			rooms: RoomService::new(database.clone(), repository.clone(), time_source.clone()),
			bookings: BookingService::new(database.clone(), repository.clone(), time_source.clone()),
			admins: AdminService::new(database.clone(), repository.clone(), time_source.clone()),
			database,
			repository,
			configuration,
			time_source,
			token_keys,
		})
	}
}

#[cfg(test)]
impl ApplicationContext {
	/// Context with the test configuration backed by a fresh in-memory database.
	pub async fn test(time_source: TimeSource) -> ApplicationContext {
		let mut configuration =
			Configuration::from_file("test/files/test-configuration.toml").expect("Failed to load test configuration");
		configuration.database_url = "sqlite::memory:".to_string();

		ApplicationContext::new(configuration, time_source)
			.await
			.expect("Failed to create application context")
	}
}
