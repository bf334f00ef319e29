use crate::admin::model::Admin;
use crate::database::error::DatabaseError;
use crate::database::{Database, Repository};
use crate::types::uuid::Uuid;
use crate::utils::time_source::TimeSource;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tracing::{debug, info};

pub mod model;
pub mod repository;

/// Staff accounts: creation with a salted password digest and credential checks.
#[derive(Clone)]
pub struct AdminService {
	database: Arc<dyn Database>,
	repository: Arc<dyn Repository>,
	time_source: TimeSource,
}

impl AdminService {
	pub fn new(database: Arc<dyn Database>, repository: Arc<dyn Repository>, time_source: TimeSource) -> Self {
		Self {
			database,
			repository,
			time_source,
		}
	}

	pub async fn get(&self, admin_uuid: Uuid) -> Result<Option<Admin>, DatabaseError> {
		let mut connection = self.database.connection().await?;
		self.repository.admin().get(&mut *connection, admin_uuid).await
	}

	/// Returns the admin only if both username and password match.
	pub async fn authenticate(&self, username: &str, password: &str) -> Result<Option<Admin>, DatabaseError> {
		let mut connection = self.database.connection().await?;
		let Some(admin) = self.repository.admin().get_by_username(&mut *connection, username).await? else {
			debug!("Admin with username '{username}' not found");
			return Ok(None);
		};

		if password_matches(password, &admin.password_salt, &admin.password_hash) {
			Ok(Some(admin))
		} else {
			debug!("Wrong password for admin '{username}'");
			Ok(None)
		}
	}

	/// Creates the admin unless one with this username already exists, an existing password is kept.
	pub async fn ensure_exists(&self, username: &str, password: &str) -> Result<Admin, DatabaseError> {
		let mut connection = self.database.connection().await?;
		if let Some(admin) = self.repository.admin().get_by_username(&mut *connection, username).await? {
			return Ok(admin);
		}

		let salt = Uuid::new_v4().to_string();
		let admin = self
			.repository
			.admin()
			.create(
				&mut *connection,
				username,
				&password_hash(password, &salt),
				&salt,
				self.time_source.now(),
			)
			.await?;

		info!("Created admin '{username}'");
		Ok(admin)
	}
}

fn password_digest(password: &str, salt: &str) -> Vec<u8> {
	let mut hasher = Sha256::new();
	hasher.update(salt.as_bytes());
	hasher.update(password.as_bytes());
	hasher.finalize().to_vec()
}

fn password_hash(password: &str, salt: &str) -> String {
	hex::encode(password_digest(password, salt))
}

/// Compares in constant time so response timing doesn't leak how much of the digest matched.
fn password_matches(password: &str, salt: &str, stored_hash: &str) -> bool {
	let Ok(stored_digest) = hex::decode(stored_hash) else {
		return false;
	};
	password_digest(password, salt).ct_eq(&stored_digest).into()
}
