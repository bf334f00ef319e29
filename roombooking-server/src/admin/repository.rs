use crate::admin::model;
use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::types::uuid::Uuid;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use static_assertions::assert_obj_safe;


#[async_trait]
pub trait AdminRepository: Send + Sync + 'static {
	async fn get(&self, connection: &mut dyn Connection, admin_uuid: Uuid)
	-> Result<Option<model::Admin>, DatabaseError>;
	async fn get_by_username(
		&self,
		connection: &mut dyn Connection,
		username: &str,
	) -> Result<Option<model::Admin>, DatabaseError>;
	async fn create(
		&self,
		connection: &mut dyn Connection,
		username: &str,
		password_hash: &str,
		password_salt: &str,
		created_at: DateTime<Utc>,
	) -> Result<model::Admin, DatabaseError>;
}

assert_obj_safe!(AdminRepository);
