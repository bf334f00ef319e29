use crate::database::Connection;
use crate::database::error::DatabaseError;
use crate::room::model;
use crate::types::uuid::Uuid;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use static_assertions::assert_obj_safe;


#[async_trait]
pub trait RoomRepository: Send + Sync + 'static {
	async fn get(&self, connection: &mut dyn Connection, room_uuid: Uuid)
	-> Result<Option<model::Room>, DatabaseError>;
	/// All rooms ordered by name.
	async fn list(&self, connection: &mut dyn Connection) -> Result<Vec<model::Room>, DatabaseError>;
	async fn create(
		&self,
		connection: &mut dyn Connection,
		room: &model::NewRoom,
		created_at: DateTime<Utc>,
	) -> Result<model::Room, DatabaseError>;
}

assert_obj_safe!(RoomRepository);
