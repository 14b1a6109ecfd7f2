use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::room::{event::CreateRoom, Room, RoomListing};

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Registers a new room and assigns its id.
    async fn create(&self, event: CreateRoom) -> AppResult<Room>;
    /// All rooms in insertion order, each joined with the first booking that
    /// references it.
    async fn find_all(&self) -> AppResult<Vec<RoomListing>>;
}
