mod inmemory;
mod postgres;

use carebridge_domain::{ChatMessage, ID};
pub use inmemory::InMemoryChatMessageRepo;
pub use postgres::PostgresChatMessageRepo;

#[async_trait::async_trait]
pub trait IChatMessageRepo: Send + Sync {
    async fn insert(&self, message: &ChatMessage) -> anyhow::Result<()>;
    async fn find_by_room(&self, room_id: &ID) -> Vec<ChatMessage>;
}
