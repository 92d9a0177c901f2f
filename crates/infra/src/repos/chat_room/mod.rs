mod inmemory;
mod postgres;

use carebridge_domain::{ChatRoom, ID};
pub use inmemory::InMemoryChatRoomRepo;
pub use postgres::PostgresChatRoomRepo;

#[async_trait::async_trait]
pub trait IChatRoomRepo: Send + Sync {
    async fn insert(&self, room: &ChatRoom) -> anyhow::Result<()>;
    async fn find(&self, room_id: &ID) -> Option<ChatRoom>;
    /// Membership lookup is unordered: (a, b) and (b, a) find the same room.
    async fn find_by_members(&self, member_a: &ID, member_b: &ID) -> Option<ChatRoom>;
}
