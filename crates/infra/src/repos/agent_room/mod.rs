mod inmemory;
mod postgres;

use carebridge_domain::{AgentRoom, ID};
pub use inmemory::InMemoryAgentRoomRepo;
pub use postgres::PostgresAgentRoomRepo;

#[async_trait::async_trait]
pub trait IAgentRoomRepo: Send + Sync {
    async fn insert(&self, room: &AgentRoom) -> anyhow::Result<()>;
    async fn find_by_patient(&self, patient_id: &ID) -> Option<AgentRoom>;
    async fn delete(&self, room_id: &ID) -> Option<AgentRoom>;
}
