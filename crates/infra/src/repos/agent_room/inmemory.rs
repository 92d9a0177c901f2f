use super::IAgentRoomRepo;
use crate::repos::shared::inmemory_repo::*;
use carebridge_domain::{AgentRoom, ID};

pub struct InMemoryAgentRoomRepo {
    rooms: std::sync::Mutex<Vec<AgentRoom>>,
}

impl InMemoryAgentRoomRepo {
    pub fn new() -> Self {
        Self {
            rooms: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IAgentRoomRepo for InMemoryAgentRoomRepo {
    async fn insert(&self, room: &AgentRoom) -> anyhow::Result<()> {
        insert(room, &self.rooms);
        Ok(())
    }

    async fn find_by_patient(&self, patient_id: &ID) -> Option<AgentRoom> {
        find_one_by(&self.rooms, |r: &AgentRoom| r.patient_id == *patient_id)
    }

    async fn delete(&self, room_id: &ID) -> Option<AgentRoom> {
        delete(room_id, &self.rooms)
    }
}
