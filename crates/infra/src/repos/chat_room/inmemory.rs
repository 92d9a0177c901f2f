use super::IChatRoomRepo;
use crate::repos::shared::inmemory_repo::*;
use carebridge_domain::{ChatRoom, ID};

pub struct InMemoryChatRoomRepo {
    rooms: std::sync::Mutex<Vec<ChatRoom>>,
}

impl InMemoryChatRoomRepo {
    pub fn new() -> Self {
        Self {
            rooms: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IChatRoomRepo for InMemoryChatRoomRepo {
    async fn insert(&self, room: &ChatRoom) -> anyhow::Result<()> {
        insert(room, &self.rooms);
        Ok(())
    }

    async fn find(&self, room_id: &ID) -> Option<ChatRoom> {
        find(room_id, &self.rooms)
    }

    async fn find_by_members(&self, member_a: &ID, member_b: &ID) -> Option<ChatRoom> {
        find_one_by(&self.rooms, |r: &ChatRoom| r.is_between(member_a, member_b))
    }
}
