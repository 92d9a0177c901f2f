use super::IChatMessageRepo;
use crate::repos::shared::inmemory_repo::*;
use carebridge_domain::{ChatMessage, ID};

pub struct InMemoryChatMessageRepo {
    messages: std::sync::Mutex<Vec<ChatMessage>>,
}

impl InMemoryChatMessageRepo {
    pub fn new() -> Self {
        Self {
            messages: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IChatMessageRepo for InMemoryChatMessageRepo {
    async fn insert(&self, message: &ChatMessage) -> anyhow::Result<()> {
        insert(message, &self.messages);
        Ok(())
    }

    async fn find_by_room(&self, room_id: &ID) -> Vec<ChatMessage> {
        let mut messages = find_by(&self.messages, |m: &ChatMessage| m.room_id == *room_id);
        messages.sort_by_key(|m| m.sent_at);
        messages
    }
}
