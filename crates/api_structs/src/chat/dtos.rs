use carebridge_domain::{ChatMessage, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageDTO {
    pub id: ID,
    pub chat_room_id: ID,
    pub sender_id: ID,
    pub body: String,
    pub sent_at: i64,
}

impl ChatMessageDTO {
    pub fn new(message: ChatMessage) -> Self {
        Self {
            id: message.id,
            chat_room_id: message.room_id,
            sender_id: message.sender_id,
            body: message.body,
            sent_at: message.sent_at,
        }
    }
}
