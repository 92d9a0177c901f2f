use crate::dtos::ChatMessageDTO;
use carebridge_domain::{ChatMessage, ID};
use serde::{Deserialize, Serialize};

pub mod send_message {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub receiver_id: ID,
        pub body: String,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: ChatMessageDTO,
    }

    impl APIResponse {
        pub fn new(message: ChatMessage) -> Self {
            Self {
                message: ChatMessageDTO::new(message),
            }
        }
    }
}
