use crate::dtos::AgentRoomDTO;
use carebridge_domain::AgentRoom;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRoomResponse {
    pub room: AgentRoomDTO,
}

impl AgentRoomResponse {
    pub fn new(room: AgentRoom) -> Self {
        Self {
            room: AgentRoomDTO::new(room),
        }
    }
}

pub mod dispatch_agent {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub metadata: Option<serde_json::Value>,
    }

    pub type APIResponse = AgentRoomResponse;
}

pub mod get_agent_session {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub room: Option<AgentRoomDTO>,
    }

    impl APIResponse {
        pub fn new(room: Option<AgentRoom>) -> Self {
            Self {
                room: room.map(AgentRoomDTO::new),
            }
        }
    }
}

pub mod end_agent_session {
    use super::*;

    #[derive(Serialize, Deserialize)]
    pub struct APIResponse {}

    impl APIResponse {
        pub fn new() -> Self {
            Self {}
        }
    }
}
