use carebridge_domain::{AgentRoom, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRoomDTO {
    pub id: ID,
    pub patient_id: ID,
    pub room_name: String,
    pub token: String,
}

impl AgentRoomDTO {
    pub fn new(room: AgentRoom) -> Self {
        Self {
            id: room.id,
            patient_id: room.patient_id,
            room_name: room.room_name,
            token: room.token,
        }
    }
}
