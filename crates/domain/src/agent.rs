use crate::shared::entity::{Entity, ID};

/// An active AI-agent session for a patient. At most one live room per
/// patient; routing a duplicate `help` notification reuses the existing
/// room instead of dispatching a second agent.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentRoom {
    pub id: ID,
    pub patient_id: ID,
    pub room_name: String,
    /// Join token issued by the agent dispatch service.
    pub token: String,
}

impl AgentRoom {
    pub fn new(patient_id: ID, room_name: String, token: String) -> Self {
        Self {
            id: Default::default(),
            patient_id,
            room_name,
            token,
        }
    }
}

impl Entity<ID> for AgentRoom {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
