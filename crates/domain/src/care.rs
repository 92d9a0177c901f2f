use crate::shared::entity::{Entity, ID};

/// An established caregiver <-> patient relationship. One row per pair,
/// queried from both directions. Created only by accepting a `CareRequest`.
#[derive(Debug, Clone, PartialEq)]
pub struct CareLink {
    pub id: ID,
    pub caregiver_id: ID,
    pub patient_id: ID,
    pub caregiver_name: String,
    pub patient_name: String,
}

impl Entity<ID> for CareLink {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

/// A pending request from a caregiver to take a patient under care.
/// Accepting turns it into a `CareLink` and deletes the request,
/// rejecting just deletes it.
#[derive(Debug, Clone, PartialEq)]
pub struct CareRequest {
    pub id: ID,
    pub caregiver_id: ID,
    pub patient_id: ID,
    pub caregiver_name: String,
    pub patient_name: String,
}

impl Entity<ID> for CareRequest {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
