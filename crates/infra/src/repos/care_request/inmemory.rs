use super::ICareRequestRepo;
use crate::repos::shared::inmemory_repo::*;
use carebridge_domain::{CareRequest, ID};

pub struct InMemoryCareRequestRepo {
    requests: std::sync::Mutex<Vec<CareRequest>>,
}

impl InMemoryCareRequestRepo {
    pub fn new() -> Self {
        Self {
            requests: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ICareRequestRepo for InMemoryCareRequestRepo {
    async fn insert(&self, request: &CareRequest) -> anyhow::Result<()> {
        insert(request, &self.requests);
        Ok(())
    }

    async fn find(&self, request_id: &ID) -> Option<CareRequest> {
        find(request_id, &self.requests)
    }

    async fn find_pending(&self, caregiver_id: &ID, patient_id: &ID) -> Option<CareRequest> {
        find_one_by(&self.requests, |r: &CareRequest| {
            r.caregiver_id == *caregiver_id && r.patient_id == *patient_id
        })
    }

    async fn find_by_patient(&self, patient_id: &ID) -> Vec<CareRequest> {
        find_by(&self.requests, |r: &CareRequest| r.patient_id == *patient_id)
    }

    async fn delete(&self, request_id: &ID) -> Option<CareRequest> {
        delete(request_id, &self.requests)
    }
}
