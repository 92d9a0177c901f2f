use super::ICareLinkRepo;
use crate::repos::shared::inmemory_repo::*;
use carebridge_domain::{CareLink, ID};

pub struct InMemoryCareLinkRepo {
    links: std::sync::Mutex<Vec<CareLink>>,
}

impl InMemoryCareLinkRepo {
    pub fn new() -> Self {
        Self {
            links: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ICareLinkRepo for InMemoryCareLinkRepo {
    async fn insert(&self, link: &CareLink) -> anyhow::Result<()> {
        insert(link, &self.links);
        Ok(())
    }

    async fn find(&self, caregiver_id: &ID, patient_id: &ID) -> Option<CareLink> {
        find_one_by(&self.links, |l: &CareLink| {
            l.caregiver_id == *caregiver_id && l.patient_id == *patient_id
        })
    }

    async fn find_by_caregiver(&self, caregiver_id: &ID) -> Vec<CareLink> {
        find_by(&self.links, |l: &CareLink| l.caregiver_id == *caregiver_id)
    }

    async fn find_by_patient(&self, patient_id: &ID) -> Vec<CareLink> {
        find_by(&self.links, |l: &CareLink| l.patient_id == *patient_id)
    }
}
