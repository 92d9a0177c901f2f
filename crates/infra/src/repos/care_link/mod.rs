mod inmemory;
mod postgres;

use carebridge_domain::{CareLink, ID};
pub use inmemory::InMemoryCareLinkRepo;
pub use postgres::PostgresCareLinkRepo;

#[async_trait::async_trait]
pub trait ICareLinkRepo: Send + Sync {
    async fn insert(&self, link: &CareLink) -> anyhow::Result<()>;
    async fn find(&self, caregiver_id: &ID, patient_id: &ID) -> Option<CareLink>;
    async fn find_by_caregiver(&self, caregiver_id: &ID) -> Vec<CareLink>;
    async fn find_by_patient(&self, patient_id: &ID) -> Vec<CareLink>;
}
