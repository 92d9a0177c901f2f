mod inmemory;
mod postgres;

use carebridge_domain::{CareRequest, ID};
pub use inmemory::InMemoryCareRequestRepo;
pub use postgres::PostgresCareRequestRepo;

#[async_trait::async_trait]
pub trait ICareRequestRepo: Send + Sync {
    async fn insert(&self, request: &CareRequest) -> anyhow::Result<()>;
    async fn find(&self, request_id: &ID) -> Option<CareRequest>;
    async fn find_pending(&self, caregiver_id: &ID, patient_id: &ID) -> Option<CareRequest>;
    async fn find_by_patient(&self, patient_id: &ID) -> Vec<CareRequest>;
    async fn delete(&self, request_id: &ID) -> Option<CareRequest>;
}
