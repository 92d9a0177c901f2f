mod inmemory;
mod postgres;

use carebridge_domain::{HelpCheckinSetting, ID};
pub use inmemory::InMemoryHelpCheckinRepo;
pub use postgres::PostgresHelpCheckinRepo;

#[async_trait::async_trait]
pub trait IHelpCheckinRepo: Send + Sync {
    async fn insert(&self, setting: &HelpCheckinSetting) -> anyhow::Result<()>;
    async fn save(&self, setting: &HelpCheckinSetting) -> anyhow::Result<()>;
    async fn find_by_patient(&self, patient_id: &ID) -> Option<HelpCheckinSetting>;
    async fn find_all_active(&self) -> Vec<HelpCheckinSetting>;
}
