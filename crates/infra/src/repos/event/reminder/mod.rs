mod inmemory;
mod postgres;

use carebridge_domain::{ReminderJob, ID};
pub use inmemory::InMemoryReminderJobRepo;
pub use postgres::PostgresReminderJobRepo;

#[async_trait::async_trait]
pub trait IReminderJobRepo: Send + Sync {
    async fn insert(&self, job: &ReminderJob) -> anyhow::Result<()>;
    /// Removes and returns every job due at or before `before`. The
    /// periodic firing pass owns the returned jobs exclusively.
    async fn delete_all_before(&self, before: i64) -> Vec<ReminderJob>;
    async fn find_by_event(&self, event_id: &ID) -> Vec<ReminderJob>;
}
