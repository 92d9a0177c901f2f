mod inmemory;
mod postgres;

use carebridge_domain::{Event, ID};
pub use inmemory::InMemoryEventRepo;
pub use postgres::PostgresEventRepo;

#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    async fn insert(&self, event: &Event) -> anyhow::Result<()>;
    async fn save(&self, event: &Event) -> anyhow::Result<()>;
    async fn find(&self, event_id: &ID) -> Option<Event>;
    async fn find_by_user(&self, user_id: &ID) -> Vec<Event>;
    /// Events for `user_id` with `date_time` in `[start, end)`
    async fn find_by_user_timespan(&self, user_id: &ID, start: i64, end: i64) -> Vec<Event>;
    async fn delete(&self, event_id: &ID) -> Option<Event>;
}
