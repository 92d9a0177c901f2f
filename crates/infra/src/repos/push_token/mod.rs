mod inmemory;
mod postgres;

use carebridge_domain::{PushToken, ID};
pub use inmemory::InMemoryPushTokenRepo;
pub use postgres::PostgresPushTokenRepo;

#[async_trait::async_trait]
pub trait IPushTokenRepo: Send + Sync {
    async fn insert(&self, token: &PushToken) -> anyhow::Result<()>;
    async fn save(&self, token: &PushToken) -> anyhow::Result<()>;
    async fn find_by_device(&self, device_id: &str) -> Option<PushToken>;
    async fn find_by_user(&self, user_id: &ID) -> Vec<PushToken>;
}
