use super::IPushTokenRepo;
use crate::repos::shared::inmemory_repo::*;
use carebridge_domain::{PushToken, ID};

pub struct InMemoryPushTokenRepo {
    tokens: std::sync::Mutex<Vec<PushToken>>,
}

impl InMemoryPushTokenRepo {
    pub fn new() -> Self {
        Self {
            tokens: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IPushTokenRepo for InMemoryPushTokenRepo {
    async fn insert(&self, token: &PushToken) -> anyhow::Result<()> {
        insert(token, &self.tokens);
        Ok(())
    }

    async fn save(&self, token: &PushToken) -> anyhow::Result<()> {
        save(token, &self.tokens);
        Ok(())
    }

    async fn find_by_device(&self, device_id: &str) -> Option<PushToken> {
        find_one_by(&self.tokens, |t: &PushToken| t.device_id == device_id)
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<PushToken> {
        find_by(&self.tokens, |t: &PushToken| t.user_id == *user_id)
    }
}
