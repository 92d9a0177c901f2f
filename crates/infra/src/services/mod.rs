mod agent;
mod push;

pub use agent::{HttpAgentDispatcher, IAgentDispatcher, InMemoryAgentDispatcher};
pub use push::{ExpoPushGateway, IPushGateway, InMemoryPushGateway, PushMessage};

use crate::config::Config;
use std::sync::Arc;

/// External collaborators the core talks to but does not own.
#[derive(Clone)]
pub struct Services {
    pub push: Arc<dyn IPushGateway>,
    pub agent: Arc<dyn IAgentDispatcher>,
}

impl Services {
    pub fn create(config: &Config) -> Self {
        Self {
            push: Arc::new(ExpoPushGateway::new(config.expo_push_url.clone())),
            agent: Arc::new(HttpAgentDispatcher::new(config.agent_dispatch_url.clone())),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            push: Arc::new(InMemoryPushGateway::new()),
            agent: Arc::new(InMemoryAgentDispatcher::new()),
        }
    }
}
