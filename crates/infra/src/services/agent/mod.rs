use serde_json::Value;
use std::sync::Mutex;

/// Opaque AI-agent dispatch service: asks an external orchestrator to
/// send the named agent into the given room and returns the join token
/// for the patient.
#[async_trait::async_trait]
pub trait IAgentDispatcher: Send + Sync {
    async fn dispatch(
        &self,
        room_name: &str,
        agent_name: &str,
        metadata: &Value,
    ) -> anyhow::Result<String>;
}

pub struct HttpAgentDispatcher {
    client: reqwest::Client,
    url: String,
}

impl HttpAgentDispatcher {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct DispatchRequest<'a> {
    room_name: &'a str,
    agent_name: &'a str,
    metadata: &'a Value,
}

#[derive(Debug, serde::Deserialize)]
struct DispatchResponse {
    token: String,
}

#[async_trait::async_trait]
impl IAgentDispatcher for HttpAgentDispatcher {
    async fn dispatch(
        &self,
        room_name: &str,
        agent_name: &str,
        metadata: &Value,
    ) -> anyhow::Result<String> {
        let res = self
            .client
            .post(&self.url)
            .json(&DispatchRequest {
                room_name,
                agent_name,
                metadata,
            })
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(anyhow::anyhow!(
                "Agent dispatch request failed with status: {}",
                res.status()
            ));
        }
        let body: DispatchResponse = res.json().await?;
        Ok(body.token)
    }
}

/// Records dispatches and hands out a static token.
pub struct InMemoryAgentDispatcher {
    pub dispatched: Mutex<Vec<(String, String)>>,
}

impl InMemoryAgentDispatcher {
    pub fn new() -> Self {
        Self {
            dispatched: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryAgentDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IAgentDispatcher for InMemoryAgentDispatcher {
    async fn dispatch(
        &self,
        room_name: &str,
        agent_name: &str,
        _metadata: &Value,
    ) -> anyhow::Result<String> {
        self.dispatched
            .lock()
            .unwrap()
            .push((room_name.to_string(), agent_name.to_string()));
        Ok("agent-session-token".to_string())
    }
}
