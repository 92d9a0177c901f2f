use carebridge_domain::PushPayload;
use serde::Serialize;
use std::sync::Mutex;

/// A single delivery request against the push transport: one message to
/// one device token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PushMessage {
    pub to: String,
    pub title: String,
    pub body: String,
    pub data: PushPayload,
    pub sound: String,
    pub priority: String,
}

impl PushMessage {
    pub fn new(to: String, title: String, body: String, data: PushPayload) -> Self {
        Self {
            to,
            title,
            body,
            data,
            sound: "default".into(),
            priority: "high".into(),
        }
    }
}

/// Opaque deliver-to-token sink. One call per device token; callers
/// tolerate partial per-token failure.
#[async_trait::async_trait]
pub trait IPushGateway: Send + Sync {
    async fn deliver(&self, message: &PushMessage) -> anyhow::Result<()>;
}

/// Gateway speaking the Expo push HTTP API.
pub struct ExpoPushGateway {
    client: reqwest::Client,
    url: String,
}

impl ExpoPushGateway {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait::async_trait]
impl IPushGateway for ExpoPushGateway {
    async fn deliver(&self, message: &PushMessage) -> anyhow::Result<()> {
        let res = self
            .client
            .post(&self.url)
            .json(&vec![message])
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(anyhow::anyhow!(
                "Push delivery request failed with status: {}",
                res.status()
            ));
        }
        Ok(())
    }
}

/// Records deliveries instead of sending them. Tokens added to
/// `failing_tokens` make `deliver` fail, for exercising the retry paths.
pub struct InMemoryPushGateway {
    pub sent: Mutex<Vec<PushMessage>>,
    pub failing_tokens: Mutex<Vec<String>>,
}

impl InMemoryPushGateway {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing_tokens: Mutex::new(Vec::new()),
        }
    }

    pub fn fail_token(&self, token: &str) {
        self.failing_tokens.lock().unwrap().push(token.to_string());
    }

    pub fn sent_messages(&self) -> Vec<PushMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for InMemoryPushGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IPushGateway for InMemoryPushGateway {
    async fn deliver(&self, message: &PushMessage) -> anyhow::Result<()> {
        if self
            .failing_tokens
            .lock()
            .unwrap()
            .iter()
            .any(|t| *t == message.to)
        {
            return Err(anyhow::anyhow!("Simulated delivery failure"));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}
