use carebridge_utils::create_random_secret;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// HS256 secret used to verify the bearer tokens issued by the
    /// identity provider
    pub auth_secret: String,
    /// Endpoint of the push delivery service (Expo push API)
    pub expo_push_url: String,
    /// Endpoint of the AI-agent dispatch service
    pub agent_dispatch_url: String,
    /// Name of the agent to dispatch on help check-ins
    pub agent_name: String,
}

impl Config {
    pub fn new() -> Self {
        let auth_secret = match std::env::var("AUTH_SECRET") {
            Ok(secret) => secret,
            Err(_) => {
                info!("Did not find AUTH_SECRET environment variable. Going to create one.");
                create_random_secret(32)
            }
        };
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };
        let expo_push_url = std::env::var("EXPO_PUSH_URL")
            .unwrap_or_else(|_| "https://exp.host/--/api/v2/push/send".into());
        let agent_dispatch_url = std::env::var("AGENT_DISPATCH_URL")
            .unwrap_or_else(|_| "http://localhost:8600/dispatch".into());
        let agent_name =
            std::env::var("AGENT_NAME").unwrap_or_else(|_| "care-companion".into());

        Self {
            port,
            auth_secret,
            expo_push_url,
            agent_dispatch_url,
            agent_name,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
