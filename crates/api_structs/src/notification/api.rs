use carebridge_domain::RouterAction;
use serde::{Deserialize, Serialize};

pub mod store_push_token {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub token: String,
        pub device_id: String,
    }

    #[derive(Serialize, Deserialize)]
    pub struct APIResponse {}

    impl APIResponse {
        pub fn new() -> Self {
            Self {}
        }
    }
}

pub mod route_notification {
    use super::*;

    /// The raw `data` object of a received push notification, forwarded
    /// verbatim. Malformed payloads are valid input.
    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub payload: serde_json::Value,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub action: RouterAction,
    }

    impl APIResponse {
        pub fn new(action: RouterAction) -> Self {
            Self { action }
        }
    }
}
