use crate::dtos::OngoingCallDTO;
use carebridge_domain::{OngoingCall, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OngoingCallResponse {
    pub call: OngoingCallDTO,
}

impl OngoingCallResponse {
    pub fn new(call: OngoingCall) -> Self {
        Self {
            call: OngoingCallDTO::new(call),
        }
    }
}

pub mod place_call {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub receiver_id: ID,
    }

    pub type APIResponse = OngoingCallResponse;
}

pub mod get_ongoing_call {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub call: Option<OngoingCallDTO>,
    }

    impl APIResponse {
        pub fn new(call: Option<OngoingCall>) -> Self {
            Self {
                call: call.map(OngoingCallDTO::new),
            }
        }
    }
}

pub mod mark_joined {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub call_id: ID,
    }

    /// `call` is empty when the join was swallowed as a benign race
    /// (call already gone, or the user is not a participant).
    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub call: Option<OngoingCallDTO>,
    }

    impl APIResponse {
        pub fn new(call: Option<OngoingCall>) -> Self {
            Self {
                call: call.map(OngoingCallDTO::new),
            }
        }
    }
}

pub mod end_call {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub call_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    pub struct APIResponse {}

    impl APIResponse {
        pub fn new() -> Self {
            Self {}
        }
    }
}
