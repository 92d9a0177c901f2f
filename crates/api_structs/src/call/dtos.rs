use carebridge_domain::{CallParticipant, OngoingCall, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OngoingCallDTO {
    pub id: ID,
    pub caller: CallParticipant,
    pub receiver: CallParticipant,
    pub channel_name: String,
    pub is_caller_joined: bool,
    pub is_receiver_joined: bool,
}

impl OngoingCallDTO {
    pub fn new(call: OngoingCall) -> Self {
        Self {
            id: call.id,
            caller: call.caller,
            receiver: call.receiver,
            channel_name: call.channel_name,
            is_caller_joined: call.is_caller_joined,
            is_receiver_joined: call.is_receiver_joined,
        }
    }
}
