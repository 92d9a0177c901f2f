use crate::call::CallParticipant;
use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// A device -> Expo push token mapping. At most one row per device id;
/// a user with several devices holds several rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PushToken {
    pub id: ID,
    pub user_id: ID,
    pub token: String,
    pub device_id: String,
}

impl Entity<ID> for PushToken {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

/// The `data` object carried by every push notification, discriminated
/// by its `type` field. Field names are the wire names the mobile client
/// expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PushPayload {
    #[serde(rename_all = "camelCase")]
    Call {
        call_id: ID,
        channel_name: String,
        caller: CallParticipant,
    },
    #[serde(rename_all = "camelCase")]
    Message {
        chat_room_id: ID,
        sender: CallParticipant,
        message_preview: String,
    },
    #[serde(rename_all = "camelCase")]
    Event { event_id: ID },
    Help,
}

/// What the receiving client should do with an inbound notification.
/// `Ignored` is the graceful degradation for unknown or malformed
/// payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum RouterAction {
    #[serde(rename_all = "camelCase")]
    OpenConversation { chat_room_id: ID },
    PresentIncomingCall,
    #[serde(rename_all = "camelCase")]
    OpenEvent { event_id: ID },
    #[serde(rename_all = "camelCase")]
    OpenAgentSession { room_name: String, token: String },
    Ignored,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn call_payload_wire_format() {
        let caller_id = ID::new();
        let call_id = ID::new();
        let payload = PushPayload::Call {
            call_id: call_id.clone(),
            channel_name: "channel-1".into(),
            caller: CallParticipant {
                id: caller_id.clone(),
                name: "Alice".into(),
                image: "https://example.com/a.png".into(),
            },
        };

        let encoded = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            encoded,
            json!({
                "type": "call",
                "callId": call_id.as_string(),
                "channelName": "channel-1",
                "caller": {
                    "id": caller_id.as_string(),
                    "name": "Alice",
                    "image": "https://example.com/a.png"
                }
            })
        );
    }

    #[test]
    fn help_payload_has_only_the_discriminator() {
        let encoded = serde_json::to_value(&PushPayload::Help).unwrap();
        assert_eq!(encoded, json!({ "type": "help" }));
    }

    #[test]
    fn message_payload_roundtrips() {
        let payload = PushPayload::Message {
            chat_room_id: ID::new(),
            sender: CallParticipant {
                id: ID::new(),
                name: "Bob".into(),
                image: String::new(),
            },
            message_preview: "see you at 3".into(),
        };
        let encoded = serde_json::to_value(&payload).unwrap();
        let decoded: PushPayload = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn unknown_type_fails_to_decode() {
        let res: Result<PushPayload, _> =
            serde_json::from_value(json!({ "type": "telemetry" }));
        assert!(res.is_err());
    }
}
