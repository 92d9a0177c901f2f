use crate::agent::dispatch_agent::DispatchAgentUseCase;
use crate::error::CarebridgeError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use carebridge_api_structs::route_notification::*;
use carebridge_domain::{ChatRoom, PushPayload, RouterAction, User};
use carebridge_infra::AppContext;
use serde_json::{json, Value};
use tracing::warn;

pub async fn route_notification_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, CarebridgeError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = RouteNotificationUseCase {
        user,
        payload: body.0.payload,
    };

    execute(usecase, &ctx)
        .await
        .map(|action| HttpResponse::Ok().json(APIResponse::new(action)))
        .map_err(|_| CarebridgeError::InternalError)
}

/// Classifies an inbound push payload and decides what the client
/// should do with it. The transport may redeliver, the user may tap a
/// stale notification, and the app may cold-start with one pending:
/// every path funnels through here and each branch is idempotent.
///
/// Anything unparseable is dropped with a log line; routing never
/// fails.
#[derive(Debug)]
pub struct RouteNotificationUseCase {
    pub user: User,
    pub payload: Value,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for RouteNotificationUseCase {
    type Response = RouterAction;

    type Error = UseCaseError;

    const NAME: &'static str = "RouteNotification";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        let payload = match serde_json::from_value::<PushPayload>(self.payload.clone()) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(
                    "Dropping notification with unknown or malformed payload: {}",
                    e
                );
                return Ok(RouterAction::Ignored);
            }
        };

        let action = match payload {
            // Live call state comes from the ongoing-call query, not
            // from the payload
            PushPayload::Call { .. } => RouterAction::PresentIncomingCall,

            PushPayload::Event { event_id } => RouterAction::OpenEvent { event_id },

            PushPayload::Message { sender, .. } => {
                let room = match ctx
                    .repos
                    .chat_rooms
                    .find_by_members(&self.user.id, &sender.id)
                    .await
                {
                    Some(room) => room,
                    None => {
                        let room = ChatRoom::new(self.user.id.clone(), sender.id.clone());
                        if let Err(e) = ctx.repos.chat_rooms.insert(&room).await {
                            warn!(
                                "Unable to establish chat room with sender: {}. Err: {:?}",
                                sender.id, e
                            );
                            return Ok(RouterAction::Ignored);
                        }
                        room
                    }
                };
                RouterAction::OpenConversation {
                    chat_room_id: room.id,
                }
            }

            PushPayload::Help => {
                let usecase = DispatchAgentUseCase {
                    patient: self.user.clone(),
                    metadata: json!({
                        "role": "care_companion",
                        "triggerReason": "help_checkin",
                        "patientName": self.user.name,
                    }),
                };
                match execute(usecase, ctx).await {
                    Ok(room) => RouterAction::OpenAgentSession {
                        room_name: room.room_name,
                        token: room.token,
                    },
                    Err(e) => {
                        warn!("Unable to dispatch agent for help check-in: {:?}", e);
                        RouterAction::Ignored
                    }
                }
            }
        };

        Ok(action)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use carebridge_domain::ID;
    use carebridge_infra::setup_context_inmemory;

    async fn setup() -> (AppContext, User) {
        let ctx = setup_context_inmemory();
        let user = User::new("Pat", "pat@example.com");
        ctx.repos.users.insert(&user).await.unwrap();
        (ctx, user)
    }

    async fn route(ctx: &AppContext, user: &User, payload: Value) -> RouterAction {
        let usecase = RouteNotificationUseCase {
            user: user.clone(),
            payload,
        };
        execute(usecase, ctx).await.unwrap()
    }

    #[actix_web::test]
    async fn call_payload_presents_incoming_call_ui() {
        let (ctx, user) = setup().await;
        let payload = json!({
            "type": "call",
            "callId": ID::new().as_string(),
            "channelName": "channel-1",
            "caller": { "id": ID::new().as_string(), "name": "Carol", "image": "" }
        });
        assert_eq!(
            route(&ctx, &user, payload).await,
            RouterAction::PresentIncomingCall
        );
    }

    #[actix_web::test]
    async fn message_payload_establishes_the_conversation_idempotently() {
        let (ctx, user) = setup().await;
        let sender_id = ID::new();
        let payload = json!({
            "type": "message",
            "chatRoomId": ID::new().as_string(),
            "sender": { "id": sender_id.as_string(), "name": "Carol", "image": "" },
            "messagePreview": "hello"
        });

        let first = route(&ctx, &user, payload.clone()).await;
        let room_id = match &first {
            RouterAction::OpenConversation { chat_room_id } => chat_room_id.clone(),
            other => panic!("Expected OpenConversation, got: {:?}", other),
        };
        assert!(ctx
            .repos
            .chat_rooms
            .find_by_members(&user.id, &sender_id)
            .await
            .is_some());

        // Redelivery resolves to the same room
        let second = route(&ctx, &user, payload).await;
        assert_eq!(
            second,
            RouterAction::OpenConversation {
                chat_room_id: room_id
            }
        );
    }

    #[actix_web::test]
    async fn help_payload_dispatches_the_agent_once() {
        let (ctx, user) = setup().await;
        let payload = json!({ "type": "help" });

        let first = route(&ctx, &user, payload.clone()).await;
        let room_name = match &first {
            RouterAction::OpenAgentSession { room_name, .. } => room_name.clone(),
            other => panic!("Expected OpenAgentSession, got: {:?}", other),
        };

        // Duplicate delivery reuses the same agent session
        let second = route(&ctx, &user, payload).await;
        match second {
            RouterAction::OpenAgentSession {
                room_name: second_room,
                ..
            } => assert_eq!(second_room, room_name),
            other => panic!("Expected OpenAgentSession, got: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn malformed_payloads_are_dropped_not_crashed() {
        let (ctx, user) = setup().await;

        let payloads = vec![
            json!({}),
            json!({ "type": "telemetry" }),
            json!({ "type": "message" }),
            json!({ "type": "message", "sender": { "name": "no id" } }),
            json!({ "type": "call", "channelName": 42 }),
            json!({ "type": "event" }),
            json!(null),
            json!("not an object"),
        ];
        for payload in payloads {
            assert_eq!(route(&ctx, &user, payload).await, RouterAction::Ignored);
        }
    }

    #[actix_web::test]
    async fn event_payload_opens_the_event() {
        let (ctx, user) = setup().await;
        let event_id = ID::new();
        let payload = json!({ "type": "event", "eventId": event_id.as_string() });
        assert_eq!(
            route(&ctx, &user, payload).await,
            RouterAction::OpenEvent { event_id }
        );
    }
}
