use super::subscribers::NotifyReceiverOnMessageSent;
use crate::error::CarebridgeError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use carebridge_api_structs::send_message::*;
use carebridge_domain::{ChatMessage, ChatRoom, User, ID};
use carebridge_infra::AppContext;

pub async fn send_message_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, CarebridgeError> {
    let sender = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = SendMessageUseCase {
        sender,
        receiver_id: body.receiver_id,
        body: body.body,
    };

    execute(usecase, &ctx)
        .await
        .map(|message| HttpResponse::Created().json(APIResponse::new(message)))
        .map_err(CarebridgeError::from)
}

/// Stores a chat message, establishing the two-party room on first
/// contact.
#[derive(Debug)]
pub struct SendMessageUseCase {
    pub sender: User,
    pub receiver_id: ID,
    pub body: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    EmptyMessage,
    ReceiverNotFound(ID),
    StorageError,
}

impl From<UseCaseError> for CarebridgeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyMessage => {
                Self::BadClientData("The message body must not be empty".into())
            }
            UseCaseError::ReceiverNotFound(user_id) => {
                Self::NotFound(format!("The user with id: {}, was not found.", user_id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendMessageUseCase {
    type Response = ChatMessage;

    type Error = UseCaseError;

    const NAME: &'static str = "SendMessage";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        if self.body.trim().is_empty() {
            return Err(UseCaseError::EmptyMessage);
        }

        let receiver = ctx
            .repos
            .users
            .find(&self.receiver_id)
            .await
            .ok_or_else(|| UseCaseError::ReceiverNotFound(self.receiver_id.clone()))?;

        let room = match ctx
            .repos
            .chat_rooms
            .find_by_members(&self.sender.id, &receiver.id)
            .await
        {
            Some(room) => room,
            None => {
                let room = ChatRoom::new(self.sender.id.clone(), receiver.id.clone());
                ctx.repos
                    .chat_rooms
                    .insert(&room)
                    .await
                    .map_err(|_| UseCaseError::StorageError)?;
                room
            }
        };

        let message = ChatMessage {
            id: Default::default(),
            room_id: room.id,
            sender_id: self.sender.id.clone(),
            body: self.body.clone(),
            sent_at: ctx.sys.get_timestamp_millis(),
        };
        ctx.repos
            .chat_messages
            .insert(&message)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(message)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(NotifyReceiverOnMessageSent)]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use carebridge_domain::{PushPayload, PushToken};
    use carebridge_infra::{setup_context_inmemory, InMemoryPushGateway};
    use std::sync::Arc;

    struct TestContext {
        ctx: AppContext,
        sender: User,
        receiver: User,
        gateway: Arc<InMemoryPushGateway>,
    }

    async fn setup() -> TestContext {
        let gateway = Arc::new(InMemoryPushGateway::new());
        let mut ctx = setup_context_inmemory();
        ctx.services.push = gateway.clone();

        let sender = User::new("Carol", "carol@example.com");
        ctx.repos.users.insert(&sender).await.unwrap();
        let receiver = User::new("Pat", "pat@example.com");
        ctx.repos.users.insert(&receiver).await.unwrap();
        ctx.repos
            .push_tokens
            .insert(&PushToken {
                id: Default::default(),
                user_id: receiver.id.clone(),
                token: "pat-token".into(),
                device_id: "pat-phone".into(),
            })
            .await
            .unwrap();

        TestContext {
            ctx,
            sender,
            receiver,
            gateway,
        }
    }

    #[actix_web::test]
    async fn first_message_creates_the_room_and_notifies_the_receiver() {
        let TestContext {
            ctx,
            sender,
            receiver,
            gateway,
        } = setup().await;

        let usecase = SendMessageUseCase {
            sender: sender.clone(),
            receiver_id: receiver.id.clone(),
            body: "Did you take your pills?".into(),
        };
        let message = execute(usecase, &ctx).await.unwrap();

        let room = ctx
            .repos
            .chat_rooms
            .find_by_members(&sender.id, &receiver.id)
            .await
            .unwrap();
        assert_eq!(message.room_id, room.id);

        let sent = gateway.sent_messages();
        assert_eq!(sent.len(), 1);
        match &sent[0].data {
            PushPayload::Message {
                chat_room_id,
                sender: sender_snapshot,
                message_preview,
            } => {
                assert_eq!(*chat_room_id, room.id);
                assert_eq!(sender_snapshot.id, sender.id);
                assert_eq!(message_preview, "Did you take your pills?");
            }
            other => panic!("Expected a message payload, got: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn second_message_reuses_the_room() {
        let TestContext {
            ctx,
            sender,
            receiver,
            ..
        } = setup().await;

        let usecase = SendMessageUseCase {
            sender: sender.clone(),
            receiver_id: receiver.id.clone(),
            body: "First".into(),
        };
        let first = execute(usecase, &ctx).await.unwrap();

        // The reply goes through the same room, members reversed
        let usecase = SendMessageUseCase {
            sender: receiver.clone(),
            receiver_id: sender.id.clone(),
            body: "Second".into(),
        };
        let second = execute(usecase, &ctx).await.unwrap();

        assert_eq!(first.room_id, second.room_id);
        assert_eq!(
            ctx.repos.chat_messages.find_by_room(&first.room_id).await.len(),
            2
        );
    }

    #[actix_web::test]
    async fn rejects_empty_bodies() {
        let TestContext {
            ctx,
            sender,
            receiver,
            ..
        } = setup().await;

        let mut usecase = SendMessageUseCase {
            sender,
            receiver_id: receiver.id,
            body: "   ".into(),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::EmptyMessage
        );
    }
}
