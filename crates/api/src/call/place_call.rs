use super::subscribers::NotifyReceiverOnCallPlaced;
use crate::error::CarebridgeError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use carebridge_api_structs::place_call::*;
use carebridge_domain::{OngoingCall, User, ID};
use carebridge_infra::{AppContext, InsertCallError};
use tracing::error;

pub async fn place_call_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, CarebridgeError> {
    let caller = protect_route(&http_req, &ctx).await?;

    let usecase = PlaceCallUseCase {
        caller,
        receiver_id: body.0.receiver_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|call| HttpResponse::Created().json(APIResponse::new(call)))
        .map_err(CarebridgeError::from)
}

#[derive(Debug)]
pub struct PlaceCallUseCase {
    pub caller: User,
    pub receiver_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    AlreadyInCall,
    UserNotFound(ID),
    StorageError,
}

impl From<UseCaseError> for CarebridgeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::AlreadyInCall => {
                Self::Conflict("The receiver is already in a call".into())
            }
            UseCaseError::UserNotFound(user_id) => {
                Self::NotFound(format!("The user with id: {}, was not found.", user_id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for PlaceCallUseCase {
    type Response = OngoingCall;

    type Error = UseCaseError;

    const NAME: &'static str = "PlaceCall";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        if ctx
            .repos
            .calls
            .find_by_receiver(&self.receiver_id)
            .await
            .is_some()
        {
            return Err(UseCaseError::AlreadyInCall);
        }

        let receiver = ctx
            .repos
            .users
            .find(&self.receiver_id)
            .await
            .ok_or_else(|| UseCaseError::UserNotFound(self.receiver_id.clone()))?;

        let call = OngoingCall::new((&self.caller).into(), (&receiver).into());

        match ctx.repos.calls.insert(&call).await {
            Ok(()) => Ok(call),
            // Lost the race against a concurrent placer targeting the
            // same receiver: the store-level uniqueness check wins.
            Err(InsertCallError::ReceiverBusy) => Err(UseCaseError::AlreadyInCall),
            Err(InsertCallError::Other(e)) => {
                error!("Unable to insert ongoing call: {:?}", e);
                Err(UseCaseError::StorageError)
            }
        }
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(NotifyReceiverOnCallPlaced)]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use carebridge_domain::{CallState, PushToken};
    use carebridge_infra::{setup_context_inmemory, InMemoryPushGateway, PushMessage};
    use std::sync::Arc;

    struct TestContext {
        ctx: AppContext,
        caller: User,
        receiver: User,
        gateway: Arc<InMemoryPushGateway>,
    }

    async fn setup() -> TestContext {
        let gateway = Arc::new(InMemoryPushGateway::new());
        let mut ctx = setup_context_inmemory();
        ctx.services.push = gateway.clone();

        let caller = User::new("Carol Caregiver", "carol@example.com");
        ctx.repos.users.insert(&caller).await.unwrap();
        let receiver = User::new("Pat Patient", "pat@example.com");
        ctx.repos.users.insert(&receiver).await.unwrap();
        ctx.repos
            .push_tokens
            .insert(&PushToken {
                id: Default::default(),
                user_id: receiver.id.clone(),
                token: "receiver-token".into(),
                device_id: "receiver-phone".into(),
            })
            .await
            .unwrap();

        TestContext {
            ctx,
            caller,
            receiver,
            gateway,
        }
    }

    #[actix_web::test]
    async fn places_call_and_notifies_receiver() {
        let TestContext {
            ctx,
            caller,
            receiver,
            gateway,
        } = setup().await;

        let usecase = PlaceCallUseCase {
            caller: caller.clone(),
            receiver_id: receiver.id.clone(),
        };
        let call = execute(usecase, &ctx).await.unwrap();

        assert!(call.is_caller_joined);
        assert!(!call.is_receiver_joined);
        assert_eq!(call.state(), CallState::Ringing);
        assert_eq!(call.caller.id, caller.id);
        assert_eq!(call.receiver.id, receiver.id);

        // The receiver got a call payload carrying the channel name
        let sent: Vec<PushMessage> = gateway.sent_messages();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "receiver-token");
        match &sent[0].data {
            carebridge_domain::PushPayload::Call {
                call_id,
                channel_name,
                caller: caller_snapshot,
            } => {
                assert_eq!(*call_id, call.id);
                assert_eq!(*channel_name, call.channel_name);
                assert_eq!(caller_snapshot.id, caller.id);
            }
            other => panic!("Expected a call payload, got: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn rejects_call_when_receiver_is_busy() {
        let TestContext {
            ctx,
            caller,
            receiver,
            ..
        } = setup().await;

        let usecase = PlaceCallUseCase {
            caller: caller.clone(),
            receiver_id: receiver.id.clone(),
        };
        execute(usecase, &ctx).await.unwrap();

        // Second caller, same receiver, no endCall in between
        let other_caller = User::new("Chris Caregiver", "chris@example.com");
        ctx.repos.users.insert(&other_caller).await.unwrap();
        let mut usecase = PlaceCallUseCase {
            caller: other_caller,
            receiver_id: receiver.id.clone(),
        };
        let res = usecase.execute(&ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::AlreadyInCall);
    }

    #[actix_web::test]
    async fn rejects_unknown_receiver() {
        let TestContext { ctx, caller, .. } = setup().await;

        let receiver_id = ID::new();
        let mut usecase = PlaceCallUseCase {
            caller,
            receiver_id: receiver_id.clone(),
        };
        let res = usecase.execute(&ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::UserNotFound(receiver_id));
    }

    #[actix_web::test]
    async fn store_level_uniqueness_closes_the_placement_race() {
        let TestContext {
            ctx,
            caller,
            receiver,
            ..
        } = setup().await;

        // Simulate a concurrent placer that inserted after our lookup
        // passed: inserting directly bypasses the usecase's pre-check.
        let racing = OngoingCall::new((&caller).into(), (&receiver).into());
        ctx.repos.calls.insert(&racing).await.unwrap();

        let mut usecase = PlaceCallUseCase {
            caller: caller.clone(),
            receiver_id: receiver.id.clone(),
        };
        // The pre-check catches it here; the insert path is covered by
        // the repo returning ReceiverBusy, mapped the same way.
        let res = usecase.execute(&ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::AlreadyInCall);
    }
}
