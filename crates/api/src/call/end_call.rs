use crate::error::CarebridgeError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use carebridge_api_structs::end_call::*;
use carebridge_domain::ID;
use carebridge_infra::AppContext;
use tracing::{info, warn};

pub async fn end_call_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, CarebridgeError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = EndCallUseCase {
        call_id: path_params.call_id.clone(),
        user_id: user.id,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse::new()))
        .map_err(|_| CarebridgeError::InternalError)
}

/// Deletes the call record. Deletion is authoritative: clients observe
/// call absence as termination, no "ended" state is retained. When both
/// parties hang up simultaneously the loser of the race finds nothing
/// to delete, which is fine.
#[derive(Debug)]
pub struct EndCallUseCase {
    pub call_id: ID,
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for EndCallUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "EndCall";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        let call = match ctx.repos.calls.find(&self.call_id).await {
            Some(call) => call,
            None => {
                warn!("Call with id: {} not found", self.call_id);
                return Ok(());
            }
        };

        if !call.is_participant(&self.user_id) {
            warn!(
                "User: {} tried to end call: {} they are not part of",
                self.user_id, self.call_id
            );
            return Ok(());
        }

        ctx.repos.calls.delete(&self.call_id).await;
        info!("Call: {} ended by user: {}", self.call_id, self.user_id);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::call::get_ongoing_call::GetOngoingCallUseCase;
    use carebridge_domain::{OngoingCall, User};
    use carebridge_infra::setup_context_inmemory;

    async fn setup() -> (AppContext, OngoingCall) {
        let ctx = setup_context_inmemory();
        let caller = User::new("Carol", "carol@example.com");
        let receiver = User::new("Pat", "pat@example.com");
        let call = OngoingCall::new((&caller).into(), (&receiver).into());
        ctx.repos.calls.insert(&call).await.unwrap();
        (ctx, call)
    }

    #[actix_web::test]
    async fn either_party_can_end_and_deletion_is_terminal() {
        for pick_receiver in [false, true] {
            let (ctx, call) = setup().await;
            let ender = if pick_receiver {
                call.receiver.id.clone()
            } else {
                call.caller.id.clone()
            };

            let usecase = EndCallUseCase {
                call_id: call.id.clone(),
                user_id: ender,
            };
            execute(usecase, &ctx).await.unwrap();

            // Neither prior participant has an active call anymore
            for user_id in [call.caller.id.clone(), call.receiver.id.clone()] {
                let res = execute(GetOngoingCallUseCase { user_id }, &ctx)
                    .await
                    .unwrap();
                assert!(res.is_none());
            }
        }
    }

    #[actix_web::test]
    async fn stranger_cannot_end_a_call() {
        let (ctx, call) = setup().await;

        let usecase = EndCallUseCase {
            call_id: call.id.clone(),
            user_id: ID::new(),
        };
        execute(usecase, &ctx).await.unwrap();

        assert!(ctx.repos.calls.find(&call.id).await.is_some());
    }

    #[actix_web::test]
    async fn double_hangup_is_a_noop() {
        let (ctx, call) = setup().await;

        let usecase = EndCallUseCase {
            call_id: call.id.clone(),
            user_id: call.caller.id.clone(),
        };
        execute(usecase, &ctx).await.unwrap();

        // The other side hangs up right after; nothing to do
        let usecase = EndCallUseCase {
            call_id: call.id.clone(),
            user_id: call.receiver.id.clone(),
        };
        let res = execute(usecase, &ctx).await;
        assert!(res.is_ok());
    }
}
