use crate::error::CarebridgeError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use carebridge_api_structs::get_ongoing_call::*;
use carebridge_domain::{OngoingCall, ID};
use carebridge_infra::AppContext;

pub async fn get_ongoing_call_controller(
    http_req: HttpRequest,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, CarebridgeError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetOngoingCallUseCase { user_id: user.id };

    execute(usecase, &ctx)
        .await
        .map(|call| HttpResponse::Ok().json(APIResponse::new(call)))
        .map_err(|_| CarebridgeError::InternalError)
}

/// Resolves the call a user is currently part of: the receiver side
/// wins over the caller side. A user can appear as caller of one call
/// while not being receiver of another, never two calls on the same
/// side.
#[derive(Debug)]
pub struct GetOngoingCallUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetOngoingCallUseCase {
    type Response = Option<OngoingCall>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetOngoingCall";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        if let Some(call) = ctx.repos.calls.find_by_receiver(&self.user_id).await {
            return Ok(Some(call));
        }
        Ok(ctx.repos.calls.find_by_caller(&self.user_id).await)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use carebridge_domain::User;
    use carebridge_infra::setup_context_inmemory;

    #[actix_web::test]
    async fn finds_call_for_both_sides_and_none_for_strangers() {
        let ctx = setup_context_inmemory();
        let caller = User::new("Carol", "carol@example.com");
        let receiver = User::new("Pat", "pat@example.com");
        let call = OngoingCall::new((&caller).into(), (&receiver).into());
        ctx.repos.calls.insert(&call).await.unwrap();

        let res = execute(GetOngoingCallUseCase { user_id: receiver.id }, &ctx)
            .await
            .unwrap();
        assert_eq!(res.as_ref().map(|c| c.id.clone()), Some(call.id.clone()));

        let res = execute(GetOngoingCallUseCase { user_id: caller.id }, &ctx)
            .await
            .unwrap();
        assert_eq!(res.as_ref().map(|c| c.id.clone()), Some(call.id));

        let res = execute(GetOngoingCallUseCase { user_id: ID::new() }, &ctx)
            .await
            .unwrap();
        assert!(res.is_none());
    }
}
