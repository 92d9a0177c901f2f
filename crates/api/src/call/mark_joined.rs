use crate::error::CarebridgeError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use carebridge_api_structs::mark_joined::*;
use carebridge_domain::{OngoingCall, ID};
use carebridge_infra::AppContext;
use tracing::warn;

pub async fn mark_joined_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, CarebridgeError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = MarkJoinedUseCase {
        call_id: path_params.call_id.clone(),
        user_id: user.id,
    };

    execute(usecase, &ctx)
        .await
        .map(|call| HttpResponse::Ok().json(APIResponse::new(call)))
        .map_err(CarebridgeError::from)
}

/// Flags the requesting participant as joined on the audio channel.
/// Joining a call that is already gone, or one the user is not part of,
/// is a logged no-op: both hang-up races are benign and must not bubble
/// up to the client.
#[derive(Debug)]
pub struct MarkJoinedUseCase {
    pub call_id: ID,
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for CarebridgeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for MarkJoinedUseCase {
    type Response = Option<OngoingCall>;

    type Error = UseCaseError;

    const NAME: &'static str = "MarkJoined";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        let mut call = match ctx.repos.calls.find(&self.call_id).await {
            Some(call) => call,
            None => {
                warn!(
                    "User: {} tried to join call: {} which no longer exists",
                    self.user_id, self.call_id
                );
                return Ok(None);
            }
        };

        let side = match call.side_of(&self.user_id) {
            Some(side) => side,
            None => {
                warn!(
                    "User: {} is not a participant of call: {}",
                    self.user_id, self.call_id
                );
                return Ok(None);
            }
        };

        call.mark_joined(side);
        ctx.repos
            .calls
            .save(&call)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(Some(call))
    }
}
