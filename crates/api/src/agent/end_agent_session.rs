use crate::error::CarebridgeError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use carebridge_api_structs::end_agent_session::*;
use carebridge_domain::ID;
use carebridge_infra::AppContext;

pub async fn end_agent_session_controller(
    http_req: HttpRequest,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, CarebridgeError> {
    let patient = protect_route(&http_req, &ctx).await?;

    let usecase = EndAgentSessionUseCase {
        patient_id: patient.id,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse::new()))
        .map_err(CarebridgeError::from)
}

#[derive(Debug)]
pub struct EndAgentSessionUseCase {
    pub patient_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    RoomNotFound,
}

impl From<UseCaseError> for CarebridgeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::RoomNotFound => Self::NotFound("Room not found".into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for EndAgentSessionUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "EndAgentSession";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        let room = ctx
            .repos
            .agent_rooms
            .find_by_patient(&self.patient_id)
            .await
            .ok_or(UseCaseError::RoomNotFound)?;
        ctx.repos.agent_rooms.delete(&room.id).await;
        Ok(())
    }
}
