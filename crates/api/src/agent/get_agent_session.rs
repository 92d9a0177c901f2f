use crate::error::CarebridgeError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use carebridge_api_structs::get_agent_session::*;
use carebridge_domain::{AgentRoom, ID};
use carebridge_infra::AppContext;

pub async fn get_agent_session_controller(
    http_req: HttpRequest,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, CarebridgeError> {
    let patient = protect_route(&http_req, &ctx).await?;

    let usecase = GetAgentSessionUseCase {
        patient_id: patient.id,
    };

    execute(usecase, &ctx)
        .await
        .map(|room| HttpResponse::Ok().json(APIResponse::new(room)))
        .map_err(|_| CarebridgeError::InternalError)
}

#[derive(Debug)]
pub struct GetAgentSessionUseCase {
    pub patient_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetAgentSessionUseCase {
    type Response = Option<AgentRoom>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetAgentSession";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        Ok(ctx.repos.agent_rooms.find_by_patient(&self.patient_id).await)
    }
}
