use crate::error::CarebridgeError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use carebridge_api_structs::dispatch_agent::*;
use carebridge_domain::{AgentRoom, User};
use carebridge_infra::AppContext;
use serde_json::Value;
use tracing::error;
use uuid::Uuid;

pub async fn dispatch_agent_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, CarebridgeError> {
    let patient = protect_route(&http_req, &ctx).await?;

    let usecase = DispatchAgentUseCase {
        patient,
        metadata: body.0.metadata.unwrap_or(Value::Null),
    };

    execute(usecase, &ctx)
        .await
        .map(|room| HttpResponse::Created().json(APIResponse::new(room)))
        .map_err(CarebridgeError::from)
}

/// Sends the configured AI agent into a fresh audio room for the
/// patient. Idempotent: a patient with a live agent room gets that room
/// back instead of a second agent, which also makes duplicate `help`
/// notification deliveries harmless.
#[derive(Debug)]
pub struct DispatchAgentUseCase {
    pub patient: User,
    pub metadata: Value,
}

#[derive(Debug)]
pub enum UseCaseError {
    DispatchFailed,
    StorageError,
}

impl From<UseCaseError> for CarebridgeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::DispatchFailed => Self::InternalError,
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DispatchAgentUseCase {
    type Response = AgentRoom;

    type Error = UseCaseError;

    const NAME: &'static str = "DispatchAgent";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        if let Some(existing) = ctx.repos.agent_rooms.find_by_patient(&self.patient.id).await {
            return Ok(existing);
        }

        let room_name = Uuid::new_v4().to_string();
        let token = ctx
            .services
            .agent
            .dispatch(&room_name, &ctx.config.agent_name, &self.metadata)
            .await
            .map_err(|e| {
                error!(
                    "Unable to dispatch agent for patient: {}. Err: {:?}",
                    self.patient.id, e
                );
                UseCaseError::DispatchFailed
            })?;

        let room = AgentRoom::new(self.patient.id.clone(), room_name, token);
        ctx.repos
            .agent_rooms
            .insert(&room)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(room)
    }
}
