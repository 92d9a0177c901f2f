use crate::error::CarebridgeError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use carebridge_api_structs::list_care_requests::*;
use carebridge_domain::{CareRequest, User};
use carebridge_infra::AppContext;

pub async fn list_care_requests_controller(
    http_req: HttpRequest,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, CarebridgeError> {
    let patient = protect_route(&http_req, &ctx).await?;

    let usecase = ListCareRequestsUseCase { patient };

    execute(usecase, &ctx)
        .await
        .map(|requests| HttpResponse::Ok().json(APIResponse::new(requests)))
        .map_err(CarebridgeError::from)
}

/// The pending caregiver requests awaiting this patient's confirmation.
#[derive(Debug)]
pub struct ListCareRequestsUseCase {
    pub patient: User,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotAPatient,
}

impl From<UseCaseError> for CarebridgeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotAPatient => Self::Unauthorized("User is not a patient".into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ListCareRequestsUseCase {
    type Response = Vec<CareRequest>;

    type Error = UseCaseError;

    const NAME: &'static str = "ListCareRequests";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        if !self.patient.is_patient() {
            return Err(UseCaseError::NotAPatient);
        }
        Ok(ctx
            .repos
            .care_requests
            .find_by_patient(&self.patient.id)
            .await)
    }
}
