use crate::error::CarebridgeError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use carebridge_api_structs::list_caregivers::*;
use carebridge_domain::User;
use carebridge_infra::AppContext;

pub async fn list_caregivers_controller(
    http_req: HttpRequest,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, CarebridgeError> {
    let patient = protect_route(&http_req, &ctx).await?;

    let usecase = ListCaregiversUseCase { patient };

    execute(usecase, &ctx)
        .await
        .map(|caregivers| HttpResponse::Ok().json(APIResponse::new(caregivers)))
        .map_err(CarebridgeError::from)
}

#[derive(Debug)]
pub struct ListCaregiversUseCase {
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
impl UseCase for ListCaregiversUseCase {
    type Response = Vec<User>;

    type Error = UseCaseError;

    const NAME: &'static str = "ListCaregivers";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        if !self.patient.is_patient() {
            return Err(UseCaseError::NotAPatient);
        }

        let links = ctx.repos.care_links.find_by_patient(&self.patient.id).await;
        let mut caregivers = Vec::with_capacity(links.len());
        for link in links {
            if let Some(caregiver) = ctx.repos.users.find(&link.caregiver_id).await {
                caregivers.push(caregiver);
            }
        }
        Ok(caregivers)
    }
}
