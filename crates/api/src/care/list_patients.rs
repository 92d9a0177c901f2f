use crate::error::CarebridgeError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use carebridge_api_structs::list_patients::*;
use carebridge_domain::User;
use carebridge_infra::AppContext;

pub async fn list_patients_controller(
    http_req: HttpRequest,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, CarebridgeError> {
    let caregiver = protect_route(&http_req, &ctx).await?;

    let usecase = ListPatientsUseCase { caregiver };

    execute(usecase, &ctx)
        .await
        .map(|patients| HttpResponse::Ok().json(APIResponse::new(patients)))
        .map_err(CarebridgeError::from)
}

/// The patients under a caregiver's care, resolved to full profiles.
/// Links whose patient no longer resolves are skipped.
#[derive(Debug)]
pub struct ListPatientsUseCase {
    pub caregiver: User,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotACaregiver,
}

impl From<UseCaseError> for CarebridgeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotACaregiver => Self::Unauthorized("User is not a caregiver".into()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ListPatientsUseCase {
    type Response = Vec<User>;

    type Error = UseCaseError;

    const NAME: &'static str = "ListPatients";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        if !self.caregiver.is_caregiver() {
            return Err(UseCaseError::NotACaregiver);
        }

        let links = ctx
            .repos
            .care_links
            .find_by_caregiver(&self.caregiver.id)
            .await;
        let mut patients = Vec::with_capacity(links.len());
        for link in links {
            if let Some(patient) = ctx.repos.users.find(&link.patient_id).await {
                patients.push(patient);
            }
        }
        Ok(patients)
    }
}
