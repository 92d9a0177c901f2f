use crate::error::CarebridgeError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use carebridge_api_structs::reject_care_request::*;
use carebridge_domain::{CareRequest, User, ID};
use carebridge_infra::AppContext;

pub async fn reject_care_request_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, CarebridgeError> {
    let patient = protect_route(&http_req, &ctx).await?;

    let usecase = RejectCareRequestUseCase {
        patient,
        request_id: path_params.request_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|request| HttpResponse::Ok().json(APIResponse::new(request)))
        .map_err(CarebridgeError::from)
}

#[derive(Debug)]
pub struct RejectCareRequestUseCase {
    pub patient: User,
    pub request_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotAPatient,
    RequestNotFound(ID),
    RequestNotForUser,
}

impl From<UseCaseError> for CarebridgeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotAPatient => Self::Unauthorized("User is not a patient".into()),
            UseCaseError::RequestNotFound(request_id) => Self::NotFound(format!(
                "The care request with id: {}, was not found.",
                request_id
            )),
            UseCaseError::RequestNotForUser => {
                Self::Unauthorized("Request is not for this patient".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RejectCareRequestUseCase {
    type Response = CareRequest;

    type Error = UseCaseError;

    const NAME: &'static str = "RejectCareRequest";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        if !self.patient.is_patient() {
            return Err(UseCaseError::NotAPatient);
        }

        let request = ctx
            .repos
            .care_requests
            .find(&self.request_id)
            .await
            .ok_or_else(|| UseCaseError::RequestNotFound(self.request_id.clone()))?;

        if request.patient_id != self.patient.id {
            return Err(UseCaseError::RequestNotForUser);
        }

        ctx.repos.care_requests.delete(&request.id).await;
        Ok(request)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::care::send_care_request::SendCareRequestUseCase;
    use carebridge_domain::Role;
    use carebridge_infra::setup_context_inmemory;

    #[actix_web::test]
    async fn rejecting_removes_the_request_without_creating_a_link() {
        let ctx = setup_context_inmemory();
        let mut caregiver = User::new("Carol", "carol@example.com");
        caregiver.role = Some(Role::Caregiver);
        ctx.repos.users.insert(&caregiver).await.unwrap();
        let mut patient = User::new("Pat", "pat@example.com");
        patient.role = Some(Role::Patient);
        ctx.repos.users.insert(&patient).await.unwrap();

        let usecase = SendCareRequestUseCase {
            caregiver: caregiver.clone(),
            patient_email: patient.email.clone(),
        };
        let request = execute(usecase, &ctx).await.unwrap();

        let usecase = RejectCareRequestUseCase {
            patient: patient.clone(),
            request_id: request.id.clone(),
        };
        execute(usecase, &ctx).await.unwrap();

        assert!(ctx.repos.care_requests.find(&request.id).await.is_none());
        assert!(ctx
            .repos
            .care_links
            .find(&caregiver.id, &patient.id)
            .await
            .is_none());
    }
}
