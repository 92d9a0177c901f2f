use crate::error::CarebridgeError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use carebridge_api_structs::accept_care_request::*;
use carebridge_domain::{CareLink, User, ID};
use carebridge_infra::AppContext;

pub async fn accept_care_request_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, CarebridgeError> {
    let patient = protect_route(&http_req, &ctx).await?;

    let usecase = AcceptCareRequestUseCase {
        patient,
        request_id: path_params.request_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|link| HttpResponse::Created().json(APIResponse::new(link)))
        .map_err(CarebridgeError::from)
}

/// Turns a pending request into an established care link and removes
/// the request. The link is one row queried from both directions, so
/// acceptance can never leave a half-created relationship behind.
#[derive(Debug)]
pub struct AcceptCareRequestUseCase {
    pub patient: User,
    pub request_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotAPatient,
    RequestNotFound(ID),
    RequestNotForUser,
    CaregiverNotFound(ID),
    StorageError,
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
            UseCaseError::CaregiverNotFound(caregiver_id) => Self::NotFound(format!(
                "The caregiver with id: {}, was not found.",
                caregiver_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for AcceptCareRequestUseCase {
    type Response = CareLink;

    type Error = UseCaseError;

    const NAME: &'static str = "AcceptCareRequest";

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

        let caregiver = ctx
            .repos
            .users
            .find(&request.caregiver_id)
            .await
            .ok_or_else(|| UseCaseError::CaregiverNotFound(request.caregiver_id.clone()))?;

        let link = CareLink {
            id: Default::default(),
            caregiver_id: caregiver.id.clone(),
            patient_id: self.patient.id.clone(),
            caregiver_name: caregiver.name.clone(),
            patient_name: self.patient.name.clone(),
        };
        ctx.repos
            .care_links
            .insert(&link)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        ctx.repos.care_requests.delete(&request.id).await;

        Ok(link)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::care::send_care_request::SendCareRequestUseCase;
    use carebridge_domain::Role;
    use carebridge_infra::setup_context_inmemory;

    struct TestContext {
        ctx: AppContext,
        caregiver: User,
        patient: User,
        request_id: ID,
    }

    async fn setup() -> TestContext {
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
        let request_id = execute(usecase, &ctx).await.unwrap().id;

        TestContext {
            ctx,
            caregiver,
            patient,
            request_id,
        }
    }

    #[actix_web::test]
    async fn accepting_creates_the_link_and_removes_the_request() {
        let TestContext {
            ctx,
            caregiver,
            patient,
            request_id,
        } = setup().await;

        let usecase = AcceptCareRequestUseCase {
            patient: patient.clone(),
            request_id: request_id.clone(),
        };
        let link = execute(usecase, &ctx).await.unwrap();

        assert_eq!(link.caregiver_id, caregiver.id);
        assert_eq!(link.patient_id, patient.id);

        // Visible from both directions
        assert!(ctx
            .repos
            .care_links
            .find(&caregiver.id, &patient.id)
            .await
            .is_some());
        assert_eq!(ctx.repos.care_links.find_by_patient(&patient.id).await.len(), 1);
        assert_eq!(
            ctx.repos
                .care_links
                .find_by_caregiver(&caregiver.id)
                .await
                .len(),
            1
        );

        // The request is gone
        assert!(ctx.repos.care_requests.find(&request_id).await.is_none());
    }

    #[actix_web::test]
    async fn only_the_targeted_patient_can_accept() {
        let TestContext {
            ctx, request_id, ..
        } = setup().await;

        let mut other = User::new("Paula", "paula@example.com");
        other.role = Some(Role::Patient);
        ctx.repos.users.insert(&other).await.unwrap();

        let mut usecase = AcceptCareRequestUseCase {
            patient: other,
            request_id,
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::RequestNotForUser
        );
    }
}
