use crate::error::CarebridgeError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use carebridge_api_structs::send_care_request::*;
use carebridge_domain::{CareRequest, User};
use carebridge_infra::AppContext;

pub async fn send_care_request_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, CarebridgeError> {
    let caregiver = protect_route(&http_req, &ctx).await?;

    let usecase = SendCareRequestUseCase {
        caregiver,
        patient_email: body.0.patient_email,
    };

    execute(usecase, &ctx)
        .await
        .map(|request| HttpResponse::Created().json(APIResponse::new(request)))
        .map_err(CarebridgeError::from)
}

/// A caregiver asks to take a patient (looked up by email) under care.
/// The patient confirms or rejects the request on their side.
#[derive(Debug)]
pub struct SendCareRequestUseCase {
    pub caregiver: User,
    pub patient_email: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotACaregiver,
    PatientNotFound(String),
    DuplicateRequest,
    AlreadyLinked,
    StorageError,
}

impl From<UseCaseError> for CarebridgeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotACaregiver => {
                Self::Unauthorized("User is not a caregiver".into())
            }
            UseCaseError::PatientNotFound(email) => {
                Self::NotFound(format!("No patient found with email: {}", email))
            }
            UseCaseError::DuplicateRequest => {
                Self::Conflict("You already have a pending request for this patient".into())
            }
            UseCaseError::AlreadyLinked => {
                Self::Conflict("Patient is already under your care".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendCareRequestUseCase {
    type Response = CareRequest;

    type Error = UseCaseError;

    const NAME: &'static str = "SendCareRequest";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        if !self.caregiver.is_caregiver() {
            return Err(UseCaseError::NotACaregiver);
        }

        let patient = match ctx.repos.users.find_by_email(&self.patient_email).await {
            Some(user) if user.is_patient() => user,
            _ => return Err(UseCaseError::PatientNotFound(self.patient_email.clone())),
        };

        if ctx
            .repos
            .care_requests
            .find_pending(&self.caregiver.id, &patient.id)
            .await
            .is_some()
        {
            return Err(UseCaseError::DuplicateRequest);
        }

        if ctx
            .repos
            .care_links
            .find(&self.caregiver.id, &patient.id)
            .await
            .is_some()
        {
            return Err(UseCaseError::AlreadyLinked);
        }

        let request = CareRequest {
            id: Default::default(),
            caregiver_id: self.caregiver.id.clone(),
            patient_id: patient.id.clone(),
            caregiver_name: self.caregiver.name.clone(),
            patient_name: patient.name.clone(),
        };
        ctx.repos
            .care_requests
            .insert(&request)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(request)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use carebridge_domain::Role;
    use carebridge_infra::setup_context_inmemory;

    async fn setup() -> (AppContext, User, User) {
        let ctx = setup_context_inmemory();
        let mut caregiver = User::new("Carol", "carol@example.com");
        caregiver.role = Some(Role::Caregiver);
        ctx.repos.users.insert(&caregiver).await.unwrap();
        let mut patient = User::new("Pat", "pat@example.com");
        patient.role = Some(Role::Patient);
        ctx.repos.users.insert(&patient).await.unwrap();
        (ctx, caregiver, patient)
    }

    #[actix_web::test]
    async fn sends_request_once_and_rejects_duplicates() {
        let (ctx, caregiver, patient) = setup().await;

        let usecase = SendCareRequestUseCase {
            caregiver: caregiver.clone(),
            patient_email: patient.email.clone(),
        };
        let request = execute(usecase, &ctx).await.unwrap();
        assert_eq!(request.patient_id, patient.id);

        let mut usecase = SendCareRequestUseCase {
            caregiver,
            patient_email: patient.email,
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::DuplicateRequest
        );
    }

    #[actix_web::test]
    async fn patients_cannot_send_requests() {
        let (ctx, _caregiver, patient) = setup().await;

        let mut usecase = SendCareRequestUseCase {
            caregiver: patient.clone(),
            patient_email: patient.email,
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::NotACaregiver
        );
    }

    #[actix_web::test]
    async fn unknown_email_is_rejected() {
        let (ctx, caregiver, _patient) = setup().await;

        let mut usecase = SendCareRequestUseCase {
            caregiver,
            patient_email: "nobody@example.com".into(),
        };
        assert!(matches!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::PatientNotFound(_)
        ));
    }
}
