use crate::error::CarebridgeError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use carebridge_api_structs::set_help_checkin::*;
use carebridge_domain::{HelpCheckinSetting, User, ID};
use carebridge_infra::AppContext;

pub async fn set_help_checkin_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, CarebridgeError> {
    let acting_user = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = SetHelpCheckinUseCase {
        patient_id: body.patient_id,
        is_active: body.is_active,
        interval_minutes: body.interval_minutes,
        acting_user,
    };

    execute(usecase, &ctx)
        .await
        .map(|setting| HttpResponse::Ok().json(APIResponse::new(setting)))
        .map_err(CarebridgeError::from)
}

/// Upserts the per-patient check-in configuration. A fresh row seeds
/// `last_notification_time` to now so activation does not fire on the
/// very next pass; updates leave the timestamp untouched.
#[derive(Debug)]
pub struct SetHelpCheckinUseCase {
    pub patient_id: ID,
    pub is_active: bool,
    pub interval_minutes: i64,
    pub acting_user: User,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidInterval,
    PatientNotFound(ID),
    NotLinked,
    StorageError,
}

impl From<UseCaseError> for CarebridgeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidInterval => {
                Self::BadClientData("The interval must be a positive number of minutes".into())
            }
            UseCaseError::PatientNotFound(patient_id) => Self::NotFound(format!(
                "The patient with id: {}, was not found.",
                patient_id
            )),
            UseCaseError::NotLinked => {
                Self::Unauthorized("Only the patient or a linked caregiver can do that".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetHelpCheckinUseCase {
    type Response = HelpCheckinSetting;

    type Error = UseCaseError;

    const NAME: &'static str = "SetHelpCheckin";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        if self.interval_minutes <= 0 {
            return Err(UseCaseError::InvalidInterval);
        }

        let patient = ctx
            .repos
            .users
            .find(&self.patient_id)
            .await
            .ok_or_else(|| UseCaseError::PatientNotFound(self.patient_id.clone()))?;

        let set_by_caregiver = if self.acting_user.id == patient.id {
            None
        } else {
            ctx.repos
                .care_links
                .find(&self.acting_user.id, &patient.id)
                .await
                .ok_or(UseCaseError::NotLinked)?;
            Some(self.acting_user.as_caregiver_ref())
        };

        match ctx.repos.help_checkins.find_by_patient(&patient.id).await {
            Some(mut setting) => {
                setting.is_active = self.is_active;
                setting.interval_minutes = self.interval_minutes;
                setting.set_by_caregiver = set_by_caregiver;
                ctx.repos
                    .help_checkins
                    .save(&setting)
                    .await
                    .map_err(|_| UseCaseError::StorageError)?;
                Ok(setting)
            }
            None => {
                let setting = HelpCheckinSetting {
                    id: Default::default(),
                    patient_id: patient.id.clone(),
                    patient_name: patient.name.clone(),
                    set_by_caregiver,
                    is_active: self.is_active,
                    interval_minutes: self.interval_minutes,
                    last_notification_time: ctx.sys.get_timestamp_millis(),
                };
                ctx.repos
                    .help_checkins
                    .insert(&setting)
                    .await
                    .map_err(|_| UseCaseError::StorageError)?;
                Ok(setting)
            }
        }
    }
}
