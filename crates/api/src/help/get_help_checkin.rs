use crate::error::CarebridgeError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use carebridge_api_structs::get_help_checkin::*;
use carebridge_domain::{HelpCheckinSetting, User, ID};
use carebridge_infra::AppContext;

pub async fn get_help_checkin_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, CarebridgeError> {
    let acting_user = protect_route(&http_req, &ctx).await?;

    let usecase = GetHelpCheckinUseCase {
        patient_id: path_params.patient_id.clone(),
        acting_user,
    };

    execute(usecase, &ctx)
        .await
        .map(|setting| HttpResponse::Ok().json(APIResponse::new(setting)))
        .map_err(CarebridgeError::from)
}

#[derive(Debug)]
pub struct GetHelpCheckinUseCase {
    pub patient_id: ID,
    pub acting_user: User,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotLinked,
}

impl From<UseCaseError> for CarebridgeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotLinked => {
                Self::Unauthorized("Only the patient or a linked caregiver can do that".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetHelpCheckinUseCase {
    type Response = Option<HelpCheckinSetting>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetHelpCheckin";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        if self.acting_user.id != self.patient_id {
            ctx.repos
                .care_links
                .find(&self.acting_user.id, &self.patient_id)
                .await
                .ok_or(UseCaseError::NotLinked)?;
        }
        Ok(ctx.repos.help_checkins.find_by_patient(&self.patient_id).await)
    }
}
