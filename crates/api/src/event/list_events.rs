use crate::error::CarebridgeError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use carebridge_api_structs::list_events::*;
use carebridge_domain::{Event, ID};
use carebridge_infra::AppContext;

pub async fn list_events_controller(
    http_req: HttpRequest,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, CarebridgeError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = ListEventsUseCase { user_id: user.id };

    execute(usecase, &ctx)
        .await
        .map(|events| HttpResponse::Ok().json(APIResponse::new(events)))
        .map_err(|_| CarebridgeError::InternalError)
}

#[derive(Debug)]
pub struct ListEventsUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for ListEventsUseCase {
    type Response = Vec<Event>;

    type Error = UseCaseError;

    const NAME: &'static str = "ListEvents";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        let mut events = ctx.repos.events.find_by_user(&self.user_id).await;
        // Most recent first
        events.sort_by(|a, b| b.date_time.cmp(&a.date_time));
        Ok(events)
    }
}
