use crate::error::CarebridgeError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use carebridge_api_structs::get_events_by_timespan::*;
use carebridge_domain::{Event, ID};
use carebridge_infra::AppContext;

pub async fn get_events_by_timespan_controller(
    http_req: HttpRequest,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, CarebridgeError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetEventsByTimespanUseCase {
        user_id: user.id,
        start_ts: query_params.start_ts,
        end_ts: query_params.end_ts,
    };

    execute(usecase, &ctx)
        .await
        .map(|events| HttpResponse::Ok().json(APIResponse::new(events)))
        .map_err(CarebridgeError::from)
}

/// Events in `[start_ts, end_ts)`, typically one day for the calendar
/// screen.
#[derive(Debug)]
pub struct GetEventsByTimespanUseCase {
    pub user_id: ID,
    pub start_ts: i64,
    pub end_ts: i64,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidTimespan,
}

impl From<UseCaseError> for CarebridgeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidTimespan => {
                Self::BadClientData("The provided start is after the provided end".into())
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventsByTimespanUseCase {
    type Response = Vec<Event>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetEventsByTimespan";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        if self.start_ts > self.end_ts {
            return Err(UseCaseError::InvalidTimespan);
        }
        let mut events = ctx
            .repos
            .events
            .find_by_user_timespan(&self.user_id, self.start_ts, self.end_ts)
            .await;
        events.sort_by_key(|e| e.date_time);
        Ok(events)
    }
}
