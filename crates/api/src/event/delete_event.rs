use crate::error::CarebridgeError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use carebridge_api_structs::delete_event::*;
use carebridge_domain::{Event, User, ID};
use carebridge_infra::AppContext;

pub async fn delete_event_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, CarebridgeError> {
    let acting_user = protect_route(&http_req, &ctx).await?;

    let usecase = DeleteEventUseCase {
        event_id: path_params.event_id.clone(),
        acting_user,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(CarebridgeError::from)
}

/// Deletes an event. Reminder jobs already queued for it are not
/// retracted; they detect the deletion at fire time and stop the chain
/// there.
#[derive(Debug)]
pub struct DeleteEventUseCase {
    pub event_id: ID,
    pub acting_user: User,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    NotLinked,
    StorageError,
}

impl From<UseCaseError> for CarebridgeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(event_id) => Self::NotFound(format!(
                "The event with id: {}, was not found.",
                event_id
            )),
            UseCaseError::NotLinked => {
                Self::Unauthorized("Only the patient or a linked caregiver can do that".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteEventUseCase {
    type Response = Event;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteEvent";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        let event = ctx
            .repos
            .events
            .find(&self.event_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.event_id.clone()))?;

        if self.acting_user.id != event.user_id {
            ctx.repos
                .care_links
                .find(&self.acting_user.id, &event.user_id)
                .await
                .ok_or(UseCaseError::NotLinked)?;
        }

        ctx.repos
            .events
            .delete(&self.event_id)
            .await
            .ok_or(UseCaseError::StorageError)?;

        Ok(event)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::create_event::CreateEventUseCase;
    use carebridge_domain::CareLink;
    use carebridge_infra::setup_context_inmemory;

    #[actix_web::test]
    async fn owner_deletes_event_but_queued_reminder_survives() {
        let ctx = setup_context_inmemory();
        let patient = User::new("Pat", "pat@example.com");
        ctx.repos.users.insert(&patient).await.unwrap();

        let usecase = CreateEventUseCase {
            title: "Take medication".into(),
            description: "".into(),
            date_time: ctx.sys.get_timestamp_millis() + 60_000,
            patient_id: patient.id.clone(),
            repeat: None,
            acting_user: patient.clone(),
        };
        let event = execute(usecase, &ctx).await.unwrap();
        assert_eq!(ctx.repos.reminders.find_by_event(&event.id).await.len(), 1);

        let usecase = DeleteEventUseCase {
            event_id: event.id.clone(),
            acting_user: patient,
        };
        execute(usecase, &ctx).await.unwrap();

        assert!(ctx.repos.events.find(&event.id).await.is_none());
        // Deletion does not retract the scheduled reminder
        assert_eq!(ctx.repos.reminders.find_by_event(&event.id).await.len(), 1);
    }

    #[actix_web::test]
    async fn only_owner_or_linked_caregiver_can_delete() {
        let ctx = setup_context_inmemory();
        let patient = User::new("Pat", "pat@example.com");
        ctx.repos.users.insert(&patient).await.unwrap();
        let caregiver = User::new("Carol", "carol@example.com");
        ctx.repos.users.insert(&caregiver).await.unwrap();

        let usecase = CreateEventUseCase {
            title: "Walk".into(),
            description: "".into(),
            date_time: 1_700_000_000_000,
            patient_id: patient.id.clone(),
            repeat: None,
            acting_user: patient.clone(),
        };
        let event = execute(usecase, &ctx).await.unwrap();

        let mut usecase = DeleteEventUseCase {
            event_id: event.id.clone(),
            acting_user: caregiver.clone(),
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::NotLinked
        );

        ctx.repos
            .care_links
            .insert(&CareLink {
                id: Default::default(),
                caregiver_id: caregiver.id.clone(),
                patient_id: patient.id.clone(),
                caregiver_name: caregiver.name.clone(),
                patient_name: patient.name.clone(),
            })
            .await
            .unwrap();

        let usecase = DeleteEventUseCase {
            event_id: event.id.clone(),
            acting_user: caregiver,
        };
        assert!(execute(usecase, &ctx).await.is_ok());
    }
}
