use super::subscribers::ScheduleReminderOnEventCreated;
use crate::error::CarebridgeError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use carebridge_api_structs::create_event::*;
use carebridge_domain::{Cadence, Event, User, ID};
use carebridge_infra::AppContext;

pub async fn create_event_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, CarebridgeError> {
    let acting_user = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = CreateEventUseCase {
        title: body.title,
        description: body.description,
        date_time: body.date_time,
        patient_id: body.patient_id,
        repeat: body.repeat,
        acting_user,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Created().json(APIResponse::new(event)))
        .map_err(CarebridgeError::from)
}

/// Creates a calendar entry for a patient. A linked caregiver may create
/// on the patient's behalf; the event still belongs to the patient.
#[derive(Debug)]
pub struct CreateEventUseCase {
    pub title: String,
    pub description: String,
    pub date_time: i64,
    pub patient_id: ID,
    pub repeat: Option<Cadence>,
    pub acting_user: User,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    PatientNotFound(ID),
    NotLinked,
    StorageError,
}

impl From<UseCaseError> for CarebridgeError {
    fn from(e: UseCaseError) -> Self {
        match e {
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
impl UseCase for CreateEventUseCase {
    type Response = Event;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateEvent";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        let patient = ctx
            .repos
            .users
            .find(&self.patient_id)
            .await
            .ok_or_else(|| UseCaseError::PatientNotFound(self.patient_id.clone()))?;

        let caregiver = if self.acting_user.id == patient.id {
            None
        } else {
            ctx.repos
                .care_links
                .find(&self.acting_user.id, &patient.id)
                .await
                .ok_or(UseCaseError::NotLinked)?;
            Some(self.acting_user.as_caregiver_ref())
        };

        let e = Event {
            id: Default::default(),
            title: self.title.clone(),
            description: self.description.clone(),
            date_time: self.date_time,
            patient: patient.as_patient_ref(),
            caregiver,
            user_id: patient.id.clone(),
            recurrence: self.repeat,
            created: ctx.sys.get_timestamp_millis(),
            updated: ctx.sys.get_timestamp_millis(),
        };

        ctx.repos
            .events
            .insert(&e)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(e)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(ScheduleReminderOnEventCreated)]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use carebridge_domain::CareLink;
    use carebridge_infra::setup_context_inmemory;

    struct TestContext {
        ctx: AppContext,
        patient: User,
        caregiver: User,
    }

    async fn setup() -> TestContext {
        let ctx = setup_context_inmemory();
        let patient = User::new("Pat Patient", "pat@example.com");
        ctx.repos.users.insert(&patient).await.unwrap();
        let caregiver = User::new("Carol Caregiver", "carol@example.com");
        ctx.repos.users.insert(&caregiver).await.unwrap();

        TestContext {
            ctx,
            patient,
            caregiver,
        }
    }

    #[actix_web::test]
    async fn patient_creates_own_event_and_one_reminder_is_armed() {
        let TestContext { ctx, patient, .. } = setup().await;

        let usecase = CreateEventUseCase {
            title: "Take medication".into(),
            description: "Morning pills".into(),
            date_time: ctx.sys.get_timestamp_millis() + 10 * 60 * 1000,
            patient_id: patient.id.clone(),
            repeat: None,
            acting_user: patient.clone(),
        };
        let event = execute(usecase, &ctx).await.unwrap();

        assert_eq!(event.user_id, patient.id);
        assert!(event.caregiver.is_none());

        // Exactly one one-shot reminder at the event time
        let jobs = ctx.repos.reminders.find_by_event(&event.id).await;
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].remind_at, event.date_time);
        assert_eq!(jobs[0].anchor_ts, event.date_time);
    }

    #[actix_web::test]
    async fn repeating_event_gets_no_reminder_at_creation() {
        let TestContext { ctx, patient, .. } = setup().await;

        let usecase = CreateEventUseCase {
            title: "Weekly walk".into(),
            description: "Around the park".into(),
            date_time: ctx.sys.get_timestamp_millis() + 10 * 60 * 1000,
            patient_id: patient.id.clone(),
            repeat: Some(Cadence::Weekly),
            acting_user: patient,
        };
        let event = execute(usecase, &ctx).await.unwrap();

        let jobs = ctx.repos.reminders.find_by_event(&event.id).await;
        assert!(jobs.is_empty());
    }

    #[actix_web::test]
    async fn linked_caregiver_creates_on_behalf_of_patient() {
        let TestContext {
            ctx,
            patient,
            caregiver,
        } = setup().await;
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

        let usecase = CreateEventUseCase {
            title: "Doctor appointment".into(),
            description: "".into(),
            date_time: 1_700_000_000_000,
            patient_id: patient.id.clone(),
            repeat: None,
            acting_user: caregiver.clone(),
        };
        let event = execute(usecase, &ctx).await.unwrap();

        // Owned by the patient even though the caregiver created it
        assert_eq!(event.user_id, patient.id);
        assert_eq!(
            event.caregiver.as_ref().map(|c| c.id.clone()),
            Some(caregiver.id)
        );
    }

    #[actix_web::test]
    async fn unlinked_caregiver_is_rejected() {
        let TestContext {
            ctx,
            patient,
            caregiver,
        } = setup().await;

        let mut usecase = CreateEventUseCase {
            title: "Doctor appointment".into(),
            description: "".into(),
            date_time: 1_700_000_000_000,
            patient_id: patient.id.clone(),
            repeat: None,
            acting_user: caregiver,
        };
        let res = usecase.execute(&ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::NotLinked);
    }
}
