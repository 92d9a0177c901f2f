use crate::notification::send::send_push;
use crate::shared::usecase::UseCase;
use carebridge_domain::{PushPayload, ReminderJob};
use carebridge_infra::AppContext;
use tracing::{error, info};

/// Drains every reminder job due at `now`, delivers its notification and
/// re-arms repeating events for their next occurrence.
///
/// Delivery happens before the event is re-read: a reminder whose event
/// was deleted after scheduling still fires once, then stops. Re-arming
/// advances the job's anchor by one cadence unit; a chain whose next
/// occurrence is already in the past stops quietly.
#[derive(Debug)]
pub struct FireDueRemindersUseCase {
    pub now: i64,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for FireDueRemindersUseCase {
    type Response = Vec<ReminderJob>;

    type Error = UseCaseError;

    const NAME: &'static str = "FireDueReminders";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        let due = ctx.repos.reminders.delete_all_before(self.now).await;
        let mut fired = Vec::with_capacity(due.len());

        for job in due {
            let payload = PushPayload::Event {
                event_id: job.event_id.clone(),
            };
            if let Err(e) = send_push(&job.user_id, &job.title, &job.body, payload, ctx).await {
                error!(
                    "Unable to deliver reminder for event: {}. Err: {:?}",
                    job.event_id, e
                );
            }

            let event = match ctx.repos.events.find(&job.event_id).await {
                Some(event) => event,
                None => {
                    info!(
                        "Event: {} no longer exists, reminder chain stops",
                        job.event_id
                    );
                    fired.push(job);
                    continue;
                }
            };

            if let Some(cadence) = event.recurrence {
                if let Some(next) = cadence.next_occurrence(job.anchor_ts, self.now) {
                    let rearmed = job.rearmed(next);
                    if let Err(e) = ctx.repos.reminders.insert(&rearmed).await {
                        error!(
                            "Unable to re-arm reminder for event: {}. Err: {:?}",
                            event.id, e
                        );
                    }
                }
            }

            fired.push(job);
        }

        Ok(fired)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::create_event::CreateEventUseCase;
    use crate::shared::usecase::execute;
    use carebridge_domain::{Cadence, PushToken, User, ID};
    use carebridge_infra::{setup_context_inmemory, ISys, InMemoryPushGateway};
    use std::sync::Arc;

    struct StaticSys(i64);
    impl ISys for StaticSys {
        fn get_timestamp_millis(&self) -> i64 {
            self.0
        }
    }

    const T0: i64 = 1_700_000_000_000;
    const WEEK_MS: i64 = 7 * 24 * 60 * 60 * 1000;

    struct TestContext {
        ctx: AppContext,
        patient: User,
        gateway: Arc<InMemoryPushGateway>,
    }

    async fn setup(now: i64) -> TestContext {
        let gateway = Arc::new(InMemoryPushGateway::new());
        let mut ctx = setup_context_inmemory();
        ctx.services.push = gateway.clone();
        ctx.sys = Arc::new(StaticSys(now));

        let patient = User::new("Pat Patient", "pat@example.com");
        ctx.repos.users.insert(&patient).await.unwrap();
        ctx.repos
            .push_tokens
            .insert(&PushToken {
                id: Default::default(),
                user_id: patient.id.clone(),
                token: "pat-token".into(),
                device_id: "pat-phone".into(),
            })
            .await
            .unwrap();

        TestContext {
            ctx,
            patient,
            gateway,
        }
    }

    async fn create_event(ctx: &AppContext, patient: &User, repeat: Option<Cadence>) -> ID {
        let usecase = CreateEventUseCase {
            title: "Take medication".into(),
            description: "".into(),
            date_time: T0,
            patient_id: patient.id.clone(),
            repeat,
            acting_user: patient.clone(),
        };
        execute(usecase, ctx).await.unwrap().id
    }

    #[actix_web::test]
    async fn single_shot_reminder_fires_once_and_does_not_rearm() {
        let TestContext {
            ctx,
            patient,
            gateway,
        } = setup(T0 - 10 * 60 * 1000).await;
        let event_id = create_event(&ctx, &patient, None).await;

        // Not due yet
        let fired = execute(FireDueRemindersUseCase { now: T0 - 60_000 }, &ctx)
            .await
            .unwrap();
        assert!(fired.is_empty());

        // Due now: delivers exactly one notification
        let fired = execute(FireDueRemindersUseCase { now: T0 }, &ctx)
            .await
            .unwrap();
        assert_eq!(fired.len(), 1);
        assert_eq!(gateway.sent_messages().len(), 1);
        assert!(ctx.repos.reminders.find_by_event(&event_id).await.is_empty());

        // Next pass finds nothing
        let fired = execute(FireDueRemindersUseCase { now: T0 + 60_000 }, &ctx)
            .await
            .unwrap();
        assert!(fired.is_empty());
        assert_eq!(gateway.sent_messages().len(), 1);
    }

    #[actix_web::test]
    async fn repeating_chain_rearms_from_the_anchor_not_the_fire_time() {
        let TestContext { ctx, patient, .. } = setup(T0 - 10 * 60 * 1000).await;
        let event_id = create_event(&ctx, &patient, Some(Cadence::Weekly)).await;

        // Repeating events are not armed at creation; seed the chain
        // with the first occurrence.
        ctx.repos
            .reminders
            .insert(&ReminderJob {
                id: Default::default(),
                event_id: event_id.clone(),
                user_id: patient.id.clone(),
                title: "Event Reminder".into(),
                body: "Take medication".into(),
                anchor_ts: T0,
                remind_at: T0,
            })
            .await
            .unwrap();

        // First fire lands 90 seconds late
        execute(FireDueRemindersUseCase { now: T0 + 90_000 }, &ctx)
            .await
            .unwrap();
        let jobs = ctx.repos.reminders.find_by_event(&event_id).await;
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].remind_at, T0 + WEEK_MS);

        // Second fire lands 5 minutes late; still no drift
        execute(
            FireDueRemindersUseCase {
                now: T0 + WEEK_MS + 5 * 60_000,
            },
            &ctx,
        )
        .await
        .unwrap();
        let jobs = ctx.repos.reminders.find_by_event(&event_id).await;
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].remind_at, T0 + 2 * WEEK_MS);
        assert_eq!(jobs[0].anchor_ts, T0 + 2 * WEEK_MS);
    }

    #[actix_web::test]
    async fn deleted_event_still_fires_once_but_does_not_rearm() {
        let TestContext {
            ctx,
            patient,
            gateway,
        } = setup(T0 - 10 * 60 * 1000).await;
        let event_id = create_event(&ctx, &patient, Some(Cadence::Daily)).await;
        ctx.repos
            .reminders
            .insert(&ReminderJob {
                id: Default::default(),
                event_id: event_id.clone(),
                user_id: patient.id.clone(),
                title: "Event Reminder".into(),
                body: "Take medication".into(),
                anchor_ts: T0,
                remind_at: T0,
            })
            .await
            .unwrap();

        // The event goes away before the job fires; the job itself is
        // not retracted.
        ctx.repos.events.delete(&event_id).await.unwrap();

        execute(FireDueRemindersUseCase { now: T0 }, &ctx)
            .await
            .unwrap();

        // Delivered once, chain stopped
        assert_eq!(gateway.sent_messages().len(), 1);
        assert!(ctx.repos.reminders.find_by_event(&event_id).await.is_empty());
    }

    #[actix_web::test]
    async fn chain_stops_when_fired_past_the_next_occurrence() {
        let TestContext { ctx, patient, .. } = setup(T0).await;
        let event_id = create_event(&ctx, &patient, Some(Cadence::Daily)).await;
        ctx.repos
            .reminders
            .insert(&ReminderJob {
                id: Default::default(),
                event_id: event_id.clone(),
                user_id: patient.id.clone(),
                title: "Event Reminder".into(),
                body: "Take medication".into(),
                anchor_ts: T0,
                remind_at: T0,
            })
            .await
            .unwrap();

        // Fired two days late: the next daily occurrence is already in
        // the past, so nothing is re-armed.
        let late = T0 + 2 * 24 * 60 * 60 * 1000;
        execute(FireDueRemindersUseCase { now: late }, &ctx)
            .await
            .unwrap();
        assert!(ctx.repos.reminders.find_by_event(&event_id).await.is_empty());
    }
}
