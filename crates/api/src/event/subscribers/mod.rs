use super::create_event::CreateEventUseCase;
use crate::shared::usecase::Subscriber;
use carebridge_domain::{Event, ReminderJob};
use carebridge_infra::AppContext;
use tracing::error;

pub struct ScheduleReminderOnEventCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateEventUseCase> for ScheduleReminderOnEventCreated {
    async fn notify(&self, e: &Event, ctx: &AppContext) {
        // Only non-repeating events are armed at creation. A repeating
        // event's reminder chain continues from whatever job exists for
        // it; creation itself arms nothing.
        if e.is_repeating() {
            return;
        }

        let job = ReminderJob {
            id: Default::default(),
            event_id: e.id.clone(),
            user_id: e.user_id.clone(),
            title: "Event Reminder".into(),
            body: e.title.clone(),
            anchor_ts: e.date_time,
            remind_at: e.date_time,
        };

        // Sideeffect, ignore result
        if let Err(err) = ctx.repos.reminders.insert(&job).await {
            error!(
                "Unable to schedule reminder for event: {}. Err: {:?}",
                e.id, err
            );
        }
    }
}
