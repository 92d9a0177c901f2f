use crate::notification::send::send_push;
use crate::shared::usecase::UseCase;
use carebridge_domain::{PushPayload, ID};
use carebridge_infra::AppContext;
use tracing::warn;

/// One pass of the periodic "do you need help?" poll, invoked minutely
/// by the job scheduler.
///
/// For every active setting whose interval has elapsed (within the
/// grace window) a check-in is delivered and the setting's
/// `last_notification_time` is advanced to `now`. The two steps are
/// deliberate in that order: a failed delivery leaves the timestamp
/// alone so the next pass retries, and a crash in between duplicates at
/// most one notification (at-least-once).
#[derive(Debug)]
pub struct RunCheckinPassUseCase {
    pub now: i64,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for RunCheckinPassUseCase {
    type Response = Vec<ID>;

    type Error = UseCaseError;

    const NAME: &'static str = "RunCheckinPass";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        let settings = ctx.repos.help_checkins.find_all_active().await;
        let mut notified = Vec::new();

        for mut setting in settings {
            if !setting.is_due(self.now) {
                continue;
            }

            match send_push(
                &setting.patient_id,
                "Checking In",
                "Do you need help?",
                PushPayload::Help,
                ctx,
            )
            .await
            {
                Ok(()) => {
                    setting.last_notification_time = self.now;
                    if let Err(e) = ctx.repos.help_checkins.save(&setting).await {
                        warn!(
                            "Unable to update last notification time for patient: {}. Err: {:?}",
                            setting.patient_id, e
                        );
                    }
                    notified.push(setting.patient_id.clone());
                }
                Err(e) => {
                    // Timestamp untouched, the next pass retries
                    warn!(
                        "Check-in delivery for patient: {} failed, will retry. Err: {:?}",
                        setting.patient_id, e
                    );
                }
            }
        }

        Ok(notified)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::usecase::execute;
    use carebridge_domain::{HelpCheckinSetting, PushToken, CHECKIN_GRACE_MS};
    use carebridge_infra::{setup_context_inmemory, InMemoryPushGateway};
    use std::sync::Arc;

    const NOW: i64 = 1_700_000_000_000;
    const HOUR_MS: i64 = 60 * 60 * 1000;

    async fn seed_setting(ctx: &AppContext, last: i64, active: bool) -> ID {
        let patient_id = ID::new();
        ctx.repos
            .push_tokens
            .insert(&PushToken {
                id: Default::default(),
                user_id: patient_id.clone(),
                token: format!("tok-{}", patient_id),
                device_id: format!("dev-{}", patient_id),
            })
            .await
            .unwrap();
        ctx.repos
            .help_checkins
            .insert(&HelpCheckinSetting {
                id: Default::default(),
                patient_id: patient_id.clone(),
                patient_name: "Pat".into(),
                set_by_caregiver: None,
                is_active: active,
                interval_minutes: 60,
                last_notification_time: last,
            })
            .await
            .unwrap();
        patient_id
    }

    fn test_context() -> (AppContext, Arc<InMemoryPushGateway>) {
        let gateway = Arc::new(InMemoryPushGateway::new());
        let mut ctx = setup_context_inmemory();
        ctx.services.push = gateway.clone();
        (ctx, gateway)
    }

    #[actix_web::test]
    async fn fires_when_due_and_advances_the_timestamp() {
        let (ctx, gateway) = test_context();
        let patient_id = seed_setting(&ctx, NOW - HOUR_MS, true).await;

        let notified = execute(RunCheckinPassUseCase { now: NOW }, &ctx)
            .await
            .unwrap();
        assert_eq!(notified, vec![patient_id.clone()]);
        assert_eq!(gateway.sent_messages().len(), 1);

        let setting = ctx
            .repos
            .help_checkins
            .find_by_patient(&patient_id)
            .await
            .unwrap();
        assert_eq!(setting.last_notification_time, NOW);

        // The next pass one minute later stays quiet
        let notified = execute(RunCheckinPassUseCase { now: NOW + 60_000 }, &ctx)
            .await
            .unwrap();
        assert!(notified.is_empty());
        assert_eq!(gateway.sent_messages().len(), 1);
    }

    #[actix_web::test]
    async fn grace_window_boundaries() {
        let (ctx, _gateway) = test_context();
        // 59min 59.5s elapsed: inside the grace window, fires
        let just_short = seed_setting(&ctx, NOW - (HOUR_MS - CHECKIN_GRACE_MS / 2), true).await;
        // 58min elapsed: does not fire
        let too_early = seed_setting(&ctx, NOW - 58 * 60 * 1000, true).await;

        let notified = execute(RunCheckinPassUseCase { now: NOW }, &ctx)
            .await
            .unwrap();
        assert!(notified.contains(&just_short));
        assert!(!notified.contains(&too_early));
    }

    #[actix_web::test]
    async fn inactive_settings_are_skipped() {
        let (ctx, gateway) = test_context();
        seed_setting(&ctx, NOW - 2 * HOUR_MS, false).await;

        let notified = execute(RunCheckinPassUseCase { now: NOW }, &ctx)
            .await
            .unwrap();
        assert!(notified.is_empty());
        assert!(gateway.sent_messages().is_empty());
    }

    #[actix_web::test]
    async fn failed_delivery_withholds_the_timestamp_and_retries() {
        let (ctx, gateway) = test_context();
        let patient_id = seed_setting(&ctx, NOW - HOUR_MS, true).await;
        gateway.fail_token(&format!("tok-{}", patient_id));

        let notified = execute(RunCheckinPassUseCase { now: NOW }, &ctx)
            .await
            .unwrap();
        assert!(notified.is_empty());

        let setting = ctx
            .repos
            .help_checkins
            .find_by_patient(&patient_id)
            .await
            .unwrap();
        assert_eq!(setting.last_notification_time, NOW - HOUR_MS);

        // Delivery comes back, the next pass catches up
        gateway.failing_tokens.lock().unwrap().clear();
        let notified = execute(RunCheckinPassUseCase { now: NOW + 60_000 }, &ctx)
            .await
            .unwrap();
        assert_eq!(notified, vec![patient_id]);
    }
}
