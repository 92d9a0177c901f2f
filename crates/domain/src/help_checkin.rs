use crate::shared::entity::{Entity, ID};
use crate::user::CaregiverRef;

/// Tolerance subtracted from the required interval so a check that lands
/// just short of a minutely poll tick still fires on that tick instead of
/// slipping a whole interval.
pub const CHECKIN_GRACE_MS: i64 = 1000;

/// Per-patient configuration for the periodic "do you need help?"
/// prompts. At most one row exists per patient.
#[derive(Debug, Clone, PartialEq)]
pub struct HelpCheckinSetting {
    pub id: ID,
    pub patient_id: ID,
    pub patient_name: String,
    /// Present when a caregiver manages the setting on the patient's
    /// behalf.
    pub set_by_caregiver: Option<CaregiverRef>,
    pub is_active: bool,
    pub interval_minutes: i64,
    /// Timestamp of the last delivered check-in. Seeded to "now" on
    /// creation so activating the setting does not fire immediately.
    pub last_notification_time: i64,
}

impl HelpCheckinSetting {
    pub fn interval_millis(&self) -> i64 {
        self.interval_minutes * 60 * 1000
    }

    /// Whether enough time has elapsed since the last notification for
    /// another check-in, within the grace window.
    pub fn is_due(&self, now: i64) -> bool {
        let elapsed = now - self.last_notification_time;
        elapsed >= self.interval_millis() - CHECKIN_GRACE_MS
    }
}

impl Entity<ID> for HelpCheckinSetting {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn setting(interval_minutes: i64, last: i64) -> HelpCheckinSetting {
        HelpCheckinSetting {
            id: Default::default(),
            patient_id: Default::default(),
            patient_name: "Edna".into(),
            set_by_caregiver: None,
            is_active: true,
            interval_minutes,
            last_notification_time: last,
        }
    }

    #[test]
    fn fires_when_interval_elapsed() {
        let now = 10_000_000;
        let s = setting(60, now - 60 * 60 * 1000);
        assert!(s.is_due(now));
    }

    #[test]
    fn fires_within_grace_window() {
        // 59min 59.5s elapsed of a 60min interval: inside the 1000ms
        // grace, so it fires.
        let now = 10_000_000_000;
        let s = setting(60, now - (60 * 60 * 1000 - 500));
        assert!(s.is_due(now));
    }

    #[test]
    fn does_not_fire_before_grace_window() {
        let now = 10_000_000_000;
        let s = setting(60, now - 58 * 60 * 1000);
        assert!(!s.is_due(now));
    }

    #[test]
    fn grace_boundary_is_inclusive() {
        let now = 10_000_000_000;
        let s = setting(60, now - (60 * 60 * 1000 - CHECKIN_GRACE_MS));
        assert!(s.is_due(now));

        let s = setting(60, now - (60 * 60 * 1000 - CHECKIN_GRACE_MS - 1));
        assert!(!s.is_due(now));
    }
}
