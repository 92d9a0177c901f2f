use crate::shared::entity::{Entity, ID};
use crate::user::{CaregiverRef, PatientRef};
use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Repeat unit of a recurring `Event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Daily,
    Weekly,
    Monthly,
}

impl Cadence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Advances `anchor_ms` by exactly one cadence unit.
    ///
    /// Monthly advancement preserves the day-of-month and clamps to the
    /// last day of the target month when the day does not exist there
    /// (Jan 31 -> Feb 28/29). Out-of-range timestamps return the anchor
    /// unchanged, which stops a recurrence chain at the
    /// `next_occurrence` guard below.
    pub fn advance(&self, anchor_ms: i64) -> i64 {
        let anchor = match DateTime::<Utc>::from_timestamp_millis(anchor_ms) {
            Some(dt) => dt,
            None => return anchor_ms,
        };
        let next = match self {
            Self::Daily => anchor.checked_add_signed(Duration::days(1)),
            Self::Weekly => anchor.checked_add_signed(Duration::days(7)),
            Self::Monthly => anchor.checked_add_months(Months::new(1)),
        };
        next.map(|dt| dt.timestamp_millis()).unwrap_or(anchor_ms)
    }

    /// The fire-and-decide-to-rearm rule: given the occurrence that just
    /// fired (`anchor_ms`, always the originally scheduled timestamp and
    /// never the actual fire time, so scheduler latency cannot
    /// accumulate into drift) and the current time, returns the next
    /// occurrence to arm, or `None` when the chain should stop.
    pub fn next_occurrence(&self, anchor_ms: i64, now: i64) -> Option<i64> {
        let next = self.advance(anchor_ms);
        if next > now && next > anchor_ms {
            Some(next)
        } else {
            None
        }
    }
}

impl FromStr for Cadence {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(anyhow::anyhow!("Invalid cadence: {}", s)),
        }
    }
}

/// A calendar entry belonging to a patient. A caregiver may create it on
/// the patient's behalf, but `user_id` is always the patient id.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: ID,
    pub title: String,
    pub description: String,
    /// Scheduled occurrence in millis since epoch. For recurring events
    /// this stays the original first occurrence; recurrence advancement
    /// happens on the reminder job, not on this row.
    pub date_time: i64,
    pub patient: PatientRef,
    pub caregiver: Option<CaregiverRef>,
    pub user_id: ID,
    pub recurrence: Option<Cadence>,
    pub created: i64,
    pub updated: i64,
}

impl Event {
    pub fn is_repeating(&self) -> bool {
        self.recurrence.is_some()
    }
}

impl Entity<ID> for Event {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    fn ms(y: i32, m: u32, d: u32, h: u32) -> i64 {
        Utc.with_ymd_and_hms(y, m, d, h, 30, 0)
            .unwrap()
            .timestamp_millis()
    }

    #[test]
    fn daily_advance_adds_one_day() {
        assert_eq!(Cadence::Daily.advance(ms(2024, 3, 10, 9)), ms(2024, 3, 11, 9));
    }

    #[test]
    fn weekly_advance_adds_seven_days() {
        assert_eq!(
            Cadence::Weekly.advance(ms(2024, 2, 26, 18)),
            ms(2024, 3, 4, 18)
        );
    }

    #[test]
    fn monthly_advance_preserves_day_of_month() {
        assert_eq!(
            Cadence::Monthly.advance(ms(2024, 3, 15, 8)),
            ms(2024, 4, 15, 8)
        );
    }

    #[test]
    fn monthly_advance_clamps_to_month_end() {
        // Leap year: Jan 31 -> Feb 29
        assert_eq!(
            Cadence::Monthly.advance(ms(2024, 1, 31, 10)),
            ms(2024, 2, 29, 10)
        );
        // Non leap year: Jan 31 -> Feb 28
        assert_eq!(
            Cadence::Monthly.advance(ms(2023, 1, 31, 10)),
            ms(2023, 2, 28, 10)
        );
        // Clamped anchors keep their (clamped) day afterwards
        assert_eq!(
            Cadence::Monthly.advance(ms(2023, 2, 28, 10)),
            ms(2023, 3, 28, 10)
        );
    }

    #[test]
    fn rearm_chain_is_anchored_not_drifting() {
        // Fire each weekly occurrence 90 seconds late and check that the
        // chain still lands on exact 7 day multiples of the original
        // timestamp.
        let t0 = ms(2024, 1, 1, 12);
        let mut anchor = t0;
        for n in 1..=4 {
            let fire_time = anchor + 90 * 1000;
            let next = Cadence::Weekly
                .next_occurrence(anchor, fire_time)
                .expect("chain should keep re-arming");
            assert_eq!(next, t0 + n * 7 * 24 * 60 * 60 * 1000);
            anchor = next;
        }
    }

    #[test]
    fn rearm_stops_when_next_is_not_in_the_future() {
        let anchor = ms(2024, 1, 1, 12);
        // Fired more than a day late: the next daily occurrence is
        // already in the past and the chain stops.
        let late = anchor + 2 * 24 * 60 * 60 * 1000;
        assert_eq!(Cadence::Daily.next_occurrence(anchor, late), None);
    }

    #[test]
    fn out_of_range_anchor_stops_the_chain() {
        assert_eq!(Cadence::Monthly.next_occurrence(i64::MAX, 0), None);
    }
}
