use crate::shared::entity::{Entity, ID};

/// A queued one-shot reminder delivery for an `Event`.
///
/// The job carries its own `anchor_ts`: the occurrence this firing
/// corresponds to, always a pure cadence-advancement of the event's
/// original timestamp. Re-arming advances the anchor, never the actual
/// fire time, so scheduler latency does not accumulate into drift.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderJob {
    pub id: ID,
    pub event_id: ID,
    pub user_id: ID,
    pub title: String,
    pub body: String,
    pub anchor_ts: i64,
    /// When to fire. Equal to `anchor_ts` for event reminders.
    pub remind_at: i64,
}

impl ReminderJob {
    /// The follow-up job armed after this one fired, for the given next
    /// occurrence.
    pub fn rearmed(&self, next_ts: i64) -> Self {
        Self {
            id: Default::default(),
            event_id: self.event_id.clone(),
            user_id: self.user_id.clone(),
            title: self.title.clone(),
            body: self.body.clone(),
            anchor_ts: next_ts,
            remind_at: next_ts,
        }
    }
}

impl Entity<ID> for ReminderJob {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
