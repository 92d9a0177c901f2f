use carebridge_domain::{Cadence, CaregiverRef, Event, PatientRef, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDTO {
    pub id: ID,
    pub title: String,
    pub description: String,
    pub date_time: i64,
    pub patient: PatientRef,
    pub caregiver: Option<CaregiverRef>,
    pub user_id: ID,
    pub is_repeat: bool,
    pub repeat: Option<Cadence>,
}

impl EventDTO {
    pub fn new(event: Event) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            date_time: event.date_time,
            patient: event.patient,
            caregiver: event.caregiver,
            user_id: event.user_id,
            is_repeat: event.recurrence.is_some(),
            repeat: event.recurrence,
        }
    }
}
