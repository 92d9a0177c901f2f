use carebridge_domain::{CaregiverRef, HelpCheckinSetting, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpCheckinSettingDTO {
    pub id: ID,
    pub patient_id: ID,
    pub patient_name: String,
    pub set_by_caregiver: Option<CaregiverRef>,
    pub is_active: bool,
    pub interval_minutes: i64,
    pub last_notification_time: i64,
}

impl HelpCheckinSettingDTO {
    pub fn new(setting: HelpCheckinSetting) -> Self {
        Self {
            id: setting.id,
            patient_id: setting.patient_id,
            patient_name: setting.patient_name,
            set_by_caregiver: setting.set_by_caregiver,
            is_active: setting.is_active,
            interval_minutes: setting.interval_minutes,
            last_notification_time: setting.last_notification_time,
        }
    }
}
