use crate::dtos::HelpCheckinSettingDTO;
use carebridge_domain::{HelpCheckinSetting, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpCheckinSettingResponse {
    pub setting: HelpCheckinSettingDTO,
}

impl HelpCheckinSettingResponse {
    pub fn new(setting: HelpCheckinSetting) -> Self {
        Self {
            setting: HelpCheckinSettingDTO::new(setting),
        }
    }
}

pub mod set_help_checkin {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub patient_id: ID,
        pub is_active: bool,
        pub interval_minutes: i64,
    }

    pub type APIResponse = HelpCheckinSettingResponse;
}

pub mod get_help_checkin {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub patient_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub setting: Option<HelpCheckinSettingDTO>,
    }

    impl APIResponse {
        pub fn new(setting: Option<HelpCheckinSetting>) -> Self {
            Self {
                setting: setting.map(HelpCheckinSettingDTO::new),
            }
        }
    }
}
