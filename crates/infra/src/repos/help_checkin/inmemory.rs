use super::IHelpCheckinRepo;
use crate::repos::shared::inmemory_repo::*;
use carebridge_domain::{HelpCheckinSetting, ID};

pub struct InMemoryHelpCheckinRepo {
    settings: std::sync::Mutex<Vec<HelpCheckinSetting>>,
}

impl InMemoryHelpCheckinRepo {
    pub fn new() -> Self {
        Self {
            settings: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IHelpCheckinRepo for InMemoryHelpCheckinRepo {
    async fn insert(&self, setting: &HelpCheckinSetting) -> anyhow::Result<()> {
        insert(setting, &self.settings);
        Ok(())
    }

    async fn save(&self, setting: &HelpCheckinSetting) -> anyhow::Result<()> {
        save(setting, &self.settings);
        Ok(())
    }

    async fn find_by_patient(&self, patient_id: &ID) -> Option<HelpCheckinSetting> {
        find_one_by(&self.settings, |s: &HelpCheckinSetting| {
            s.patient_id == *patient_id
        })
    }

    async fn find_all_active(&self) -> Vec<HelpCheckinSetting> {
        find_by(&self.settings, |s: &HelpCheckinSetting| s.is_active)
    }
}
