use super::IReminderJobRepo;
use crate::repos::shared::inmemory_repo::*;
use carebridge_domain::{ReminderJob, ID};

pub struct InMemoryReminderJobRepo {
    jobs: std::sync::Mutex<Vec<ReminderJob>>,
}

impl InMemoryReminderJobRepo {
    pub fn new() -> Self {
        Self {
            jobs: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReminderJobRepo for InMemoryReminderJobRepo {
    async fn insert(&self, job: &ReminderJob) -> anyhow::Result<()> {
        insert(job, &self.jobs);
        Ok(())
    }

    async fn delete_all_before(&self, before: i64) -> Vec<ReminderJob> {
        let mut due = find_and_delete_by(&self.jobs, |j: &ReminderJob| j.remind_at <= before);
        due.sort_by_key(|j| j.remind_at);
        due
    }

    async fn find_by_event(&self, event_id: &ID) -> Vec<ReminderJob> {
        find_by(&self.jobs, |j: &ReminderJob| j.event_id == *event_id)
    }
}
