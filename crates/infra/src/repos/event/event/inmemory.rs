use super::IEventRepo;
use crate::repos::shared::inmemory_repo::*;
use carebridge_domain::{Event, ID};

pub struct InMemoryEventRepo {
    events: std::sync::Mutex<Vec<Event>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn insert(&self, event: &Event) -> anyhow::Result<()> {
        insert(event, &self.events);
        Ok(())
    }

    async fn save(&self, event: &Event) -> anyhow::Result<()> {
        save(event, &self.events);
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<Event> {
        find(event_id, &self.events)
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<Event> {
        find_by(&self.events, |e: &Event| e.user_id == *user_id)
    }

    async fn find_by_user_timespan(&self, user_id: &ID, start: i64, end: i64) -> Vec<Event> {
        find_by(&self.events, |e: &Event| {
            e.user_id == *user_id && e.date_time >= start && e.date_time < end
        })
    }

    async fn delete(&self, event_id: &ID) -> Option<Event> {
        delete(event_id, &self.events)
    }
}
