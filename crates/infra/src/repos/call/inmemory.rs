use super::{IOngoingCallRepo, InsertCallError};
use crate::repos::shared::inmemory_repo::*;
use carebridge_domain::{OngoingCall, ID};

pub struct InMemoryCallRepo {
    calls: std::sync::Mutex<Vec<OngoingCall>>,
}

impl InMemoryCallRepo {
    pub fn new() -> Self {
        Self {
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IOngoingCallRepo for InMemoryCallRepo {
    async fn insert(&self, call: &OngoingCall) -> Result<(), InsertCallError> {
        // Same uniqueness rule as the partial unique index in postgres
        let mut calls = self.calls.lock().unwrap();
        if calls.iter().any(|c| c.receiver.id == call.receiver.id) {
            return Err(InsertCallError::ReceiverBusy);
        }
        calls.push(call.clone());
        Ok(())
    }

    async fn save(&self, call: &OngoingCall) -> anyhow::Result<()> {
        save(call, &self.calls);
        Ok(())
    }

    async fn find(&self, call_id: &ID) -> Option<OngoingCall> {
        find(call_id, &self.calls)
    }

    async fn find_by_receiver(&self, receiver_id: &ID) -> Option<OngoingCall> {
        find_one_by(&self.calls, |c: &OngoingCall| c.receiver.id == *receiver_id)
    }

    async fn find_by_caller(&self, caller_id: &ID) -> Option<OngoingCall> {
        find_one_by(&self.calls, |c: &OngoingCall| c.caller.id == *caller_id)
    }

    async fn delete(&self, call_id: &ID) -> Option<OngoingCall> {
        delete(call_id, &self.calls)
    }
}
