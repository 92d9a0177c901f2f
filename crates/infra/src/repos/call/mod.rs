mod inmemory;
mod postgres;

use carebridge_domain::{OngoingCall, ID};
pub use inmemory::InMemoryCallRepo;
pub use postgres::PostgresCallRepo;

/// Insert failure modes for `IOngoingCallRepo::insert`. The store
/// enforces the at-most-one-call-per-receiver invariant, so a second
/// insert racing past the caller's lookup still cannot create a
/// duplicate call.
#[derive(Debug, thiserror::Error)]
pub enum InsertCallError {
    #[error("Receiver already has an ongoing call")]
    ReceiverBusy,
    #[error("Storage error: {0}")]
    Other(#[from] anyhow::Error),
}

#[async_trait::async_trait]
pub trait IOngoingCallRepo: Send + Sync {
    async fn insert(&self, call: &OngoingCall) -> Result<(), InsertCallError>;
    async fn save(&self, call: &OngoingCall) -> anyhow::Result<()>;
    async fn find(&self, call_id: &ID) -> Option<OngoingCall>;
    async fn find_by_receiver(&self, receiver_id: &ID) -> Option<OngoingCall>;
    async fn find_by_caller(&self, caller_id: &ID) -> Option<OngoingCall>;
    async fn delete(&self, call_id: &ID) -> Option<OngoingCall>;
}
