use crate::shared::entity::{Entity, ID};
use crate::user::User;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display snapshot of a call participant, denormalized at call creation
/// time so the in-call UI never needs a second profile lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallParticipant {
    pub id: ID,
    pub name: String,
    pub image: String,
}

impl From<&User> for CallParticipant {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            image: user.image.clone(),
        }
    }
}

/// Which side of the call a user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallSide {
    Caller,
    Receiver,
}

/// Observable state of an `OngoingCall`. Deletion of the record is the
/// only terminal state, so there is no `Ended` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallState {
    /// Record exists but both parties have not joined the channel yet.
    Ringing,
    /// Both parties joined the audio channel.
    Active,
}

/// The single active call a receiver can be part of. At most one
/// `OngoingCall` may exist per receiver id at any time.
#[derive(Debug, Clone, PartialEq)]
pub struct OngoingCall {
    pub id: ID,
    pub caller: CallParticipant,
    pub receiver: CallParticipant,
    /// Opaque name of the real-time audio channel, fresh per call.
    pub channel_name: String,
    pub is_caller_joined: bool,
    pub is_receiver_joined: bool,
}

impl OngoingCall {
    /// The caller is presumed to begin joining the channel immediately,
    /// so the record starts with `is_caller_joined` already set.
    pub fn new(caller: CallParticipant, receiver: CallParticipant) -> Self {
        Self {
            id: Default::default(),
            caller,
            receiver,
            channel_name: Uuid::new_v4().to_string(),
            is_caller_joined: true,
            is_receiver_joined: false,
        }
    }

    pub fn state(&self) -> CallState {
        if self.is_caller_joined && self.is_receiver_joined {
            CallState::Active
        } else {
            CallState::Ringing
        }
    }

    pub fn side_of(&self, user_id: &ID) -> Option<CallSide> {
        if *user_id == self.caller.id {
            Some(CallSide::Caller)
        } else if *user_id == self.receiver.id {
            Some(CallSide::Receiver)
        } else {
            None
        }
    }

    pub fn is_participant(&self, user_id: &ID) -> bool {
        self.side_of(user_id).is_some()
    }

    /// Idempotent: joining an already joined side changes nothing.
    pub fn mark_joined(&mut self, side: CallSide) {
        match side {
            CallSide::Caller => self.is_caller_joined = true,
            CallSide::Receiver => self.is_receiver_joined = true,
        }
    }
}

impl Entity<ID> for OngoingCall {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn participant(name: &str) -> CallParticipant {
        CallParticipant {
            id: Default::default(),
            name: name.into(),
            image: String::new(),
        }
    }

    #[test]
    fn new_call_is_ringing_with_caller_joined() {
        let call = OngoingCall::new(participant("alice"), participant("bob"));
        assert!(call.is_caller_joined);
        assert!(!call.is_receiver_joined);
        assert_eq!(call.state(), CallState::Ringing);
        assert!(!call.channel_name.is_empty());
    }

    #[test]
    fn call_becomes_active_when_receiver_joins() {
        let mut call = OngoingCall::new(participant("alice"), participant("bob"));
        let receiver_id = call.receiver.id.clone();

        let side = call.side_of(&receiver_id).unwrap();
        call.mark_joined(side);
        assert_eq!(call.state(), CallState::Active);
    }

    #[test]
    fn mark_joined_is_idempotent() {
        let mut call = OngoingCall::new(participant("alice"), participant("bob"));
        call.mark_joined(CallSide::Receiver);
        let snapshot = call.clone();

        call.mark_joined(CallSide::Receiver);
        assert_eq!(call, snapshot);
    }

    #[test]
    fn strangers_are_not_participants() {
        let call = OngoingCall::new(participant("alice"), participant("bob"));
        assert_eq!(call.side_of(&ID::new()), None);
        assert!(call.is_participant(&call.caller.id));
        assert!(call.is_participant(&call.receiver.id));
    }

    #[test]
    fn each_call_gets_a_fresh_channel_name() {
        let a = OngoingCall::new(participant("alice"), participant("bob"));
        let b = OngoingCall::new(participant("alice"), participant("carol"));
        assert_ne!(a.channel_name, b.channel_name);
    }
}
