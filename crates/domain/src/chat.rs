use crate::shared::entity::{Entity, ID};

/// Truncation length for the message preview carried in push payloads.
const PREVIEW_MAX_CHARS: usize = 80;

/// A two-party conversation. Rooms are looked up by their unordered
/// member pair, so resolving a conversation is idempotent.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRoom {
    pub id: ID,
    pub members: [ID; 2],
}

impl ChatRoom {
    pub fn new(a: ID, b: ID) -> Self {
        Self {
            id: Default::default(),
            members: [a, b],
        }
    }

    pub fn has_member(&self, user_id: &ID) -> bool {
        self.members.iter().any(|m| m == user_id)
    }

    pub fn is_between(&self, a: &ID, b: &ID) -> bool {
        (self.members[0] == *a && self.members[1] == *b)
            || (self.members[0] == *b && self.members[1] == *a)
    }

    pub fn other_member(&self, user_id: &ID) -> Option<&ID> {
        if self.members[0] == *user_id {
            Some(&self.members[1])
        } else if self.members[1] == *user_id {
            Some(&self.members[0])
        } else {
            None
        }
    }
}

impl Entity<ID> for ChatRoom {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: ID,
    pub room_id: ID,
    pub sender_id: ID,
    pub body: String,
    pub sent_at: i64,
}

impl ChatMessage {
    /// Short body excerpt for the push notification.
    pub fn preview(&self) -> String {
        if self.body.chars().count() <= PREVIEW_MAX_CHARS {
            return self.body.clone();
        }
        let truncated: String = self.body.chars().take(PREVIEW_MAX_CHARS).collect();
        format!("{}…", truncated)
    }
}

impl Entity<ID> for ChatMessage {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn room_membership_is_unordered() {
        let a = ID::new();
        let b = ID::new();
        let room = ChatRoom::new(a.clone(), b.clone());

        assert!(room.is_between(&a, &b));
        assert!(room.is_between(&b, &a));
        assert_eq!(room.other_member(&a), Some(&b));
        assert_eq!(room.other_member(&b), Some(&a));
        assert_eq!(room.other_member(&ID::new()), None);
    }

    #[test]
    fn long_bodies_are_truncated_in_previews() {
        let msg = ChatMessage {
            id: Default::default(),
            room_id: Default::default(),
            sender_id: Default::default(),
            body: "a".repeat(200),
            sent_at: 0,
        };
        assert_eq!(msg.preview().chars().count(), 81);

        let short = ChatMessage { body: "hi".into(), ..msg };
        assert_eq!(short.preview(), "hi");
    }
}
