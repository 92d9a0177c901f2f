mod agent;
mod call;
mod care;
mod chat;
mod event;
mod help_checkin;
mod push;
mod reminder;
mod shared;
mod user;

pub use agent::AgentRoom;
pub use call::{CallParticipant, CallSide, CallState, OngoingCall};
pub use care::{CareLink, CareRequest};
pub use chat::{ChatMessage, ChatRoom};
pub use event::{Cadence, Event};
pub use help_checkin::{HelpCheckinSetting, CHECKIN_GRACE_MS};
pub use push::{PushPayload, PushToken, RouterAction};
pub use reminder::ReminderJob;
pub use shared::entity::{Entity, ID};
pub use user::{CaregiverRef, PatientRef, Role, User};
