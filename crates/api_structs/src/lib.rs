mod agent;
mod call;
mod care;
mod chat;
mod event;
mod help;
mod notification;
mod status;
mod user;

pub mod dtos {
    pub use crate::agent::dtos::*;
    pub use crate::call::dtos::*;
    pub use crate::care::dtos::*;
    pub use crate::chat::dtos::*;
    pub use crate::event::dtos::*;
    pub use crate::help::dtos::*;
    pub use crate::user::dtos::*;
}

pub use crate::agent::api::*;
pub use crate::call::api::*;
pub use crate::care::api::*;
pub use crate::chat::api::*;
pub use crate::event::api::*;
pub use crate::help::api::*;
pub use crate::notification::api::*;
pub use crate::status::api::*;
pub use crate::user::api::*;
