mod event;
mod reminder;

pub use event::{IEventRepo, InMemoryEventRepo, PostgresEventRepo};
pub use reminder::{IReminderJobRepo, InMemoryReminderJobRepo, PostgresReminderJobRepo};
