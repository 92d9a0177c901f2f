mod agent_room;
mod call;
mod care_link;
mod care_request;
mod chat_message;
mod chat_room;
mod event;
mod help_checkin;
mod push_token;
mod shared;
mod user;

use agent_room::{IAgentRoomRepo, InMemoryAgentRoomRepo, PostgresAgentRoomRepo};
use call::{IOngoingCallRepo, InMemoryCallRepo, PostgresCallRepo};
pub use call::InsertCallError;
use care_link::{ICareLinkRepo, InMemoryCareLinkRepo, PostgresCareLinkRepo};
use care_request::{ICareRequestRepo, InMemoryCareRequestRepo, PostgresCareRequestRepo};
use chat_message::{IChatMessageRepo, InMemoryChatMessageRepo, PostgresChatMessageRepo};
use chat_room::{IChatRoomRepo, InMemoryChatRoomRepo, PostgresChatRoomRepo};
use event::{
    IEventRepo, IReminderJobRepo, InMemoryEventRepo, InMemoryReminderJobRepo, PostgresEventRepo,
    PostgresReminderJobRepo,
};
use help_checkin::{IHelpCheckinRepo, InMemoryHelpCheckinRepo, PostgresHelpCheckinRepo};
use push_token::{IPushTokenRepo, InMemoryPushTokenRepo, PostgresPushTokenRepo};
use sqlx::PgPool;
use std::sync::Arc;
use user::{IUserRepo, InMemoryUserRepo, PostgresUserRepo};

#[derive(Clone)]
pub struct Repos {
    pub users: Arc<dyn IUserRepo>,
    pub care_links: Arc<dyn ICareLinkRepo>,
    pub care_requests: Arc<dyn ICareRequestRepo>,
    pub calls: Arc<dyn IOngoingCallRepo>,
    pub events: Arc<dyn IEventRepo>,
    pub reminders: Arc<dyn IReminderJobRepo>,
    pub help_checkins: Arc<dyn IHelpCheckinRepo>,
    pub push_tokens: Arc<dyn IPushTokenRepo>,
    pub chat_rooms: Arc<dyn IChatRoomRepo>,
    pub chat_messages: Arc<dyn IChatMessageRepo>,
    pub agent_rooms: Arc<dyn IAgentRoomRepo>,
}

impl Repos {
    pub fn create_postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PostgresUserRepo::new(pool.clone())),
            care_links: Arc::new(PostgresCareLinkRepo::new(pool.clone())),
            care_requests: Arc::new(PostgresCareRequestRepo::new(pool.clone())),
            calls: Arc::new(PostgresCallRepo::new(pool.clone())),
            events: Arc::new(PostgresEventRepo::new(pool.clone())),
            reminders: Arc::new(PostgresReminderJobRepo::new(pool.clone())),
            help_checkins: Arc::new(PostgresHelpCheckinRepo::new(pool.clone())),
            push_tokens: Arc::new(PostgresPushTokenRepo::new(pool.clone())),
            chat_rooms: Arc::new(PostgresChatRoomRepo::new(pool.clone())),
            chat_messages: Arc::new(PostgresChatMessageRepo::new(pool.clone())),
            agent_rooms: Arc::new(PostgresAgentRoomRepo::new(pool)),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepo::new()),
            care_links: Arc::new(InMemoryCareLinkRepo::new()),
            care_requests: Arc::new(InMemoryCareRequestRepo::new()),
            calls: Arc::new(InMemoryCallRepo::new()),
            events: Arc::new(InMemoryEventRepo::new()),
            reminders: Arc::new(InMemoryReminderJobRepo::new()),
            help_checkins: Arc::new(InMemoryHelpCheckinRepo::new()),
            push_tokens: Arc::new(InMemoryPushTokenRepo::new()),
            chat_rooms: Arc::new(InMemoryChatRoomRepo::new()),
            chat_messages: Arc::new(InMemoryChatMessageRepo::new()),
            agent_rooms: Arc::new(InMemoryAgentRoomRepo::new()),
        }
    }
}
