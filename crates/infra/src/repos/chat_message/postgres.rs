use super::IChatMessageRepo;
use carebridge_domain::{ChatMessage, ID};
use sqlx::types::Uuid;
use sqlx::{FromRow, PgPool};

pub struct PostgresChatMessageRepo {
    pool: PgPool,
}

impl PostgresChatMessageRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ChatMessageRaw {
    message_uid: Uuid,
    room_uid: Uuid,
    sender_uid: Uuid,
    body: String,
    sent_at: i64,
}

impl From<ChatMessageRaw> for ChatMessage {
    fn from(e: ChatMessageRaw) -> Self {
        Self {
            id: e.message_uid.into(),
            room_id: e.room_uid.into(),
            sender_id: e.sender_uid.into(),
            body: e.body,
            sent_at: e.sent_at,
        }
    }
}

#[async_trait::async_trait]
impl IChatMessageRepo for PostgresChatMessageRepo {
    async fn insert(&self, message: &ChatMessage) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO chat_messages(message_uid, room_uid, sender_uid, body, sent_at)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(message.id.inner_ref())
        .bind(message.room_id.inner_ref())
        .bind(message.sender_id.inner_ref())
        .bind(&message.body)
        .bind(message.sent_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_by_room(&self, room_id: &ID) -> Vec<ChatMessage> {
        sqlx::query_as::<_, ChatMessageRaw>(
            r#"
            SELECT * FROM chat_messages
            WHERE room_uid = $1
            ORDER BY sent_at ASC
            "#,
        )
        .bind(room_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|m| m.into())
        .collect()
    }
}
