use super::IChatRoomRepo;
use carebridge_domain::{ChatRoom, ID};
use sqlx::types::Uuid;
use sqlx::{FromRow, PgPool};
use tracing::error;

pub struct PostgresChatRoomRepo {
    pool: PgPool,
}

impl PostgresChatRoomRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ChatRoomRaw {
    room_uid: Uuid,
    member_a_uid: Uuid,
    member_b_uid: Uuid,
}

impl From<ChatRoomRaw> for ChatRoom {
    fn from(e: ChatRoomRaw) -> Self {
        Self {
            id: e.room_uid.into(),
            members: [e.member_a_uid.into(), e.member_b_uid.into()],
        }
    }
}

#[async_trait::async_trait]
impl IChatRoomRepo for PostgresChatRoomRepo {
    async fn insert(&self, room: &ChatRoom) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO chat_rooms(room_uid, member_a_uid, member_b_uid)
            VALUES($1, $2, $3)
            "#,
        )
        .bind(room.id.inner_ref())
        .bind(room.members[0].inner_ref())
        .bind(room.members[1].inner_ref())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, room_id: &ID) -> Option<ChatRoom> {
        match sqlx::query_as::<_, ChatRoomRaw>(
            r#"
            SELECT * FROM chat_rooms
            WHERE room_uid = $1
            "#,
        )
        .bind(room_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(row) => row.map(|r| r.into()),
            Err(e) => {
                error!("Unable to find chat room with id: {}. Err: {:?}", room_id, e);
                None
            }
        }
    }

    async fn find_by_members(&self, member_a: &ID, member_b: &ID) -> Option<ChatRoom> {
        match sqlx::query_as::<_, ChatRoomRaw>(
            r#"
            SELECT * FROM chat_rooms
            WHERE (member_a_uid = $1 AND member_b_uid = $2)
               OR (member_a_uid = $2 AND member_b_uid = $1)
            "#,
        )
        .bind(member_a.inner_ref())
        .bind(member_b.inner_ref())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(row) => row.map(|r| r.into()),
            Err(e) => {
                error!(
                    "Unable to find chat room between: {} and {}. Err: {:?}",
                    member_a, member_b, e
                );
                None
            }
        }
    }
}
