use super::IAgentRoomRepo;
use carebridge_domain::{AgentRoom, ID};
use sqlx::types::Uuid;
use sqlx::{FromRow, PgPool};
use tracing::error;

pub struct PostgresAgentRoomRepo {
    pool: PgPool,
}

impl PostgresAgentRoomRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AgentRoomRaw {
    agent_room_uid: Uuid,
    patient_uid: Uuid,
    room_name: String,
    token: String,
}

impl From<AgentRoomRaw> for AgentRoom {
    fn from(e: AgentRoomRaw) -> Self {
        Self {
            id: e.agent_room_uid.into(),
            patient_id: e.patient_uid.into(),
            room_name: e.room_name,
            token: e.token,
        }
    }
}

#[async_trait::async_trait]
impl IAgentRoomRepo for PostgresAgentRoomRepo {
    async fn insert(&self, room: &AgentRoom) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO agent_rooms(agent_room_uid, patient_uid, room_name, token)
            VALUES($1, $2, $3, $4)
            "#,
        )
        .bind(room.id.inner_ref())
        .bind(room.patient_id.inner_ref())
        .bind(&room.room_name)
        .bind(&room.token)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_by_patient(&self, patient_id: &ID) -> Option<AgentRoom> {
        match sqlx::query_as::<_, AgentRoomRaw>(
            r#"
            SELECT * FROM agent_rooms
            WHERE patient_uid = $1
            LIMIT 1
            "#,
        )
        .bind(patient_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(row) => row.map(|r| r.into()),
            Err(e) => {
                error!(
                    "Unable to find agent room for patient: {}. Err: {:?}",
                    patient_id, e
                );
                None
            }
        }
    }

    async fn delete(&self, room_id: &ID) -> Option<AgentRoom> {
        match sqlx::query_as::<_, AgentRoomRaw>(
            r#"
            DELETE FROM agent_rooms
            WHERE agent_room_uid = $1
            RETURNING *
            "#,
        )
        .bind(room_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(row) => row.map(|r| r.into()),
            Err(e) => {
                error!(
                    "Unable to delete agent room with id: {}. Err: {:?}",
                    room_id, e
                );
                None
            }
        }
    }
}
