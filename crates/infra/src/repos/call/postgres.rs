use super::{IOngoingCallRepo, InsertCallError};
use carebridge_domain::{CallParticipant, OngoingCall, ID};
use sqlx::types::Uuid;
use sqlx::{FromRow, PgPool};
use tracing::error;

pub struct PostgresCallRepo {
    pool: PgPool,
}

impl PostgresCallRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CallRaw {
    call_uid: Uuid,
    caller_uid: Uuid,
    caller_name: String,
    caller_image: String,
    receiver_uid: Uuid,
    receiver_name: String,
    receiver_image: String,
    channel_name: String,
    is_caller_joined: bool,
    is_receiver_joined: bool,
}

impl From<CallRaw> for OngoingCall {
    fn from(e: CallRaw) -> Self {
        Self {
            id: e.call_uid.into(),
            caller: CallParticipant {
                id: e.caller_uid.into(),
                name: e.caller_name,
                image: e.caller_image,
            },
            receiver: CallParticipant {
                id: e.receiver_uid.into(),
                name: e.receiver_name,
                image: e.receiver_image,
            },
            channel_name: e.channel_name,
            is_caller_joined: e.is_caller_joined,
            is_receiver_joined: e.is_receiver_joined,
        }
    }
}

#[async_trait::async_trait]
impl IOngoingCallRepo for PostgresCallRepo {
    async fn insert(&self, call: &OngoingCall) -> Result<(), InsertCallError> {
        let res = sqlx::query(
            r#"
            INSERT INTO ongoing_calls(
                call_uid, caller_uid, caller_name, caller_image,
                receiver_uid, receiver_name, receiver_image,
                channel_name, is_caller_joined, is_receiver_joined
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(call.id.inner_ref())
        .bind(call.caller.id.inner_ref())
        .bind(&call.caller.name)
        .bind(&call.caller.image)
        .bind(call.receiver.id.inner_ref())
        .bind(&call.receiver.name)
        .bind(&call.receiver.image)
        .bind(&call.channel_name)
        .bind(call.is_caller_joined)
        .bind(call.is_receiver_joined)
        .execute(&self.pool)
        .await;

        match res {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e))
                if matches!(e.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
            {
                Err(InsertCallError::ReceiverBusy)
            }
            Err(e) => Err(InsertCallError::Other(e.into())),
        }
    }

    async fn save(&self, call: &OngoingCall) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE ongoing_calls
            SET is_caller_joined = $2, is_receiver_joined = $3
            WHERE call_uid = $1
            "#,
        )
        .bind(call.id.inner_ref())
        .bind(call.is_caller_joined)
        .bind(call.is_receiver_joined)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, call_id: &ID) -> Option<OngoingCall> {
        match sqlx::query_as::<_, CallRaw>(
            r#"
            SELECT * FROM ongoing_calls
            WHERE call_uid = $1
            "#,
        )
        .bind(call_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(row) => row.map(|c| c.into()),
            Err(e) => {
                error!("Unable to find call with id: {}. Err: {:?}", call_id, e);
                None
            }
        }
    }

    async fn find_by_receiver(&self, receiver_id: &ID) -> Option<OngoingCall> {
        match sqlx::query_as::<_, CallRaw>(
            r#"
            SELECT * FROM ongoing_calls
            WHERE receiver_uid = $1
            "#,
        )
        .bind(receiver_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(row) => row.map(|c| c.into()),
            Err(e) => {
                error!(
                    "Unable to find call for receiver: {}. Err: {:?}",
                    receiver_id, e
                );
                None
            }
        }
    }

    async fn find_by_caller(&self, caller_id: &ID) -> Option<OngoingCall> {
        match sqlx::query_as::<_, CallRaw>(
            r#"
            SELECT * FROM ongoing_calls
            WHERE caller_uid = $1
            LIMIT 1
            "#,
        )
        .bind(caller_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(row) => row.map(|c| c.into()),
            Err(e) => {
                error!(
                    "Unable to find call for caller: {}. Err: {:?}",
                    caller_id, e
                );
                None
            }
        }
    }

    async fn delete(&self, call_id: &ID) -> Option<OngoingCall> {
        match sqlx::query_as::<_, CallRaw>(
            r#"
            DELETE FROM ongoing_calls
            WHERE call_uid = $1
            RETURNING *
            "#,
        )
        .bind(call_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(row) => row.map(|c| c.into()),
            Err(e) => {
                error!("Unable to delete call with id: {}. Err: {:?}", call_id, e);
                None
            }
        }
    }
}
