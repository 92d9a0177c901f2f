use super::IPushTokenRepo;
use carebridge_domain::{PushToken, ID};
use sqlx::types::Uuid;
use sqlx::{FromRow, PgPool};
use tracing::error;

pub struct PostgresPushTokenRepo {
    pool: PgPool,
}

impl PostgresPushTokenRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PushTokenRaw {
    token_uid: Uuid,
    user_uid: Uuid,
    token: String,
    device_id: String,
}

impl From<PushTokenRaw> for PushToken {
    fn from(e: PushTokenRaw) -> Self {
        Self {
            id: e.token_uid.into(),
            user_id: e.user_uid.into(),
            token: e.token,
            device_id: e.device_id,
        }
    }
}

#[async_trait::async_trait]
impl IPushTokenRepo for PostgresPushTokenRepo {
    async fn insert(&self, token: &PushToken) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO push_tokens(token_uid, user_uid, token, device_id)
            VALUES($1, $2, $3, $4)
            "#,
        )
        .bind(token.id.inner_ref())
        .bind(token.user_id.inner_ref())
        .bind(&token.token)
        .bind(&token.device_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, token: &PushToken) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE push_tokens
            SET user_uid = $2, token = $3
            WHERE token_uid = $1
            "#,
        )
        .bind(token.id.inner_ref())
        .bind(token.user_id.inner_ref())
        .bind(&token.token)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_by_device(&self, device_id: &str) -> Option<PushToken> {
        match sqlx::query_as::<_, PushTokenRaw>(
            r#"
            SELECT * FROM push_tokens
            WHERE device_id = $1
            "#,
        )
        .bind(device_id)
        .fetch_optional(&self.pool)
        .await
        {
            Ok(row) => row.map(|t| t.into()),
            Err(e) => {
                error!(
                    "Unable to find push token for device: {}. Err: {:?}",
                    device_id, e
                );
                None
            }
        }
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<PushToken> {
        sqlx::query_as::<_, PushTokenRaw>(
            r#"
            SELECT * FROM push_tokens
            WHERE user_uid = $1
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|t| t.into())
        .collect()
    }
}
