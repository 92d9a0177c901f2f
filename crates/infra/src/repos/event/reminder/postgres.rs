use super::IReminderJobRepo;
use carebridge_domain::{ReminderJob, ID};
use sqlx::types::Uuid;
use sqlx::{FromRow, PgPool};

pub struct PostgresReminderJobRepo {
    pool: PgPool,
}

impl PostgresReminderJobRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderJobRaw {
    job_uid: Uuid,
    event_uid: Uuid,
    user_uid: Uuid,
    title: String,
    body: String,
    anchor_ts: i64,
    remind_at: i64,
}

impl From<ReminderJobRaw> for ReminderJob {
    fn from(e: ReminderJobRaw) -> Self {
        Self {
            id: e.job_uid.into(),
            event_id: e.event_uid.into(),
            user_id: e.user_uid.into(),
            title: e.title,
            body: e.body,
            anchor_ts: e.anchor_ts,
            remind_at: e.remind_at,
        }
    }
}

#[async_trait::async_trait]
impl IReminderJobRepo for PostgresReminderJobRepo {
    async fn insert(&self, job: &ReminderJob) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminder_jobs(job_uid, event_uid, user_uid, title, body, anchor_ts, remind_at)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(job.id.inner_ref())
        .bind(job.event_id.inner_ref())
        .bind(job.user_id.inner_ref())
        .bind(&job.title)
        .bind(&job.body)
        .bind(job.anchor_ts)
        .bind(job.remind_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_all_before(&self, before: i64) -> Vec<ReminderJob> {
        sqlx::query_as::<_, ReminderJobRaw>(
            r#"
            DELETE FROM reminder_jobs AS j
            WHERE j.remind_at <= $1
            RETURNING *
            "#,
        )
        .bind(before)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|j| j.into())
        .collect()
    }

    async fn find_by_event(&self, event_id: &ID) -> Vec<ReminderJob> {
        sqlx::query_as::<_, ReminderJobRaw>(
            r#"
            SELECT * FROM reminder_jobs
            WHERE event_uid = $1
            "#,
        )
        .bind(event_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|j| j.into())
        .collect()
    }
}
