use super::IEventRepo;
use carebridge_domain::{CaregiverRef, Event, PatientRef, ID};
use sqlx::types::Uuid;
use sqlx::{FromRow, PgPool};
use tracing::error;

pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventRaw {
    event_uid: Uuid,
    title: String,
    description: String,
    date_time: i64,
    patient_uid: Uuid,
    patient_name: String,
    caregiver_uid: Option<Uuid>,
    caregiver_name: Option<String>,
    user_uid: Uuid,
    recurrence: Option<String>,
    created: i64,
    updated: i64,
}

impl From<EventRaw> for Event {
    fn from(e: EventRaw) -> Self {
        let caregiver = match (e.caregiver_uid, e.caregiver_name) {
            (Some(uid), Some(name)) => Some(CaregiverRef {
                id: uid.into(),
                name,
            }),
            _ => None,
        };
        Self {
            id: e.event_uid.into(),
            title: e.title,
            description: e.description,
            date_time: e.date_time,
            patient: PatientRef {
                id: e.patient_uid.into(),
                name: e.patient_name,
            },
            caregiver,
            user_id: e.user_uid.into(),
            recurrence: e.recurrence.and_then(|r| r.parse().ok()),
            created: e.created,
            updated: e.updated,
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for PostgresEventRepo {
    async fn insert(&self, event: &Event) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO events(
                event_uid, title, description, date_time,
                patient_uid, patient_name, caregiver_uid, caregiver_name,
                user_uid, recurrence, created, updated
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(event.id.inner_ref())
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.date_time)
        .bind(event.patient.id.inner_ref())
        .bind(&event.patient.name)
        .bind(event.caregiver.as_ref().map(|c| *c.id.inner_ref()))
        .bind(event.caregiver.as_ref().map(|c| c.name.clone()))
        .bind(event.user_id.inner_ref())
        .bind(event.recurrence.map(|r| r.as_str()))
        .bind(event.created)
        .bind(event.updated)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, event: &Event) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE events
            SET title = $2, description = $3, date_time = $4,
                recurrence = $5, updated = $6
            WHERE event_uid = $1
            "#,
        )
        .bind(event.id.inner_ref())
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.date_time)
        .bind(event.recurrence.map(|r| r.as_str()))
        .bind(event.updated)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<Event> {
        match sqlx::query_as::<_, EventRaw>(
            r#"
            SELECT * FROM events
            WHERE event_uid = $1
            "#,
        )
        .bind(event_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(row) => row.map(|e| e.into()),
            Err(e) => {
                error!("Unable to find event with id: {}. Err: {:?}", event_id, e);
                None
            }
        }
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<Event> {
        sqlx::query_as::<_, EventRaw>(
            r#"
            SELECT * FROM events
            WHERE user_uid = $1
            ORDER BY date_time DESC
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|e| e.into())
        .collect()
    }

    async fn find_by_user_timespan(&self, user_id: &ID, start: i64, end: i64) -> Vec<Event> {
        sqlx::query_as::<_, EventRaw>(
            r#"
            SELECT * FROM events
            WHERE user_uid = $1 AND date_time >= $2 AND date_time < $3
            ORDER BY date_time ASC
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|e| e.into())
        .collect()
    }

    async fn delete(&self, event_id: &ID) -> Option<Event> {
        match sqlx::query_as::<_, EventRaw>(
            r#"
            DELETE FROM events
            WHERE event_uid = $1
            RETURNING *
            "#,
        )
        .bind(event_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(row) => row.map(|e| e.into()),
            Err(e) => {
                error!("Unable to delete event with id: {}. Err: {:?}", event_id, e);
                None
            }
        }
    }
}
