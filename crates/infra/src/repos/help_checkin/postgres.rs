use super::IHelpCheckinRepo;
use carebridge_domain::{CaregiverRef, HelpCheckinSetting, ID};
use sqlx::types::Uuid;
use sqlx::{FromRow, PgPool};
use tracing::error;

pub struct PostgresHelpCheckinRepo {
    pool: PgPool,
}

impl PostgresHelpCheckinRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct HelpCheckinRaw {
    setting_uid: Uuid,
    patient_uid: Uuid,
    patient_name: String,
    caregiver_uid: Option<Uuid>,
    caregiver_name: Option<String>,
    is_active: bool,
    interval_minutes: i64,
    last_notification_time: i64,
}

impl From<HelpCheckinRaw> for HelpCheckinSetting {
    fn from(e: HelpCheckinRaw) -> Self {
        let set_by_caregiver = match (e.caregiver_uid, e.caregiver_name) {
            (Some(uid), Some(name)) => Some(CaregiverRef {
                id: uid.into(),
                name,
            }),
            _ => None,
        };
        Self {
            id: e.setting_uid.into(),
            patient_id: e.patient_uid.into(),
            patient_name: e.patient_name,
            set_by_caregiver,
            is_active: e.is_active,
            interval_minutes: e.interval_minutes,
            last_notification_time: e.last_notification_time,
        }
    }
}

#[async_trait::async_trait]
impl IHelpCheckinRepo for PostgresHelpCheckinRepo {
    async fn insert(&self, setting: &HelpCheckinSetting) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO help_checkins(
                setting_uid, patient_uid, patient_name,
                caregiver_uid, caregiver_name,
                is_active, interval_minutes, last_notification_time
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(setting.id.inner_ref())
        .bind(setting.patient_id.inner_ref())
        .bind(&setting.patient_name)
        .bind(setting.set_by_caregiver.as_ref().map(|c| *c.id.inner_ref()))
        .bind(setting.set_by_caregiver.as_ref().map(|c| c.name.clone()))
        .bind(setting.is_active)
        .bind(setting.interval_minutes)
        .bind(setting.last_notification_time)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, setting: &HelpCheckinSetting) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE help_checkins
            SET caregiver_uid = $2, caregiver_name = $3,
                is_active = $4, interval_minutes = $5, last_notification_time = $6
            WHERE setting_uid = $1
            "#,
        )
        .bind(setting.id.inner_ref())
        .bind(setting.set_by_caregiver.as_ref().map(|c| *c.id.inner_ref()))
        .bind(setting.set_by_caregiver.as_ref().map(|c| c.name.clone()))
        .bind(setting.is_active)
        .bind(setting.interval_minutes)
        .bind(setting.last_notification_time)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_by_patient(&self, patient_id: &ID) -> Option<HelpCheckinSetting> {
        match sqlx::query_as::<_, HelpCheckinRaw>(
            r#"
            SELECT * FROM help_checkins
            WHERE patient_uid = $1
            "#,
        )
        .bind(patient_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(row) => row.map(|s| s.into()),
            Err(e) => {
                error!(
                    "Unable to find help check-in setting for patient: {}. Err: {:?}",
                    patient_id, e
                );
                None
            }
        }
    }

    async fn find_all_active(&self) -> Vec<HelpCheckinSetting> {
        sqlx::query_as::<_, HelpCheckinRaw>(
            r#"
            SELECT * FROM help_checkins
            WHERE is_active = TRUE
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|s| s.into())
        .collect()
    }
}
