use super::ICareLinkRepo;
use carebridge_domain::{CareLink, ID};
use sqlx::types::Uuid;
use sqlx::{FromRow, PgPool};
use tracing::error;

pub struct PostgresCareLinkRepo {
    pool: PgPool,
}

impl PostgresCareLinkRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CareLinkRaw {
    link_uid: Uuid,
    caregiver_uid: Uuid,
    patient_uid: Uuid,
    caregiver_name: String,
    patient_name: String,
}

impl From<CareLinkRaw> for CareLink {
    fn from(e: CareLinkRaw) -> Self {
        Self {
            id: e.link_uid.into(),
            caregiver_id: e.caregiver_uid.into(),
            patient_id: e.patient_uid.into(),
            caregiver_name: e.caregiver_name,
            patient_name: e.patient_name,
        }
    }
}

#[async_trait::async_trait]
impl ICareLinkRepo for PostgresCareLinkRepo {
    async fn insert(&self, link: &CareLink) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO care_links(link_uid, caregiver_uid, patient_uid, caregiver_name, patient_name)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(link.id.inner_ref())
        .bind(link.caregiver_id.inner_ref())
        .bind(link.patient_id.inner_ref())
        .bind(&link.caregiver_name)
        .bind(&link.patient_name)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, caregiver_id: &ID, patient_id: &ID) -> Option<CareLink> {
        match sqlx::query_as::<_, CareLinkRaw>(
            r#"
            SELECT * FROM care_links
            WHERE caregiver_uid = $1 AND patient_uid = $2
            "#,
        )
        .bind(caregiver_id.inner_ref())
        .bind(patient_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(row) => row.map(|l| l.into()),
            Err(e) => {
                error!(
                    "Unable to find care link between caregiver: {} and patient: {}. Err: {:?}",
                    caregiver_id, patient_id, e
                );
                None
            }
        }
    }

    async fn find_by_caregiver(&self, caregiver_id: &ID) -> Vec<CareLink> {
        sqlx::query_as::<_, CareLinkRaw>(
            r#"
            SELECT * FROM care_links
            WHERE caregiver_uid = $1
            "#,
        )
        .bind(caregiver_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|l| l.into())
        .collect()
    }

    async fn find_by_patient(&self, patient_id: &ID) -> Vec<CareLink> {
        sqlx::query_as::<_, CareLinkRaw>(
            r#"
            SELECT * FROM care_links
            WHERE patient_uid = $1
            "#,
        )
        .bind(patient_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|l| l.into())
        .collect()
    }
}
