use super::ICareRequestRepo;
use carebridge_domain::{CareRequest, ID};
use sqlx::types::Uuid;
use sqlx::{FromRow, PgPool};
use tracing::error;

pub struct PostgresCareRequestRepo {
    pool: PgPool,
}

impl PostgresCareRequestRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CareRequestRaw {
    request_uid: Uuid,
    caregiver_uid: Uuid,
    patient_uid: Uuid,
    caregiver_name: String,
    patient_name: String,
}

impl From<CareRequestRaw> for CareRequest {
    fn from(e: CareRequestRaw) -> Self {
        Self {
            id: e.request_uid.into(),
            caregiver_id: e.caregiver_uid.into(),
            patient_id: e.patient_uid.into(),
            caregiver_name: e.caregiver_name,
            patient_name: e.patient_name,
        }
    }
}

#[async_trait::async_trait]
impl ICareRequestRepo for PostgresCareRequestRepo {
    async fn insert(&self, request: &CareRequest) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO care_requests(request_uid, caregiver_uid, patient_uid, caregiver_name, patient_name)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(request.id.inner_ref())
        .bind(request.caregiver_id.inner_ref())
        .bind(request.patient_id.inner_ref())
        .bind(&request.caregiver_name)
        .bind(&request.patient_name)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, request_id: &ID) -> Option<CareRequest> {
        match sqlx::query_as::<_, CareRequestRaw>(
            r#"
            SELECT * FROM care_requests
            WHERE request_uid = $1
            "#,
        )
        .bind(request_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(row) => row.map(|r| r.into()),
            Err(e) => {
                error!(
                    "Unable to find care request with id: {}. Err: {:?}",
                    request_id, e
                );
                None
            }
        }
    }

    async fn find_pending(&self, caregiver_id: &ID, patient_id: &ID) -> Option<CareRequest> {
        match sqlx::query_as::<_, CareRequestRaw>(
            r#"
            SELECT * FROM care_requests
            WHERE caregiver_uid = $1 AND patient_uid = $2
            "#,
        )
        .bind(caregiver_id.inner_ref())
        .bind(patient_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(row) => row.map(|r| r.into()),
            Err(e) => {
                error!(
                    "Unable to find pending care request from caregiver: {} to patient: {}. Err: {:?}",
                    caregiver_id, patient_id, e
                );
                None
            }
        }
    }

    async fn find_by_patient(&self, patient_id: &ID) -> Vec<CareRequest> {
        sqlx::query_as::<_, CareRequestRaw>(
            r#"
            SELECT * FROM care_requests
            WHERE patient_uid = $1
            "#,
        )
        .bind(patient_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|r| r.into())
        .collect()
    }

    async fn delete(&self, request_id: &ID) -> Option<CareRequest> {
        match sqlx::query_as::<_, CareRequestRaw>(
            r#"
            DELETE FROM care_requests
            WHERE request_uid = $1
            RETURNING *
            "#,
        )
        .bind(request_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(row) => row.map(|r| r.into()),
            Err(e) => {
                error!(
                    "Unable to delete care request with id: {}. Err: {:?}",
                    request_id, e
                );
                None
            }
        }
    }
}
