use async_trait::async_trait;
use chrono::{NaiveTime, Utc};
use sqlx::{PgPool, Row};

use crate::file_access::{
    domain::model::{
        entities::geofence_policy::{GeofencePolicy, GeofencePolicyParts},
        enums::file_access_domain_error::FileAccessDomainError,
    },
    infrastructure::persistence::repositories::geofence_policy_repository::GeofencePolicyRepository,
};

pub struct SqlxGeofencePolicyRepositoryImpl {
    pool: PgPool,
}

impl SqlxGeofencePolicyRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GeofencePolicyRepository for SqlxGeofencePolicyRepositoryImpl {
    async fn find_current(&self) -> Result<Option<GeofencePolicy>, FileAccessDomainError> {
        let statement = r#"
            SELECT latitude, longitude, radius_meters, allowed_ssid, start_time, end_time
            FROM geofence_policies
            WHERE policy_id = 1
        "#;

        let maybe_row = sqlx::query(statement)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        let Some(row) = maybe_row else {
            return Ok(None);
        };

        let start_time: NaiveTime = row.try_get("start_time").map_err(map_infra_error)?;
        let end_time: NaiveTime = row.try_get("end_time").map_err(map_infra_error)?;

        let policy = GeofencePolicy::new(GeofencePolicyParts {
            latitude: row.try_get("latitude").map_err(map_infra_error)?,
            longitude: row.try_get("longitude").map_err(map_infra_error)?,
            radius_meters: row.try_get("radius_meters").map_err(map_infra_error)?,
            allowed_ssid: row.try_get("allowed_ssid").map_err(map_infra_error)?,
            start_time,
            end_time,
        })
        .map_err(|e| {
            FileAccessDomainError::InfrastructureError(format!("stored geofence policy: {e}"))
        })?;

        Ok(Some(policy))
    }

    async fn save(&self, policy: &GeofencePolicy) -> Result<(), FileAccessDomainError> {
        let statement = r#"
            INSERT INTO geofence_policies (
                policy_id,
                latitude,
                longitude,
                radius_meters,
                allowed_ssid,
                start_time,
                end_time,
                updated_at
            )
            VALUES (1, $1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (policy_id)
            DO UPDATE SET
                latitude = EXCLUDED.latitude,
                longitude = EXCLUDED.longitude,
                radius_meters = EXCLUDED.radius_meters,
                allowed_ssid = EXCLUDED.allowed_ssid,
                start_time = EXCLUDED.start_time,
                end_time = EXCLUDED.end_time,
                updated_at = EXCLUDED.updated_at
        "#;

        sqlx::query(statement)
            .bind(policy.center().latitude())
            .bind(policy.center().longitude())
            .bind(policy.radius_meters())
            .bind(policy.allowed_ssid())
            .bind(policy.start_time())
            .bind(policy.end_time())
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(())
    }
}

fn map_infra_error(error: sqlx::Error) -> FileAccessDomainError {
    FileAccessDomainError::InfrastructureError(error.to_string())
}
