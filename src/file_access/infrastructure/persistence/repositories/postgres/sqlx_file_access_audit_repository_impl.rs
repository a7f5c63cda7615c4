use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::file_access::{
    domain::model::{
        enums::{
            access_decision_reason::AccessDecisionReason,
            file_access_domain_error::FileAccessDomainError, wfh_status::WfhStatus,
        },
        events::file_access_audited_event::FileAccessAuditedEvent,
        value_objects::employee_id::EmployeeId,
    },
    infrastructure::persistence::repositories::file_access_audit_repository::FileAccessAuditRepository,
};

pub struct SqlxFileAccessAuditRepositoryImpl {
    pool: PgPool,
}

impl SqlxFileAccessAuditRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_event(
        row: sqlx::postgres::PgRow,
    ) -> Result<FileAccessAuditedEvent, FileAccessDomainError> {
        let event_id: Uuid = row.try_get("event_id").map_err(map_infra_error)?;
        let employee_id: String = row.try_get("employee_id").map_err(map_infra_error)?;
        let file_id: String = row.try_get("file_id").map_err(map_infra_error)?;
        let request_id: Option<String> = row.try_get("request_id").map_err(map_infra_error)?;
        let latitude: Option<f64> = row.try_get("latitude").map_err(map_infra_error)?;
        let longitude: Option<f64> = row.try_get("longitude").map_err(map_infra_error)?;
        let wifi_ssid: Option<String> = row.try_get("wifi_ssid").map_err(map_infra_error)?;
        let wfh_status_raw: String = row.try_get("wfh_status").map_err(map_infra_error)?;
        let allowed: bool = row.try_get("allowed").map_err(map_infra_error)?;
        let reason_raw: String = row.try_get("reason").map_err(map_infra_error)?;
        let occurred_at: DateTime<Utc> = row.try_get("occurred_at").map_err(map_infra_error)?;

        Ok(FileAccessAuditedEvent {
            event_id,
            employee_id,
            file_id,
            request_id,
            latitude,
            longitude,
            wifi_ssid,
            wfh_status: wfh_status_raw.parse::<WfhStatus>()?,
            allowed,
            reason: reason_raw.parse::<AccessDecisionReason>()?,
            occurred_at,
        })
    }
}

#[async_trait]
impl FileAccessAuditRepository for SqlxFileAccessAuditRepositoryImpl {
    async fn append_event(
        &self,
        event: &FileAccessAuditedEvent,
    ) -> Result<(), FileAccessDomainError> {
        let statement = r#"
            INSERT INTO file_access_audit_events (
                event_id,
                employee_id,
                file_id,
                request_id,
                latitude,
                longitude,
                wifi_ssid,
                wfh_status,
                allowed,
                reason,
                occurred_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (event_id) DO NOTHING
        "#;

        sqlx::query(statement)
            .bind(event.event_id)
            .bind(&event.employee_id)
            .bind(&event.file_id)
            .bind(&event.request_id)
            .bind(event.latitude)
            .bind(event.longitude)
            .bind(&event.wifi_ssid)
            .bind(event.wfh_status.as_str())
            .bind(event.allowed)
            .bind(event.reason.as_str())
            .bind(event.occurred_at)
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(())
    }

    async fn list_events(
        &self,
        employee_id: Option<&EmployeeId>,
        limit: u32,
    ) -> Result<Vec<FileAccessAuditedEvent>, FileAccessDomainError> {
        let statement = r#"
            SELECT event_id, employee_id, file_id, request_id, latitude, longitude,
                   wifi_ssid, wfh_status, allowed, reason, occurred_at
            FROM file_access_audit_events
            WHERE ($1::TEXT IS NULL OR employee_id = $1)
            ORDER BY occurred_at DESC, event_id DESC
            LIMIT $2
        "#;

        let rows = sqlx::query(statement)
            .bind(employee_id.map(EmployeeId::value))
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_event).collect()
    }
}

fn map_infra_error(error: sqlx::Error) -> FileAccessDomainError {
    FileAccessDomainError::InfrastructureError(error.to_string())
}
