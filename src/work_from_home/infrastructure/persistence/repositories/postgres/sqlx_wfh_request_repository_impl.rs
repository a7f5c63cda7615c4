use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use std::str::FromStr;
use uuid::Uuid;

use crate::work_from_home::{
    domain::model::{
        entities::wfh_request::{WfhRequest, WfhRequestParts},
        enums::{
            wfh_request_status::WfhRequestStatus,
            work_from_home_domain_error::WorkFromHomeDomainError,
        },
        value_objects::{employee_id::EmployeeId, wfh_reason::WfhReason},
    },
    infrastructure::persistence::repositories::wfh_request_repository::WfhRequestRepository,
};

const UNIQUE_VIOLATION: &str = "23505";

pub struct SqlxWfhRequestRepositoryImpl {
    pool: PgPool,
}

impl SqlxWfhRequestRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<WfhRequest, WorkFromHomeDomainError> {
        let request_id: Uuid = row.try_get("request_id").map_err(map_infra_error)?;
        let employee_id_raw: String = row.try_get("employee_id").map_err(map_infra_error)?;
        let reason_raw: String = row.try_get("reason").map_err(map_infra_error)?;
        let status_raw: String = row.try_get("status").map_err(map_infra_error)?;
        let requested_at: DateTime<Utc> = row.try_get("requested_at").map_err(map_infra_error)?;
        let reviewed_at: Option<DateTime<Utc>> =
            row.try_get("reviewed_at").map_err(map_infra_error)?;
        let admin_comment: Option<String> =
            row.try_get("admin_comment").map_err(map_infra_error)?;

        Ok(WfhRequest::restore(WfhRequestParts {
            request_id,
            employee_id: EmployeeId::new(employee_id_raw)?,
            reason: WfhReason::new(reason_raw)?,
            status: WfhRequestStatus::from_str(&status_raw)?,
            requested_at,
            reviewed_at,
            admin_comment,
        }))
    }
}

#[async_trait]
impl WfhRequestRepository for SqlxWfhRequestRepositoryImpl {
    async fn save(&self, request: &WfhRequest) -> Result<(), WorkFromHomeDomainError> {
        let statement = r#"
            INSERT INTO wfh_requests (
                request_id,
                employee_id,
                reason,
                status,
                requested_at,
                reviewed_at,
                admin_comment
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (request_id)
            DO UPDATE SET
                status = EXCLUDED.status,
                reviewed_at = EXCLUDED.reviewed_at,
                admin_comment = EXCLUDED.admin_comment
        "#;

        sqlx::query(statement)
            .bind(request.request_id())
            .bind(request.employee_id().value())
            .bind(request.reason().value())
            .bind(request.status().as_str())
            .bind(request.requested_at())
            .bind(request.reviewed_at())
            .bind(request.admin_comment())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                let is_unique_violation = e
                    .as_database_error()
                    .and_then(|db| db.code())
                    .is_some_and(|code| code == UNIQUE_VIOLATION);
                if is_unique_violation {
                    WorkFromHomeDomainError::PendingRequestExists
                } else {
                    map_infra_error(e)
                }
            })?;

        Ok(())
    }

    async fn review(&self, request: &WfhRequest) -> Result<(), WorkFromHomeDomainError> {
        let statement = r#"
            UPDATE wfh_requests
            SET status = $2, reviewed_at = $3, admin_comment = $4
            WHERE request_id = $1 AND status = 'pending'
        "#;

        let result = sqlx::query(statement)
            .bind(request.request_id())
            .bind(request.status().as_str())
            .bind(request.reviewed_at())
            .bind(request.admin_comment())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        if result.rows_affected() == 0 {
            return Err(WorkFromHomeDomainError::InvalidStatusTransition);
        }

        Ok(())
    }

    async fn find_pending_by_employee(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Option<WfhRequest>, WorkFromHomeDomainError> {
        let statement = r#"
            SELECT request_id, employee_id, reason, status, requested_at, reviewed_at, admin_comment
            FROM wfh_requests
            WHERE employee_id = $1 AND status = 'pending'
            ORDER BY requested_at DESC
            LIMIT 1
        "#;

        let maybe_row = sqlx::query(statement)
            .bind(employee_id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn find_by_employee(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Vec<WfhRequest>, WorkFromHomeDomainError> {
        let statement = r#"
            SELECT request_id, employee_id, reason, status, requested_at, reviewed_at, admin_comment
            FROM wfh_requests
            WHERE employee_id = $1
            ORDER BY requested_at DESC
        "#;

        let rows = sqlx::query(statement)
            .bind(employee_id.value())
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }

    async fn list_all(&self) -> Result<Vec<WfhRequest>, WorkFromHomeDomainError> {
        let statement = r#"
            SELECT request_id, employee_id, reason, status, requested_at, reviewed_at, admin_comment
            FROM wfh_requests
            ORDER BY requested_at DESC
        "#;

        let rows = sqlx::query(statement)
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }
}

fn map_infra_error(error: sqlx::Error) -> WorkFromHomeDomainError {
    WorkFromHomeDomainError::InfrastructureError(error.to_string())
}
