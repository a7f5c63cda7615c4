use async_trait::async_trait;

use crate::work_from_home::domain::model::{
    entities::wfh_request::WfhRequest,
    enums::{
        wfh_approval_state::WfhApprovalState,
        work_from_home_domain_error::WorkFromHomeDomainError,
    },
    queries::employee_wfh_requests_query::EmployeeWfhRequestsQuery,
};

#[async_trait]
pub trait WorkFromHomeQueryService: Send + Sync {
    async fn handle_get_latest(
        &self,
        query: EmployeeWfhRequestsQuery,
    ) -> Result<Option<WfhRequest>, WorkFromHomeDomainError>;

    async fn handle_resolve_approval_state(
        &self,
        query: EmployeeWfhRequestsQuery,
    ) -> Result<WfhApprovalState, WorkFromHomeDomainError>;

    async fn handle_list_all(&self) -> Result<Vec<WfhRequest>, WorkFromHomeDomainError>;
}
