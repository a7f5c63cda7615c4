use std::sync::Arc;

use async_trait::async_trait;

use crate::work_from_home::{
    domain::{
        model::{
            entities::wfh_request::WfhRequest,
            enums::{
                wfh_approval_state::WfhApprovalState,
                work_from_home_domain_error::WorkFromHomeDomainError,
            },
            queries::employee_wfh_requests_query::EmployeeWfhRequestsQuery,
        },
        services::work_from_home_query_service::WorkFromHomeQueryService,
    },
    infrastructure::persistence::repositories::wfh_request_repository::WfhRequestRepository,
};

pub struct WorkFromHomeQueryServiceImpl {
    wfh_request_repository: Arc<dyn WfhRequestRepository>,
}

impl WorkFromHomeQueryServiceImpl {
    pub fn new(wfh_request_repository: Arc<dyn WfhRequestRepository>) -> Self {
        Self {
            wfh_request_repository,
        }
    }
}

#[async_trait]
impl WorkFromHomeQueryService for WorkFromHomeQueryServiceImpl {
    async fn handle_get_latest(
        &self,
        query: EmployeeWfhRequestsQuery,
    ) -> Result<Option<WfhRequest>, WorkFromHomeDomainError> {
        let requests = self
            .wfh_request_repository
            .find_by_employee(query.employee_id())
            .await?;

        Ok(requests.into_iter().max_by_key(|r| r.requested_at()))
    }

    async fn handle_resolve_approval_state(
        &self,
        query: EmployeeWfhRequestsQuery,
    ) -> Result<WfhApprovalState, WorkFromHomeDomainError> {
        let requests = self
            .wfh_request_repository
            .find_by_employee(query.employee_id())
            .await?;

        Ok(WfhApprovalState::from_requests(&requests))
    }

    async fn handle_list_all(&self) -> Result<Vec<WfhRequest>, WorkFromHomeDomainError> {
        self.wfh_request_repository.list_all().await
    }
}
