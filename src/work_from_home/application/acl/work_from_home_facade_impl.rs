use std::sync::Arc;

use async_trait::async_trait;

use crate::work_from_home::{
    domain::{
        model::{
            enums::{
                wfh_approval_state::WfhApprovalState,
                work_from_home_domain_error::WorkFromHomeDomainError,
            },
            queries::employee_wfh_requests_query::EmployeeWfhRequestsQuery,
        },
        services::work_from_home_query_service::WorkFromHomeQueryService,
    },
    interfaces::acl::work_from_home_facade::WorkFromHomeFacade,
};

pub struct WorkFromHomeFacadeImpl {
    query_service: Arc<dyn WorkFromHomeQueryService>,
}

impl WorkFromHomeFacadeImpl {
    pub fn new(query_service: Arc<dyn WorkFromHomeQueryService>) -> Self {
        Self { query_service }
    }
}

#[async_trait]
impl WorkFromHomeFacade for WorkFromHomeFacadeImpl {
    async fn resolve_approval_state(
        &self,
        employee_id: String,
    ) -> Result<WfhApprovalState, WorkFromHomeDomainError> {
        let query = EmployeeWfhRequestsQuery::new(employee_id)?;
        self.query_service
            .handle_resolve_approval_state(query)
            .await
    }
}
