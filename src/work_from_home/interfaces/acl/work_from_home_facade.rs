use async_trait::async_trait;

use crate::work_from_home::domain::model::enums::{
    wfh_approval_state::WfhApprovalState, work_from_home_domain_error::WorkFromHomeDomainError,
};

#[async_trait]
pub trait WorkFromHomeFacade: Send + Sync {
    async fn resolve_approval_state(
        &self,
        employee_id: String,
    ) -> Result<WfhApprovalState, WorkFromHomeDomainError>;
}
