use async_trait::async_trait;

use crate::work_from_home::domain::model::{
    entities::wfh_request::WfhRequest,
    enums::work_from_home_domain_error::WorkFromHomeDomainError,
    value_objects::employee_id::EmployeeId,
};

#[async_trait]
pub trait WfhRequestRepository: Send + Sync {
    /// Inserts or updates by request id. A second pending request for the same
    /// employee fails with `PendingRequestExists`.
    async fn save(&self, request: &WfhRequest) -> Result<(), WorkFromHomeDomainError>;

    /// Records a review outcome only while the stored request is still pending.
    /// A request that was reviewed in the meantime fails with
    /// `InvalidStatusTransition` and is left untouched.
    async fn review(&self, request: &WfhRequest) -> Result<(), WorkFromHomeDomainError>;

    async fn find_pending_by_employee(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Option<WfhRequest>, WorkFromHomeDomainError>;

    /// Newest first.
    async fn find_by_employee(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Vec<WfhRequest>, WorkFromHomeDomainError>;

    /// Newest first.
    async fn list_all(&self) -> Result<Vec<WfhRequest>, WorkFromHomeDomainError>;
}
