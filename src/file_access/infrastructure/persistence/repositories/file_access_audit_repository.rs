use async_trait::async_trait;

use crate::file_access::domain::model::{
    enums::file_access_domain_error::FileAccessDomainError,
    events::file_access_audited_event::FileAccessAuditedEvent,
    value_objects::employee_id::EmployeeId,
};

/// Append-only store of file access decisions.
#[async_trait]
pub trait FileAccessAuditRepository: Send + Sync {
    async fn append_event(
        &self,
        event: &FileAccessAuditedEvent,
    ) -> Result<(), FileAccessDomainError>;

    /// Newest first.
    async fn list_events(
        &self,
        employee_id: Option<&EmployeeId>,
        limit: u32,
    ) -> Result<Vec<FileAccessAuditedEvent>, FileAccessDomainError>;
}
