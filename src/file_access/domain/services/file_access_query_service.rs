use async_trait::async_trait;

use crate::file_access::domain::model::{
    entities::{access_decision::AccessDecision, geofence_policy::GeofencePolicy},
    enums::file_access_domain_error::FileAccessDomainError,
    events::file_access_audited_event::FileAccessAuditedEvent,
    queries::{
        evaluate_file_access_query::EvaluateFileAccessQuery,
        list_access_events_query::ListAccessEventsQuery,
    },
};

#[async_trait]
pub trait FileAccessQueryService: Send + Sync {
    async fn handle_evaluate_file_access(
        &self,
        query: EvaluateFileAccessQuery,
    ) -> Result<AccessDecision, FileAccessDomainError>;

    async fn handle_list_access_events(
        &self,
        query: ListAccessEventsQuery,
    ) -> Result<Vec<FileAccessAuditedEvent>, FileAccessDomainError>;

    async fn handle_get_geofence_policy(&self) -> Result<GeofencePolicy, FileAccessDomainError>;
}
