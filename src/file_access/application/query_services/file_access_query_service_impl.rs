use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use chrono::{FixedOffset, Offset, Utc};

use crate::file_access::{
    domain::{
        model::{
            entities::{
                access_decision::AccessDecision, access_request::AccessRequest,
                geofence_policy::GeofencePolicy,
            },
            enums::{
                file_access_domain_error::FileAccessDomainError,
                geofence_enforcement::GeofenceEnforcement, wfh_status::WfhStatus,
            },
            events::file_access_audited_event::FileAccessAuditedEvent,
            queries::{
                evaluate_file_access_query::EvaluateFileAccessQuery,
                list_access_events_query::ListAccessEventsQuery,
            },
            value_objects::employee_id::EmployeeId,
        },
        services::{
            access_policy_evaluator::AccessPolicyEvaluator,
            file_access_query_service::FileAccessQueryService,
        },
    },
    infrastructure::persistence::repositories::{
        file_access_audit_repository::FileAccessAuditRepository,
        geofence_policy_repository::GeofencePolicyRepository,
    },
    interfaces::acl::wfh_directory_facade::{WfhDirectoryError, WfhDirectoryFacade},
};

pub struct FileAccessQueryServiceImpl {
    wfh_directory: Arc<dyn WfhDirectoryFacade>,
    audit_repository: Arc<dyn FileAccessAuditRepository>,
    geofence_policy_repository: Arc<dyn GeofencePolicyRepository>,
    enforcement: GeofenceEnforcement,
    office_offset: FixedOffset,
    audit_timeout: Duration,
}

const DEFAULT_AUDIT_TIMEOUT: Duration = Duration::from_secs(2);

impl FileAccessQueryServiceImpl {
    pub fn new(
        wfh_directory: Arc<dyn WfhDirectoryFacade>,
        audit_repository: Arc<dyn FileAccessAuditRepository>,
        geofence_policy_repository: Arc<dyn GeofencePolicyRepository>,
    ) -> Self {
        Self::new_with_enforcement(
            wfh_directory,
            audit_repository,
            geofence_policy_repository,
            GeofenceEnforcement::PresenceOnly,
            Utc.fix(),
        )
    }

    pub fn new_with_enforcement(
        wfh_directory: Arc<dyn WfhDirectoryFacade>,
        audit_repository: Arc<dyn FileAccessAuditRepository>,
        geofence_policy_repository: Arc<dyn GeofencePolicyRepository>,
        enforcement: GeofenceEnforcement,
        office_offset: FixedOffset,
    ) -> Self {
        Self {
            wfh_directory,
            audit_repository,
            geofence_policy_repository,
            enforcement,
            office_offset,
            audit_timeout: DEFAULT_AUDIT_TIMEOUT,
        }
    }

    /// Upper bound on how long a decision waits for its audit append.
    pub fn with_audit_timeout(mut self, audit_timeout: Duration) -> Self {
        self.audit_timeout = audit_timeout;
        self
    }

    async fn resolve_wfh_status(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<WfhStatus, FileAccessDomainError> {
        match self.wfh_directory.get_wfh_status(employee_id).await {
            Ok(status) => Ok(status),
            Err(WfhDirectoryError::NotFound) => {
                tracing::debug!(
                    employee_id = employee_id.value(),
                    "employee unknown to wfh directory, evaluating without approval"
                );
                Ok(WfhStatus::None)
            }
            Err(WfhDirectoryError::Unavailable(reason)) => {
                tracing::error!(
                    employee_id = employee_id.value(),
                    error = %reason,
                    "wfh directory lookup failed"
                );
                Err(FileAccessDomainError::WfhDirectoryUnavailable(reason))
            }
        }
    }

    async fn current_policy(&self) -> Result<GeofencePolicy, FileAccessDomainError> {
        Ok(self
            .geofence_policy_repository
            .find_current()
            .await?
            .unwrap_or_else(GeofencePolicy::office_default))
    }

    /// Presence checks and an approved WFH status settle the request without
    /// the stored policy; it is only loaded when strict checks can still deny.
    async fn decide(
        &self,
        request: &AccessRequest,
        wfh_status: WfhStatus,
    ) -> Result<AccessDecision, FileAccessDomainError> {
        let presence = AccessPolicyEvaluator::presence_only().evaluate(request, wfh_status);

        if !presence.allowed()
            || wfh_status.is_approved()
            || self.enforcement == GeofenceEnforcement::PresenceOnly
        {
            return Ok(presence);
        }

        let policy = self.current_policy().await?;
        let evaluator = AccessPolicyEvaluator::strict(policy, self.office_offset);
        Ok(evaluator.evaluate(request, wfh_status))
    }

    async fn audit(&self, event: FileAccessAuditedEvent) {
        let outcome =
            tokio::time::timeout(self.audit_timeout, self.audit_repository.append_event(&event))
                .await;

        let error = match outcome {
            Ok(Ok(())) => return,
            Ok(Err(error)) => error.to_string(),
            Err(_) => format!("timed out after {}ms", self.audit_timeout.as_millis()),
        };

        tracing::warn!(
            event_id = %event.event_id,
            employee_id = %event.employee_id,
            file_id = %event.file_id,
            allowed = event.allowed,
            reason = event.reason.as_str(),
            error = %error,
            "failed to append file access audit event"
        );
    }
}

#[async_trait]
impl FileAccessQueryService for FileAccessQueryServiceImpl {
    async fn handle_evaluate_file_access(
        &self,
        query: EvaluateFileAccessQuery,
    ) -> Result<AccessDecision, FileAccessDomainError> {
        let request = AccessRequest::new(query, Utc::now());

        let wfh_status = self.resolve_wfh_status(request.employee_id()).await?;
        let decision = self.decide(&request, wfh_status).await?;

        tracing::info!(
            employee_id = request.employee_id().value(),
            file_id = request.file_id().value(),
            request_id = request.request_id(),
            wfh_status = wfh_status.as_str(),
            enforcement = self.enforcement.as_str(),
            allowed = decision.allowed(),
            reason = decision.reason().as_str(),
            "file access evaluated"
        );

        self.audit(FileAccessAuditedEvent::record(&request, wfh_status, &decision))
            .await;

        Ok(decision)
    }

    async fn handle_list_access_events(
        &self,
        query: ListAccessEventsQuery,
    ) -> Result<Vec<FileAccessAuditedEvent>, FileAccessDomainError> {
        self.audit_repository
            .list_events(query.employee_id(), query.limit())
            .await
    }

    async fn handle_get_geofence_policy(&self) -> Result<GeofencePolicy, FileAccessDomainError> {
        self.current_policy().await
    }
}
