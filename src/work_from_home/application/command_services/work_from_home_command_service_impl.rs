use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::work_from_home::{
    domain::{
        model::{
            commands::{
                review_wfh_request_command::ReviewWfhRequestCommand,
                submit_wfh_request_command::SubmitWfhRequestCommand,
            },
            entities::wfh_request::WfhRequest,
            enums::work_from_home_domain_error::WorkFromHomeDomainError,
        },
        services::work_from_home_command_service::WorkFromHomeCommandService,
    },
    infrastructure::persistence::repositories::wfh_request_repository::WfhRequestRepository,
};

pub struct WorkFromHomeCommandServiceImpl {
    wfh_request_repository: Arc<dyn WfhRequestRepository>,
}

impl WorkFromHomeCommandServiceImpl {
    pub fn new(wfh_request_repository: Arc<dyn WfhRequestRepository>) -> Self {
        Self {
            wfh_request_repository,
        }
    }
}

#[async_trait]
impl WorkFromHomeCommandService for WorkFromHomeCommandServiceImpl {
    async fn handle_submit(
        &self,
        command: SubmitWfhRequestCommand,
    ) -> Result<WfhRequest, WorkFromHomeDomainError> {
        if self
            .wfh_request_repository
            .find_pending_by_employee(command.employee_id())
            .await?
            .is_some()
        {
            return Err(WorkFromHomeDomainError::PendingRequestExists);
        }

        let request = WfhRequest::new_pending(
            command.employee_id().clone(),
            command.reason().clone(),
            Utc::now(),
        );
        self.wfh_request_repository.save(&request).await?;

        tracing::info!(
            request_id = %request.request_id(),
            employee_id = request.employee_id().value(),
            "work from home request submitted"
        );

        Ok(request)
    }

    async fn handle_review(
        &self,
        command: ReviewWfhRequestCommand,
    ) -> Result<WfhRequest, WorkFromHomeDomainError> {
        let mut request = self
            .wfh_request_repository
            .find_pending_by_employee(command.employee_id())
            .await?
            .ok_or(WorkFromHomeDomainError::PendingRequestNotFound)?;

        request.review(
            command.decision(),
            command.comment().map(str::to_string),
            Utc::now(),
        )?;
        self.wfh_request_repository.review(&request).await?;

        tracing::info!(
            request_id = %request.request_id(),
            employee_id = request.employee_id().value(),
            status = request.status().as_str(),
            "work from home request reviewed"
        );

        Ok(request)
    }
}
