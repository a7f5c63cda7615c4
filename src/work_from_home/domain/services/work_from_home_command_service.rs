use async_trait::async_trait;

use crate::work_from_home::domain::model::{
    commands::{
        review_wfh_request_command::ReviewWfhRequestCommand,
        submit_wfh_request_command::SubmitWfhRequestCommand,
    },
    entities::wfh_request::WfhRequest,
    enums::work_from_home_domain_error::WorkFromHomeDomainError,
};

#[async_trait]
pub trait WorkFromHomeCommandService: Send + Sync {
    async fn handle_submit(
        &self,
        command: SubmitWfhRequestCommand,
    ) -> Result<WfhRequest, WorkFromHomeDomainError>;

    async fn handle_review(
        &self,
        command: ReviewWfhRequestCommand,
    ) -> Result<WfhRequest, WorkFromHomeDomainError>;
}
