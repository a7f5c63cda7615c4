use crate::work_from_home::domain::model::{
    enums::{
        wfh_review_decision::WfhReviewDecision,
        work_from_home_domain_error::WorkFromHomeDomainError,
    },
    value_objects::employee_id::EmployeeId,
};

#[derive(Clone, Debug)]
pub struct ReviewWfhRequestCommand {
    employee_id: EmployeeId,
    decision: WfhReviewDecision,
    comment: Option<String>,
}

impl ReviewWfhRequestCommand {
    pub fn new(
        employee_id: String,
        status: &str,
        comment: Option<String>,
    ) -> Result<Self, WorkFromHomeDomainError> {
        Ok(Self {
            employee_id: EmployeeId::new(employee_id)?,
            decision: status.parse()?,
            comment,
        })
    }

    pub fn employee_id(&self) -> &EmployeeId {
        &self.employee_id
    }
    pub fn decision(&self) -> WfhReviewDecision {
        self.decision
    }
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}
