use crate::work_from_home::domain::model::{
    enums::work_from_home_domain_error::WorkFromHomeDomainError,
    value_objects::{employee_id::EmployeeId, wfh_reason::WfhReason},
};

#[derive(Clone, Debug)]
pub struct SubmitWfhRequestCommand {
    employee_id: EmployeeId,
    reason: WfhReason,
}

impl SubmitWfhRequestCommand {
    pub fn new(employee_id: String, reason: String) -> Result<Self, WorkFromHomeDomainError> {
        Ok(Self {
            employee_id: EmployeeId::new(employee_id)?,
            reason: WfhReason::new(reason)?,
        })
    }

    pub fn employee_id(&self) -> &EmployeeId {
        &self.employee_id
    }
    pub fn reason(&self) -> &WfhReason {
        &self.reason
    }
}
