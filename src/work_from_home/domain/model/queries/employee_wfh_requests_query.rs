use crate::work_from_home::domain::model::{
    enums::work_from_home_domain_error::WorkFromHomeDomainError,
    value_objects::employee_id::EmployeeId,
};

#[derive(Clone, Debug)]
pub struct EmployeeWfhRequestsQuery {
    employee_id: EmployeeId,
}

impl EmployeeWfhRequestsQuery {
    pub fn new(employee_id: String) -> Result<Self, WorkFromHomeDomainError> {
        Ok(Self {
            employee_id: EmployeeId::new(employee_id)?,
        })
    }

    pub fn employee_id(&self) -> &EmployeeId {
        &self.employee_id
    }
}
