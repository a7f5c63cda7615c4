use crate::work_from_home::domain::model::enums::work_from_home_domain_error::WorkFromHomeDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new(value: String) -> Result<Self, WorkFromHomeDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(WorkFromHomeDomainError::InvalidEmployeeId);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
