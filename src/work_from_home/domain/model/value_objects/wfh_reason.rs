use crate::work_from_home::domain::model::enums::work_from_home_domain_error::WorkFromHomeDomainError;

const MAX_REASON_CHARS: usize = 1000;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WfhReason(String);

impl WfhReason {
    pub fn new(value: String) -> Result<Self, WorkFromHomeDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.chars().count() > MAX_REASON_CHARS {
            return Err(WorkFromHomeDomainError::InvalidReason);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
