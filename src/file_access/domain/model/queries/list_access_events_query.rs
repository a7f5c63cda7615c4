use crate::file_access::domain::model::{
    enums::file_access_domain_error::FileAccessDomainError,
    value_objects::employee_id::EmployeeId,
};

#[derive(Clone, Debug)]
pub struct ListAccessEventsQuery {
    employee_id: Option<EmployeeId>,
    limit: u32,
}

impl ListAccessEventsQuery {
    /// A missing limit means `max_limit`; larger limits are clamped to it.
    pub fn new(
        employee_id: Option<String>,
        limit: Option<u32>,
        max_limit: u32,
    ) -> Result<Self, FileAccessDomainError> {
        let employee_id = employee_id
            .filter(|value| !value.trim().is_empty())
            .map(EmployeeId::new)
            .transpose()?;

        let limit = match limit {
            Some(0) => {
                return Err(FileAccessDomainError::InvalidRequest(
                    "limit must be greater than zero".to_string(),
                ));
            }
            Some(limit) => limit.min(max_limit),
            None => max_limit,
        };

        Ok(Self { employee_id, limit })
    }

    pub fn employee_id(&self) -> Option<&EmployeeId> {
        self.employee_id.as_ref()
    }
    pub fn limit(&self) -> u32 {
        self.limit
    }
}
