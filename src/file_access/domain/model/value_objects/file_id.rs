use crate::file_access::domain::model::enums::file_access_domain_error::FileAccessDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct FileId(String);

impl FileId {
    pub fn new(value: String) -> Result<Self, FileAccessDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(FileAccessDomainError::InvalidRequest(
                "file_id is required".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
