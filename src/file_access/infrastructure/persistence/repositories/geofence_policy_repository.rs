use async_trait::async_trait;

use crate::file_access::domain::model::{
    entities::geofence_policy::GeofencePolicy,
    enums::file_access_domain_error::FileAccessDomainError,
};

#[async_trait]
pub trait GeofencePolicyRepository: Send + Sync {
    async fn find_current(&self) -> Result<Option<GeofencePolicy>, FileAccessDomainError>;

    async fn save(&self, policy: &GeofencePolicy) -> Result<(), FileAccessDomainError>;
}
