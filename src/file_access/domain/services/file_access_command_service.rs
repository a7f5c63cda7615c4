use async_trait::async_trait;

use crate::file_access::domain::model::{
    commands::upsert_geofence_policy_command::UpsertGeofencePolicyCommand,
    enums::file_access_domain_error::FileAccessDomainError,
};

#[async_trait]
pub trait FileAccessCommandService: Send + Sync {
    async fn handle_upsert_geofence_policy(
        &self,
        command: UpsertGeofencePolicyCommand,
    ) -> Result<(), FileAccessDomainError>;
}
