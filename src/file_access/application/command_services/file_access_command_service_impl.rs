use std::sync::Arc;

use async_trait::async_trait;

use crate::file_access::{
    domain::{
        model::{
            commands::upsert_geofence_policy_command::UpsertGeofencePolicyCommand,
            enums::file_access_domain_error::FileAccessDomainError,
        },
        services::file_access_command_service::FileAccessCommandService,
    },
    infrastructure::persistence::repositories::geofence_policy_repository::GeofencePolicyRepository,
};

pub struct FileAccessCommandServiceImpl {
    geofence_policy_repository: Arc<dyn GeofencePolicyRepository>,
}

impl FileAccessCommandServiceImpl {
    pub fn new(geofence_policy_repository: Arc<dyn GeofencePolicyRepository>) -> Self {
        Self {
            geofence_policy_repository,
        }
    }
}

#[async_trait]
impl FileAccessCommandService for FileAccessCommandServiceImpl {
    async fn handle_upsert_geofence_policy(
        &self,
        command: UpsertGeofencePolicyCommand,
    ) -> Result<(), FileAccessDomainError> {
        let policy = command.policy();
        self.geofence_policy_repository.save(policy).await?;

        tracing::info!(
            latitude = policy.center().latitude(),
            longitude = policy.center().longitude(),
            radius_meters = policy.radius_meters(),
            allowed_ssid = policy.allowed_ssid(),
            start_time = %policy.start_time().format("%H:%M"),
            end_time = %policy.end_time().format("%H:%M"),
            "geofence policy updated"
        );

        Ok(())
    }
}
