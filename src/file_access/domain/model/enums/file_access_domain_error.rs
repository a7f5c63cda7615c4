use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileAccessDomainError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("geofence policy is invalid: {0}")]
    InvalidGeofencePolicy(String),

    #[error("work from home directory unavailable: {0}")]
    WfhDirectoryUnavailable(String),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
