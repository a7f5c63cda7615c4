pub mod file_access_audit_repository;
pub mod geofence_policy_repository;
pub mod postgres;
