pub mod sqlx_file_access_audit_repository_impl;
pub mod sqlx_geofence_policy_repository_impl;
