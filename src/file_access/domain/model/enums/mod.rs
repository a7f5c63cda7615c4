pub mod access_decision_reason;
pub mod file_access_domain_error;
pub mod geofence_enforcement;
pub mod wfh_status;
