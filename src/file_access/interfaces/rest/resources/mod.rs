pub mod access_event_resource;
pub mod evaluate_file_access_request_resource;
pub mod file_access_error_response_resource;
pub mod geofence_policy_resource;
