pub mod access_decision;
pub mod access_request;
pub mod geofence_policy;
