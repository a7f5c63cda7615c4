pub mod upsert_geofence_policy_command;
