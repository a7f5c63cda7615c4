pub mod access_policy_evaluator;
pub mod file_access_command_service;
pub mod file_access_query_service;
