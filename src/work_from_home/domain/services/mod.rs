pub mod work_from_home_command_service;
pub mod work_from_home_query_service;
