pub mod work_from_home_command_service_impl;
