pub mod file_access_command_service_impl;
