pub mod file_access_rest_controller;
