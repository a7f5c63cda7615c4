pub mod config;
pub mod file_access;
pub mod shared;
pub mod work_from_home;
