pub mod employee_id;
pub mod file_id;
pub mod geo_location;
pub mod wifi_ssid;
