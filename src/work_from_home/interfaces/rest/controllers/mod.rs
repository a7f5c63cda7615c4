pub mod work_from_home_rest_controller;
