pub mod work_from_home_facade;
