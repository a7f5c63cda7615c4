pub mod work_from_home_query_service_impl;
