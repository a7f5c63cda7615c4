pub mod file_access_query_service_impl;
