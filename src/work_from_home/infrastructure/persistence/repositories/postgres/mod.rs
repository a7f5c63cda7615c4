pub mod sqlx_wfh_request_repository_impl;
