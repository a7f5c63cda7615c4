pub mod review_wfh_request_resource;
pub mod submit_wfh_request_resource;
pub mod wfh_request_resource;
pub mod work_from_home_error_response_resource;
