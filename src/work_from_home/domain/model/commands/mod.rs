pub mod review_wfh_request_command;
pub mod submit_wfh_request_command;
