pub mod wfh_approval_state;
pub mod wfh_request_status;
pub mod wfh_review_decision;
pub mod work_from_home_domain_error;
