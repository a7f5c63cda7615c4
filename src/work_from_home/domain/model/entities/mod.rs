pub mod wfh_request;
