pub mod postgres;
pub mod wfh_request_repository;
