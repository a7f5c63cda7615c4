pub mod employee_id;
pub mod wfh_reason;
