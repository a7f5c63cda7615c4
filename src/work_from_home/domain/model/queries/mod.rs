pub mod employee_wfh_requests_query;
