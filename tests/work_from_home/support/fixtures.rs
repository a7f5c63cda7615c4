use geocrypt_access::work_from_home::domain::model::commands::{
    review_wfh_request_command::ReviewWfhRequestCommand,
    submit_wfh_request_command::SubmitWfhRequestCommand,
};

pub const EMPLOYEE_ID: &str = "emp-001";
pub const OTHER_EMPLOYEE_ID: &str = "emp-002";

pub fn submit_command(employee_id: &str) -> SubmitWfhRequestCommand {
    SubmitWfhRequestCommand::new(
        employee_id.to_string(),
        "Plumber visit in the morning".to_string(),
    )
    .expect("valid submit command")
}

pub fn review_command(employee_id: &str, status: &str) -> ReviewWfhRequestCommand {
    ReviewWfhRequestCommand::new(
        employee_id.to_string(),
        status,
        Some("  ok for this week  ".to_string()),
    )
    .expect("valid review command")
}
