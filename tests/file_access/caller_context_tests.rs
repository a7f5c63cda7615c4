use axum::http::{HeaderMap, HeaderValue, StatusCode};
use geocrypt_access::shared::interfaces::rest::caller_context::{
    CallerContext, CallerContextError, CallerRole, EMPLOYEE_ID_HEADER, EMPLOYEE_ROLE_HEADER,
    REQUEST_ID_HEADER,
};

fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for &(name, value) in pairs {
        headers.insert(name, HeaderValue::from_static(value));
    }
    headers
}

#[test]
fn defaults_to_employee_role() {
    let caller =
        CallerContext::from_headers(&headers(&[(EMPLOYEE_ID_HEADER, "emp-1")])).expect("caller");

    assert_eq!(caller.employee_id(), "emp-1");
    assert_eq!(caller.role(), CallerRole::Employee);
    assert_eq!(caller.request_id(), None);
    assert_eq!(
        caller.require_admin(),
        Err(CallerContextError::AdminRoleRequired)
    );
}

#[test]
fn blank_employee_id_is_missing_identity() {
    let error = CallerContext::from_headers(&headers(&[(EMPLOYEE_ID_HEADER, "  ")]))
        .expect_err("should fail");

    assert_eq!(error, CallerContextError::MissingEmployeeId);
    assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
}

#[test]
fn parses_admin_role_and_request_id() {
    let caller = CallerContext::from_headers(&headers(&[
        (EMPLOYEE_ID_HEADER, "adm-1"),
        (EMPLOYEE_ROLE_HEADER, "Admin"),
        (REQUEST_ID_HEADER, "req-9"),
    ]))
    .expect("caller");

    assert!(caller.require_admin().is_ok());
    assert_eq!(caller.request_id(), Some("req-9"));
}

#[test]
fn rejects_unknown_role() {
    let error = CallerContext::from_headers(&headers(&[
        (EMPLOYEE_ID_HEADER, "emp-1"),
        (EMPLOYEE_ROLE_HEADER, "root"),
    ]))
    .expect_err("should fail");

    assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
}
