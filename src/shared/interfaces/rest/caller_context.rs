use axum::http::{HeaderMap, StatusCode};
use thiserror::Error;

pub const EMPLOYEE_ID_HEADER: &str = "x-employee-id";
pub const EMPLOYEE_ROLE_HEADER: &str = "x-employee-role";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallerRole {
    Admin,
    Employee,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CallerContextError {
    #[error("missing x-employee-id header")]
    MissingEmployeeId,

    #[error("x-employee-role must be 'admin' or 'employee'")]
    InvalidRole,

    #[error("admin role required")]
    AdminRoleRequired,
}

impl CallerContextError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CallerContextError::MissingEmployeeId => StatusCode::UNAUTHORIZED,
            CallerContextError::InvalidRole => StatusCode::BAD_REQUEST,
            CallerContextError::AdminRoleRequired => StatusCode::FORBIDDEN,
        }
    }
}

/// Identity forwarded by the authenticating gateway.
#[derive(Clone, Debug)]
pub struct CallerContext {
    employee_id: String,
    role: CallerRole,
    request_id: Option<String>,
}

impl CallerContext {
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, CallerContextError> {
        let employee_id =
            header_value(headers, EMPLOYEE_ID_HEADER).ok_or(CallerContextError::MissingEmployeeId)?;

        let role = match header_value(headers, EMPLOYEE_ROLE_HEADER) {
            None => CallerRole::Employee,
            Some(role) => match role.to_ascii_lowercase().as_str() {
                "admin" => CallerRole::Admin,
                "employee" => CallerRole::Employee,
                _ => return Err(CallerContextError::InvalidRole),
            },
        };

        Ok(Self {
            employee_id,
            role,
            request_id: header_value(headers, REQUEST_ID_HEADER),
        })
    }

    pub fn require_admin(&self) -> Result<(), CallerContextError> {
        match self.role {
            CallerRole::Admin => Ok(()),
            CallerRole::Employee => Err(CallerContextError::AdminRoleRequired),
        }
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }
    pub fn role(&self) -> CallerRole {
        self.role
    }
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

