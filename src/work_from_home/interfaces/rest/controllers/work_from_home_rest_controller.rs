use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post, put},
};
use validator::Validate;

use crate::{
    shared::interfaces::rest::caller_context::{CallerContext, CallerContextError},
    work_from_home::{
        domain::{
            model::{
                commands::{
                    review_wfh_request_command::ReviewWfhRequestCommand,
                    submit_wfh_request_command::SubmitWfhRequestCommand,
                },
                entities::wfh_request::WfhRequest,
                enums::work_from_home_domain_error::WorkFromHomeDomainError,
                queries::employee_wfh_requests_query::EmployeeWfhRequestsQuery,
            },
            services::{
                work_from_home_command_service::WorkFromHomeCommandService,
                work_from_home_query_service::WorkFromHomeQueryService,
            },
        },
        interfaces::rest::resources::{
            review_wfh_request_resource::ReviewWfhRequestResource,
            submit_wfh_request_resource::SubmitWfhRequestResource,
            wfh_request_resource::{WfhRequestResource, WfhStatusResource},
            work_from_home_error_response_resource::WorkFromHomeErrorResponseResource,
        },
    },
};

type ErrorResponse = (StatusCode, Json<WorkFromHomeErrorResponseResource>);

#[derive(Clone)]
pub struct WorkFromHomeRestControllerState {
    pub command_service: Arc<dyn WorkFromHomeCommandService>,
    pub query_service: Arc<dyn WorkFromHomeQueryService>,
}

pub fn router(state: WorkFromHomeRestControllerState) -> Router {
    Router::new()
        .route("/api/wfh-requests", post(submit_wfh_request))
        .route("/api/wfh-requests/status", get(get_wfh_status))
        .route("/api/admin/wfh-requests", get(list_wfh_requests))
        .route(
            "/api/admin/wfh-requests/:employee_id",
            put(review_wfh_request),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/wfh-requests",
    tag = "work-from-home",
    params(
        ("x-employee-id" = String, Header, description = "Authenticated employee id")
    ),
    request_body = SubmitWfhRequestResource,
    responses(
        (status = 201, description = "Request submitted", body = WfhRequestResource),
        (status = 400, description = "Invalid request", body = WorkFromHomeErrorResponseResource),
        (status = 401, description = "Missing identity", body = WorkFromHomeErrorResponseResource),
        (status = 409, description = "A request is already pending", body = WorkFromHomeErrorResponseResource)
    )
)]
pub async fn submit_wfh_request(
    State(state): State<WorkFromHomeRestControllerState>,
    headers: HeaderMap,
    Json(request): Json<SubmitWfhRequestResource>,
) -> Result<(StatusCode, Json<WfhRequestResource>), ErrorResponse> {
    let caller = CallerContext::from_headers(&headers).map_err(map_caller_error)?;

    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(WorkFromHomeErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let command = SubmitWfhRequestCommand::new(caller.employee_id().to_string(), request.reason)
        .map_err(map_domain_error)?;

    let created = state
        .command_service
        .handle_submit(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(to_resource(&created))))
}

#[utoipa::path(
    get,
    path = "/api/wfh-requests/status",
    tag = "work-from-home",
    params(
        ("x-employee-id" = String, Header, description = "Authenticated employee id")
    ),
    responses(
        (status = 200, description = "Latest request of the caller", body = WfhStatusResource),
        (status = 401, description = "Missing identity", body = WorkFromHomeErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = WorkFromHomeErrorResponseResource)
    )
)]
pub async fn get_wfh_status(
    State(state): State<WorkFromHomeRestControllerState>,
    headers: HeaderMap,
) -> Result<Json<WfhStatusResource>, ErrorResponse> {
    let caller = CallerContext::from_headers(&headers).map_err(map_caller_error)?;

    let query = EmployeeWfhRequestsQuery::new(caller.employee_id().to_string())
        .map_err(map_domain_error)?;

    let latest = state
        .query_service
        .handle_get_latest(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(match latest {
        Some(request) => WfhStatusResource {
            status: request.status().as_str().to_string(),
            request: Some(to_resource(&request)),
        },
        None => WfhStatusResource {
            status: "none".to_string(),
            request: None,
        },
    }))
}

#[utoipa::path(
    get,
    path = "/api/admin/wfh-requests",
    tag = "work-from-home",
    params(
        ("x-employee-id" = String, Header, description = "Authenticated employee id"),
        ("x-employee-role" = String, Header, description = "Must be admin")
    ),
    responses(
        (status = 200, description = "All requests, newest first", body = [WfhRequestResource]),
        (status = 401, description = "Missing identity", body = WorkFromHomeErrorResponseResource),
        (status = 403, description = "Admin role required", body = WorkFromHomeErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = WorkFromHomeErrorResponseResource)
    )
)]
pub async fn list_wfh_requests(
    State(state): State<WorkFromHomeRestControllerState>,
    headers: HeaderMap,
) -> Result<Json<Vec<WfhRequestResource>>, ErrorResponse> {
    let caller = CallerContext::from_headers(&headers).map_err(map_caller_error)?;
    caller.require_admin().map_err(map_caller_error)?;

    let requests = state
        .query_service
        .handle_list_all()
        .await
        .map_err(map_domain_error)?;

    Ok(Json(requests.iter().map(to_resource).collect()))
}

#[utoipa::path(
    put,
    path = "/api/admin/wfh-requests/{employee_id}",
    tag = "work-from-home",
    params(
        ("employee_id" = String, Path, description = "Employee whose pending request is reviewed"),
        ("x-employee-id" = String, Header, description = "Authenticated employee id"),
        ("x-employee-role" = String, Header, description = "Must be admin")
    ),
    request_body = ReviewWfhRequestResource,
    responses(
        (status = 200, description = "Request reviewed", body = WfhRequestResource),
        (status = 400, description = "Invalid request", body = WorkFromHomeErrorResponseResource),
        (status = 401, description = "Missing identity", body = WorkFromHomeErrorResponseResource),
        (status = 403, description = "Admin role required", body = WorkFromHomeErrorResponseResource),
        (status = 404, description = "No pending request", body = WorkFromHomeErrorResponseResource)
    )
)]
pub async fn review_wfh_request(
    State(state): State<WorkFromHomeRestControllerState>,
    headers: HeaderMap,
    Path(employee_id): Path<String>,
    Json(request): Json<ReviewWfhRequestResource>,
) -> Result<Json<WfhRequestResource>, ErrorResponse> {
    let caller = CallerContext::from_headers(&headers).map_err(map_caller_error)?;
    caller.require_admin().map_err(map_caller_error)?;

    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(WorkFromHomeErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let command = ReviewWfhRequestCommand::new(employee_id, &request.status, request.comment)
        .map_err(map_domain_error)?;

    let reviewed = state
        .command_service
        .handle_review(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_resource(&reviewed)))
}

fn to_resource(request: &WfhRequest) -> WfhRequestResource {
    WfhRequestResource {
        request_id: request.request_id().to_string(),
        employee_id: request.employee_id().value().to_string(),
        reason: request.reason().value().to_string(),
        status: request.status().as_str().to_string(),
        requested_at: request.requested_at().to_rfc3339(),
        reviewed_at: request.reviewed_at().map(|at| at.to_rfc3339()),
        admin_comment: request.admin_comment().map(str::to_string),
    }
}

fn map_caller_error(error: CallerContextError) -> ErrorResponse {
    (
        error.status_code(),
        Json(WorkFromHomeErrorResponseResource {
            message: error.to_string(),
        }),
    )
}

fn map_domain_error(error: WorkFromHomeDomainError) -> ErrorResponse {
    let status = match error {
        WorkFromHomeDomainError::InvalidEmployeeId
        | WorkFromHomeDomainError::InvalidReason
        | WorkFromHomeDomainError::InvalidReviewDecision => StatusCode::BAD_REQUEST,
        WorkFromHomeDomainError::PendingRequestExists
        | WorkFromHomeDomainError::InvalidStatusTransition => StatusCode::CONFLICT,
        WorkFromHomeDomainError::PendingRequestNotFound => StatusCode::NOT_FOUND,
        WorkFromHomeDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(WorkFromHomeErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
