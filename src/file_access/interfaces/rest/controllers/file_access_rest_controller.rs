use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use validator::Validate;

use crate::{
    file_access::{
        domain::{
            model::{
                commands::upsert_geofence_policy_command::{
                    UpsertGeofencePolicyCommand, UpsertGeofencePolicyCommandParts,
                },
                entities::geofence_policy::GeofencePolicy,
                enums::file_access_domain_error::FileAccessDomainError,
                events::file_access_audited_event::FileAccessAuditedEvent,
                queries::{
                    evaluate_file_access_query::{
                        EvaluateFileAccessQuery, EvaluateFileAccessQueryParts,
                    },
                    list_access_events_query::ListAccessEventsQuery,
                },
            },
            services::{
                file_access_command_service::FileAccessCommandService,
                file_access_query_service::FileAccessQueryService,
            },
        },
        interfaces::rest::resources::{
            access_event_resource::{AccessEventResource, ListAccessEventsQueryResource},
            evaluate_file_access_request_resource::{
                EvaluateFileAccessRequestResource, EvaluateFileAccessResponseResource,
            },
            file_access_error_response_resource::FileAccessErrorResponseResource,
            geofence_policy_resource::GeofencePolicyResource,
        },
    },
    shared::interfaces::rest::caller_context::{CallerContext, CallerContextError},
};

type ErrorResponse = (StatusCode, Json<FileAccessErrorResponseResource>);

#[derive(Clone)]
pub struct FileAccessRestControllerState {
    pub command_service: Arc<dyn FileAccessCommandService>,
    pub query_service: Arc<dyn FileAccessQueryService>,
    pub access_log_max_limit: u32,
}

pub fn router(state: FileAccessRestControllerState) -> Router {
    Router::new()
        .route("/api/files/access/evaluate", post(evaluate_file_access))
        .route("/api/admin/access-logs", get(list_access_events))
        .route(
            "/api/admin/geofence-policy",
            get(get_geofence_policy).put(upsert_geofence_policy),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/files/access/evaluate",
    tag = "file-access",
    params(
        ("x-employee-id" = String, Header, description = "Authenticated employee id"),
        ("x-request-id" = Option<String>, Header, description = "Optional correlation id")
    ),
    request_body = EvaluateFileAccessRequestResource,
    responses(
        (status = 200, description = "Access decision", body = EvaluateFileAccessResponseResource),
        (status = 400, description = "Invalid request", body = FileAccessErrorResponseResource),
        (status = 401, description = "Missing identity", body = FileAccessErrorResponseResource),
        (status = 503, description = "Work from home directory unavailable", body = FileAccessErrorResponseResource)
    )
)]
pub async fn evaluate_file_access(
    State(state): State<FileAccessRestControllerState>,
    headers: HeaderMap,
    Json(request): Json<EvaluateFileAccessRequestResource>,
) -> Result<Json<EvaluateFileAccessResponseResource>, ErrorResponse> {
    let caller = CallerContext::from_headers(&headers).map_err(map_caller_error)?;

    if let Err(validation_error) = request.validate() {
        tracing::info!(
            employee_id = caller.employee_id(),
            error = %validation_error,
            "file access request rejected"
        );
        return Err(bad_request(validation_error.to_string()));
    }

    let query = EvaluateFileAccessQuery::new(EvaluateFileAccessQueryParts {
        employee_id: caller.employee_id().to_string(),
        file_id: request.file_id,
        latitude: request.latitude,
        longitude: request.longitude,
        wifi_ssid: request.wifi_ssid,
        request_id: caller.request_id().map(str::to_string),
    })
    .map_err(|error| {
        tracing::info!(
            employee_id = caller.employee_id(),
            error = %error,
            "file access request rejected"
        );
        map_domain_error(error)
    })?;

    let decision = state
        .query_service
        .handle_evaluate_file_access(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(EvaluateFileAccessResponseResource {
        allowed: decision.allowed(),
        reason: decision.reason().as_str().to_string(),
        message: decision.reason().user_message().to_string(),
        evaluated_at: decision.evaluated_at().to_rfc3339(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/admin/access-logs",
    tag = "file-access",
    params(
        ("x-employee-id" = String, Header, description = "Authenticated employee id"),
        ("x-employee-role" = String, Header, description = "Must be admin"),
        ("employee_id" = Option<String>, Query, description = "Only events of this employee"),
        ("limit" = Option<u32>, Query, description = "Maximum events returned")
    ),
    responses(
        (status = 200, description = "Access events, newest first", body = [AccessEventResource]),
        (status = 400, description = "Invalid request", body = FileAccessErrorResponseResource),
        (status = 401, description = "Missing identity", body = FileAccessErrorResponseResource),
        (status = 403, description = "Admin role required", body = FileAccessErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = FileAccessErrorResponseResource)
    )
)]
pub async fn list_access_events(
    State(state): State<FileAccessRestControllerState>,
    headers: HeaderMap,
    Query(params): Query<ListAccessEventsQueryResource>,
) -> Result<Json<Vec<AccessEventResource>>, ErrorResponse> {
    require_admin(&headers)?;

    let query = ListAccessEventsQuery::new(
        params.employee_id,
        params.limit,
        state.access_log_max_limit,
    )
    .map_err(map_domain_error)?;

    let events = state
        .query_service
        .handle_list_access_events(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(events.into_iter().map(to_access_event_resource).collect()))
}

#[utoipa::path(
    get,
    path = "/api/admin/geofence-policy",
    tag = "file-access",
    params(
        ("x-employee-id" = String, Header, description = "Authenticated employee id"),
        ("x-employee-role" = String, Header, description = "Must be admin")
    ),
    responses(
        (status = 200, description = "Geofence policy in force", body = GeofencePolicyResource),
        (status = 401, description = "Missing identity", body = FileAccessErrorResponseResource),
        (status = 403, description = "Admin role required", body = FileAccessErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = FileAccessErrorResponseResource)
    )
)]
pub async fn get_geofence_policy(
    State(state): State<FileAccessRestControllerState>,
    headers: HeaderMap,
) -> Result<Json<GeofencePolicyResource>, ErrorResponse> {
    require_admin(&headers)?;

    let policy = state
        .query_service
        .handle_get_geofence_policy()
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_geofence_policy_resource(&policy)))
}

#[utoipa::path(
    put,
    path = "/api/admin/geofence-policy",
    tag = "file-access",
    params(
        ("x-employee-id" = String, Header, description = "Authenticated employee id"),
        ("x-employee-role" = String, Header, description = "Must be admin")
    ),
    request_body = GeofencePolicyResource,
    responses(
        (status = 204, description = "Geofence policy replaced"),
        (status = 400, description = "Invalid policy", body = FileAccessErrorResponseResource),
        (status = 401, description = "Missing identity", body = FileAccessErrorResponseResource),
        (status = 403, description = "Admin role required", body = FileAccessErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = FileAccessErrorResponseResource)
    )
)]
pub async fn upsert_geofence_policy(
    State(state): State<FileAccessRestControllerState>,
    headers: HeaderMap,
    Json(request): Json<GeofencePolicyResource>,
) -> Result<StatusCode, ErrorResponse> {
    require_admin(&headers)?;

    if let Err(validation_error) = request.validate() {
        return Err(bad_request(validation_error.to_string()));
    }

    let command = UpsertGeofencePolicyCommand::new(UpsertGeofencePolicyCommandParts {
        latitude: request.latitude,
        longitude: request.longitude,
        radius_meters: request.radius_meters,
        allowed_ssid: request.allowed_ssid,
        start_time: request.start_time,
        end_time: request.end_time,
    })
    .map_err(map_domain_error)?;

    state
        .command_service
        .handle_upsert_geofence_policy(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

fn require_admin(headers: &HeaderMap) -> Result<CallerContext, ErrorResponse> {
    let caller = CallerContext::from_headers(headers).map_err(map_caller_error)?;
    caller.require_admin().map_err(map_caller_error)?;
    Ok(caller)
}

fn to_access_event_resource(event: FileAccessAuditedEvent) -> AccessEventResource {
    AccessEventResource {
        event_id: event.event_id.to_string(),
        employee_id: event.employee_id,
        file_id: event.file_id,
        request_id: event.request_id,
        latitude: event.latitude,
        longitude: event.longitude,
        wifi_ssid: event.wifi_ssid,
        wfh_status: event.wfh_status.as_str().to_string(),
        allowed: event.allowed,
        reason: event.reason.as_str().to_string(),
        occurred_at: event.occurred_at.to_rfc3339(),
    }
}

fn to_geofence_policy_resource(policy: &GeofencePolicy) -> GeofencePolicyResource {
    GeofencePolicyResource {
        latitude: policy.center().latitude(),
        longitude: policy.center().longitude(),
        radius_meters: policy.radius_meters(),
        allowed_ssid: policy.allowed_ssid().to_string(),
        start_time: policy.start_time().format("%H:%M").to_string(),
        end_time: policy.end_time().format("%H:%M").to_string(),
    }
}

fn bad_request(message: String) -> ErrorResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(FileAccessErrorResponseResource { message }),
    )
}

fn map_caller_error(error: CallerContextError) -> ErrorResponse {
    (
        error.status_code(),
        Json(FileAccessErrorResponseResource {
            message: error.to_string(),
        }),
    )
}

fn map_domain_error(error: FileAccessDomainError) -> ErrorResponse {
    let status = match error {
        FileAccessDomainError::InvalidRequest(_)
        | FileAccessDomainError::InvalidGeofencePolicy(_) => StatusCode::BAD_REQUEST,
        FileAccessDomainError::WfhDirectoryUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        FileAccessDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(FileAccessErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
