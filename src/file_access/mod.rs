use std::sync::Arc;

use axum::Router;
use chrono::FixedOffset;
use sqlx::PgPool;

use crate::{
    config::app_config::AppConfig,
    file_access::{
        application::{
            acl::wfh_directory_facade_real_impl::WfhDirectoryFacadeRealImpl,
            command_services::file_access_command_service_impl::FileAccessCommandServiceImpl,
            query_services::file_access_query_service_impl::FileAccessQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::{
            sqlx_file_access_audit_repository_impl::SqlxFileAccessAuditRepositoryImpl,
            sqlx_geofence_policy_repository_impl::SqlxGeofencePolicyRepositoryImpl,
        },
        interfaces::rest::controllers::file_access_rest_controller::{
            FileAccessRestControllerState, router,
        },
    },
    work_from_home::{
        application::{
            acl::work_from_home_facade_impl::WorkFromHomeFacadeImpl,
            query_services::work_from_home_query_service_impl::WorkFromHomeQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::sqlx_wfh_request_repository_impl::SqlxWfhRequestRepositoryImpl,
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_file_access_router(config: &AppConfig) -> Result<Router, String> {
    let admin_pool = PgPool::connect(&config.admin_database_url())
        .await
        .map_err(|e| e.to_string())?;

    let office_offset = FixedOffset::east_opt(config.office_utc_offset_minutes * 60)
        .ok_or_else(|| "OFFICE_UTC_OFFSET_MINUTES is out of range".to_string())?;

    let wfh_request_repository = Arc::new(SqlxWfhRequestRepositoryImpl::new(admin_pool.clone()));
    let wfh_query_service = Arc::new(WorkFromHomeQueryServiceImpl::new(wfh_request_repository));
    let wfh_directory = Arc::new(WfhDirectoryFacadeRealImpl::new(Arc::new(
        WorkFromHomeFacadeImpl::new(wfh_query_service),
    )));

    let audit_repository = Arc::new(SqlxFileAccessAuditRepositoryImpl::new(admin_pool.clone()));
    let geofence_policy_repository = Arc::new(SqlxGeofencePolicyRepositoryImpl::new(admin_pool));

    let command_service = Arc::new(FileAccessCommandServiceImpl::new(
        geofence_policy_repository.clone(),
    ));
    let query_service = Arc::new(FileAccessQueryServiceImpl::new_with_enforcement(
        wfh_directory,
        audit_repository,
        geofence_policy_repository,
        config.geofence_enforcement,
        office_offset,
    ));

    tracing::info!(
        enforcement = config.geofence_enforcement.as_str(),
        office_utc_offset_minutes = config.office_utc_offset_minutes,
        "file access context ready"
    );

    Ok(router(FileAccessRestControllerState {
        command_service,
        query_service,
        access_log_max_limit: config.access_log_max_limit,
    }))
}
