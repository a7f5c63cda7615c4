use std::sync::Arc;

use axum::Router;
use sqlx::{PgPool, migrate};

use crate::{
    config::app_config::AppConfig,
    work_from_home::{
        application::{
            command_services::work_from_home_command_service_impl::WorkFromHomeCommandServiceImpl,
            query_services::work_from_home_query_service_impl::WorkFromHomeQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::sqlx_wfh_request_repository_impl::SqlxWfhRequestRepositoryImpl,
        interfaces::rest::controllers::work_from_home_rest_controller::{
            WorkFromHomeRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

/// Also applies the embedded migrations, so it must run before the other
/// routers touch the database.
pub async fn build_work_from_home_router(config: &AppConfig) -> Result<Router, String> {
    let admin_pool = PgPool::connect(&config.admin_database_url())
        .await
        .map_err(|e| e.to_string())?;

    migrate!("./migrations")
        .run(&admin_pool)
        .await
        .map_err(|e| e.to_string())?;

    let wfh_request_repository = Arc::new(SqlxWfhRequestRepositoryImpl::new(admin_pool));

    let command_service = Arc::new(WorkFromHomeCommandServiceImpl::new(
        wfh_request_repository.clone(),
    ));
    let query_service = Arc::new(WorkFromHomeQueryServiceImpl::new(wfh_request_repository));

    Ok(router(WorkFromHomeRestControllerState {
        command_service,
        query_service,
    }))
}
