use axum::Router;
use dotenvy::dotenv;
use geocrypt_access::{
    config::app_config::AppConfig,
    file_access::{
        build_file_access_router,
        interfaces::rest::resources::{
            access_event_resource::{AccessEventResource, ListAccessEventsQueryResource},
            evaluate_file_access_request_resource::{
                EvaluateFileAccessRequestResource, EvaluateFileAccessResponseResource,
            },
            file_access_error_response_resource::FileAccessErrorResponseResource,
            geofence_policy_resource::GeofencePolicyResource,
        },
    },
    work_from_home::{
        build_work_from_home_router,
        interfaces::rest::resources::{
            review_wfh_request_resource::ReviewWfhRequestResource,
            submit_wfh_request_resource::SubmitWfhRequestResource,
            wfh_request_resource::{WfhRequestResource, WfhStatusResource},
            work_from_home_error_response_resource::WorkFromHomeErrorResponseResource,
        },
    },
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        geocrypt_access::file_access::interfaces::rest::controllers::file_access_rest_controller::evaluate_file_access,
        geocrypt_access::file_access::interfaces::rest::controllers::file_access_rest_controller::list_access_events,
        geocrypt_access::file_access::interfaces::rest::controllers::file_access_rest_controller::get_geofence_policy,
        geocrypt_access::file_access::interfaces::rest::controllers::file_access_rest_controller::upsert_geofence_policy,
        geocrypt_access::work_from_home::interfaces::rest::controllers::work_from_home_rest_controller::submit_wfh_request,
        geocrypt_access::work_from_home::interfaces::rest::controllers::work_from_home_rest_controller::get_wfh_status,
        geocrypt_access::work_from_home::interfaces::rest::controllers::work_from_home_rest_controller::list_wfh_requests,
        geocrypt_access::work_from_home::interfaces::rest::controllers::work_from_home_rest_controller::review_wfh_request
    ),
    components(
        schemas(
            EvaluateFileAccessRequestResource,
            EvaluateFileAccessResponseResource,
            ListAccessEventsQueryResource,
            AccessEventResource,
            GeofencePolicyResource,
            FileAccessErrorResponseResource,
            SubmitWfhRequestResource,
            ReviewWfhRequestResource,
            WfhRequestResource,
            WfhStatusResource,
            WorkFromHomeErrorResponseResource
        )
    ),
    tags(
        (name = "file-access", description = "Location and network gated file access bounded context"),
        (name = "work-from-home", description = "Work from home approval directory bounded context")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geocrypt_access=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().expect("invalid configuration");

    let work_from_home_router = build_work_from_home_router(&config)
        .await
        .expect("failed to build work from home router");
    let file_access_router = build_file_access_router(&config)
        .await
        .expect("failed to build file access router");

    let app = Router::new()
        .merge(work_from_home_router)
        .merge(file_access_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!(%addr, "server listening");
    tracing::info!(
        "swagger ui available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
