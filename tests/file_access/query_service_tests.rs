use chrono::NaiveTime;
use geocrypt_access::file_access::domain::{
    model::{
        entities::geofence_policy::{GeofencePolicy, GeofencePolicyParts},
        enums::{
            access_decision_reason::AccessDecisionReason,
            file_access_domain_error::FileAccessDomainError,
            geofence_enforcement::GeofenceEnforcement, wfh_status::WfhStatus,
        },
        events::file_access_audited_event::FileAccessAuditedEvent,
        queries::{
            evaluate_file_access_query::{EvaluateFileAccessQuery, EvaluateFileAccessQueryParts},
            list_access_events_query::ListAccessEventsQuery,
        },
    },
    services::file_access_query_service::FileAccessQueryService,
};
use uuid::Uuid;

use crate::support::{
    EMPLOYEE_ID, FILE_ID, OFFICE_LATITUDE, OFFICE_LONGITUDE, OFFICE_SSID, create_query_harness,
    evaluate_query, evaluate_query_inside_office, utc_at,
};

fn all_day_policy() -> GeofencePolicy {
    GeofencePolicy::new(GeofencePolicyParts {
        latitude: OFFICE_LATITUDE,
        longitude: OFFICE_LONGITUDE,
        radius_meters: 250.0,
        allowed_ssid: OFFICE_SSID.to_string(),
        start_time: NaiveTime::from_hms_opt(0, 0, 0).expect("time"),
        end_time: NaiveTime::from_hms_opt(23, 59, 0).expect("time"),
    })
    .expect("valid policy")
}

fn audited_event(employee_id: &str, hour: u32) -> FileAccessAuditedEvent {
    FileAccessAuditedEvent {
        event_id: Uuid::now_v7(),
        employee_id: employee_id.to_string(),
        file_id: FILE_ID.to_string(),
        request_id: None,
        latitude: None,
        longitude: None,
        wifi_ssid: None,
        wfh_status: WfhStatus::None,
        allowed: false,
        reason: AccessDecisionReason::LocationMissing,
        occurred_at: utc_at(hour, 0, 0),
    }
}

#[tokio::test]
async fn evaluate_allows_when_location_and_wifi_are_claimed() {
    let harness = create_query_harness(GeofenceEnforcement::PresenceOnly);

    let decision = harness
        .service
        .handle_evaluate_file_access(evaluate_query(Some((48.85, 2.35)), Some("HomeNet")))
        .await
        .expect("decision");

    assert!(decision.allowed());
    assert_eq!(harness.wfh_directory.lookups(), vec![EMPLOYEE_ID.to_string()]);
}

#[tokio::test]
async fn evaluate_appends_one_audit_event_per_decision() {
    let harness = create_query_harness(GeofenceEnforcement::PresenceOnly);

    let decision = harness
        .service
        .handle_evaluate_file_access(evaluate_query(None, Some("HomeNet")))
        .await
        .expect("decision");

    assert_eq!(decision.reason(), AccessDecisionReason::LocationMissing);
    assert_eq!(harness.audit_repository.append_calls(), 1);

    let events = harness.audit_repository.events();
    let event = events.first().expect("audited event");
    assert_eq!(event.employee_id, EMPLOYEE_ID);
    assert_eq!(event.file_id, FILE_ID);
    assert_eq!(event.request_id.as_deref(), Some("req-fixture"));
    assert_eq!(event.wifi_ssid.as_deref(), Some("HomeNet"));
    assert_eq!(event.latitude, None);
    assert!(!event.allowed);
    assert_eq!(event.reason, AccessDecisionReason::LocationMissing);
    assert_eq!(event.occurred_at, decision.evaluated_at());
}

#[tokio::test]
async fn evaluate_returns_decision_when_audit_fails() {
    let harness = create_query_harness(GeofenceEnforcement::PresenceOnly);
    harness.audit_repository.fail_appends();

    let decision = harness
        .service
        .handle_evaluate_file_access(evaluate_query(Some((1.0, 2.0)), None))
        .await
        .expect("decision despite audit failure");

    assert_eq!(decision.reason(), AccessDecisionReason::WifiMissing);
    assert_eq!(harness.audit_repository.append_calls(), 1);
    assert!(harness.audit_repository.events().is_empty());
}

#[tokio::test]
async fn evaluate_grants_approved_wfh_and_records_status() {
    let harness = create_query_harness(GeofenceEnforcement::Strict);
    harness.wfh_directory.set_status(WfhStatus::Approved);

    let decision = harness
        .service
        .handle_evaluate_file_access(evaluate_query(None, None))
        .await
        .expect("decision");

    assert!(decision.allowed());
    let events = harness.audit_repository.events();
    assert_eq!(events[0].wfh_status, WfhStatus::Approved);
}

#[tokio::test]
async fn evaluate_treats_unknown_employee_as_no_wfh() {
    let harness = create_query_harness(GeofenceEnforcement::PresenceOnly);
    harness.wfh_directory.set_not_found();

    let decision = harness
        .service
        .handle_evaluate_file_access(evaluate_query(None, None))
        .await
        .expect("decision");

    assert_eq!(decision.reason(), AccessDecisionReason::LocationMissing);
    assert_eq!(harness.audit_repository.events()[0].wfh_status, WfhStatus::None);
}

#[tokio::test]
async fn evaluate_fails_without_decision_when_directory_is_unavailable() {
    let harness = create_query_harness(GeofenceEnforcement::PresenceOnly);
    harness.wfh_directory.set_unavailable("connection refused");

    let result = harness
        .service
        .handle_evaluate_file_access(evaluate_query_inside_office())
        .await;

    assert!(matches!(
        result,
        Err(FileAccessDomainError::WfhDirectoryUnavailable(_))
    ));
    assert_eq!(harness.audit_repository.append_calls(), 0);
}

#[tokio::test]
async fn strict_evaluation_uses_stored_policy() {
    let harness = create_query_harness(GeofenceEnforcement::Strict);
    harness.geofence_policy_repository.set_current(all_day_policy());

    let inside = harness
        .service
        .handle_evaluate_file_access(evaluate_query_inside_office())
        .await
        .expect("decision");
    let wrong_wifi = harness
        .service
        .handle_evaluate_file_access(evaluate_query(
            Some((OFFICE_LATITUDE, OFFICE_LONGITUDE)),
            Some("GuestWiFi"),
        ))
        .await
        .expect("decision");
    let far_away = harness
        .service
        .handle_evaluate_file_access(evaluate_query(Some((0.0, 0.0)), Some(OFFICE_SSID)))
        .await
        .expect("decision");

    assert!(inside.allowed());
    assert_eq!(wrong_wifi.reason(), AccessDecisionReason::UnauthorizedWifi);
    assert_eq!(far_away.reason(), AccessDecisionReason::OutsideGeofence);
    assert_eq!(harness.audit_repository.append_calls(), 3);
}

#[tokio::test]
async fn strict_approved_wfh_does_not_need_policy_store() {
    let harness = create_query_harness(GeofenceEnforcement::Strict);
    harness.wfh_directory.set_status(WfhStatus::Approved);
    harness.geofence_policy_repository.fail_reads();

    let decision = harness
        .service
        .handle_evaluate_file_access(evaluate_query(None, None))
        .await
        .expect("approved employee is decided without the policy");

    assert!(decision.allowed());
    assert_eq!(harness.geofence_policy_repository.find_calls(), 0);
    assert_eq!(harness.audit_repository.append_calls(), 1);
}

#[tokio::test]
async fn strict_presence_denials_do_not_need_policy_store() {
    let harness = create_query_harness(GeofenceEnforcement::Strict);
    harness.geofence_policy_repository.fail_reads();

    let no_location = harness
        .service
        .handle_evaluate_file_access(evaluate_query(None, Some(OFFICE_SSID)))
        .await
        .expect("decision");
    let no_wifi = harness
        .service
        .handle_evaluate_file_access(evaluate_query(Some((OFFICE_LATITUDE, OFFICE_LONGITUDE)), None))
        .await
        .expect("decision");

    assert_eq!(no_location.reason(), AccessDecisionReason::LocationMissing);
    assert_eq!(no_wifi.reason(), AccessDecisionReason::WifiMissing);
    assert_eq!(harness.geofence_policy_repository.find_calls(), 0);
}

#[tokio::test]
async fn strict_full_claims_fail_when_policy_store_is_down() {
    let harness = create_query_harness(GeofenceEnforcement::Strict);
    harness.geofence_policy_repository.fail_reads();

    let result = harness
        .service
        .handle_evaluate_file_access(evaluate_query_inside_office())
        .await;

    assert!(matches!(
        result,
        Err(FileAccessDomainError::InfrastructureError(_))
    ));
    assert_eq!(harness.geofence_policy_repository.find_calls(), 1);
}

#[tokio::test]
async fn evaluate_returns_decision_when_audit_hangs() {
    let harness = create_query_harness(GeofenceEnforcement::PresenceOnly);
    harness.audit_repository.hang_appends();

    let decision = tokio::time::timeout(
        std::time::Duration::from_secs(5),
        harness
            .service
            .handle_evaluate_file_access(evaluate_query_inside_office()),
    )
    .await
    .expect("decision is not held up by the audit store")
    .expect("decision");

    assert!(decision.allowed());
    assert_eq!(harness.audit_repository.append_calls(), 1);
    assert!(harness.audit_repository.events().is_empty());
}

#[tokio::test]
async fn get_geofence_policy_falls_back_to_office_default() {
    let harness = create_query_harness(GeofenceEnforcement::PresenceOnly);

    let policy = harness
        .service
        .handle_get_geofence_policy()
        .await
        .expect("policy");

    assert_eq!(policy, GeofencePolicy::office_default());
    assert_eq!(policy.allowed_ssid(), OFFICE_SSID);
}

#[tokio::test]
async fn list_access_events_filters_and_orders_newest_first() {
    let harness = create_query_harness(GeofenceEnforcement::PresenceOnly);
    harness.audit_repository.seed(audited_event(EMPLOYEE_ID, 8));
    harness.audit_repository.seed(audited_event("emp-002", 9));
    harness.audit_repository.seed(audited_event(EMPLOYEE_ID, 11));
    harness.audit_repository.seed(audited_event(EMPLOYEE_ID, 10));

    let query = ListAccessEventsQuery::new(Some(EMPLOYEE_ID.to_string()), Some(2), 1000)
        .expect("query");
    let events = harness
        .service
        .handle_list_access_events(query)
        .await
        .expect("events");

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].occurred_at, utc_at(11, 0, 0));
    assert_eq!(events[1].occurred_at, utc_at(10, 0, 0));
}

#[test]
fn list_access_events_query_clamps_limit() {
    let defaulted = ListAccessEventsQuery::new(None, None, 1000).expect("query");
    let clamped = ListAccessEventsQuery::new(Some("  ".to_string()), Some(5000), 1000)
        .expect("query");

    assert_eq!(defaulted.limit(), 1000);
    assert_eq!(clamped.limit(), 1000);
    assert!(clamped.employee_id().is_none());
    assert!(ListAccessEventsQuery::new(None, Some(0), 1000).is_err());
}

#[test]
fn query_rejects_blank_identifiers() {
    for (employee_id, file_id) in [("", FILE_ID), ("   ", FILE_ID), (EMPLOYEE_ID, "")] {
        let result = EvaluateFileAccessQuery::new(EvaluateFileAccessQueryParts {
            employee_id: employee_id.to_string(),
            file_id: file_id.to_string(),
            latitude: Some(OFFICE_LATITUDE),
            longitude: Some(OFFICE_LONGITUDE),
            wifi_ssid: Some(OFFICE_SSID.to_string()),
            request_id: None,
        });

        assert!(matches!(result, Err(FileAccessDomainError::InvalidRequest(_))));
    }
}

#[test]
fn query_rejects_partial_or_out_of_range_location() {
    for (latitude, longitude) in [
        (Some(10.0), None),
        (None, Some(76.0)),
        (Some(91.0), Some(0.0)),
        (Some(0.0), Some(f64::NAN)),
    ] {
        let result = EvaluateFileAccessQuery::new(EvaluateFileAccessQueryParts {
            employee_id: EMPLOYEE_ID.to_string(),
            file_id: FILE_ID.to_string(),
            latitude,
            longitude,
            wifi_ssid: None,
            request_id: None,
        });

        assert!(matches!(result, Err(FileAccessDomainError::InvalidRequest(_))));
    }
}
