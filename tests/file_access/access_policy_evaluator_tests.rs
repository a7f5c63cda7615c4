use chrono::{FixedOffset, NaiveTime};
use geocrypt_access::file_access::domain::{
    model::{
        entities::geofence_policy::{GeofencePolicy, GeofencePolicyParts},
        enums::{access_decision_reason::AccessDecisionReason, wfh_status::WfhStatus},
    },
    services::access_policy_evaluator::AccessPolicyEvaluator,
};

use crate::support::{
    OFFICE_LATITUDE, OFFICE_LONGITUDE, OFFICE_SSID, access_request, access_request_at,
    office_policy, utc_at,
};

const INSIDE: Option<(f64, f64)> = Some((OFFICE_LATITUDE, OFFICE_LONGITUDE));
// Roughly 2.2 km north of the office centre.
const OUTSIDE: Option<(f64, f64)> = Some((OFFICE_LATITUDE + 0.02, OFFICE_LONGITUDE));

fn strict_utc() -> AccessPolicyEvaluator {
    AccessPolicyEvaluator::strict(office_policy(), FixedOffset::east_opt(0).expect("offset"))
}

#[test]
fn approved_wfh_allows_without_any_claims() {
    let evaluator = AccessPolicyEvaluator::presence_only();

    for (location, ssid) in [
        (None, None),
        (None, Some("HomeNet")),
        (INSIDE, None),
        (INSIDE, Some("")),
    ] {
        let decision = evaluator.evaluate(&access_request(location, ssid), WfhStatus::Approved);
        assert!(decision.allowed());
        assert_eq!(decision.reason(), AccessDecisionReason::None);
    }
}

#[test]
fn missing_location_denies_regardless_of_wifi() {
    let evaluator = AccessPolicyEvaluator::presence_only();

    for ssid in [None, Some(""), Some(OFFICE_SSID)] {
        let decision = evaluator.evaluate(&access_request(None, ssid), WfhStatus::None);
        assert!(!decision.allowed());
        assert_eq!(decision.reason(), AccessDecisionReason::LocationMissing);
    }
}

#[test]
fn missing_or_blank_wifi_denies_once_location_is_present() {
    let evaluator = AccessPolicyEvaluator::presence_only();

    for ssid in [None, Some(""), Some("   ")] {
        let decision = evaluator.evaluate(&access_request(OUTSIDE, ssid), WfhStatus::None);
        assert!(!decision.allowed());
        assert_eq!(decision.reason(), AccessDecisionReason::WifiMissing);
    }
}

#[test]
fn presence_only_allows_any_location_and_network() {
    let evaluator = AccessPolicyEvaluator::presence_only();

    let decision =
        evaluator.evaluate(&access_request(Some((-33.86, 151.2)), Some("CafeGuest")), WfhStatus::None);

    assert!(decision.allowed());
    assert_eq!(decision.reason(), AccessDecisionReason::None);
}

#[test]
fn pending_wfh_is_evaluated_like_none() {
    let evaluator = AccessPolicyEvaluator::presence_only();

    for (location, ssid) in [(None, None), (INSIDE, None), (INSIDE, Some("Net"))] {
        let request = access_request(location, ssid);
        assert_eq!(
            evaluator.evaluate(&request, WfhStatus::Pending),
            evaluator.evaluate(&request, WfhStatus::None)
        );
    }
}

#[test]
fn evaluation_is_idempotent() {
    let evaluator = strict_utc();
    let request = access_request(OUTSIDE, Some(OFFICE_SSID));

    let first = evaluator.evaluate(&request, WfhStatus::None);
    let second = evaluator.evaluate(&request, WfhStatus::None);

    assert_eq!(first, second);
    assert_eq!(first.evaluated_at(), utc_at(10, 30, 0));
}

#[test]
fn strict_allows_inside_office_with_office_wifi_in_hours() {
    let decision = strict_utc().evaluate(
        &access_request(INSIDE, Some("officewifi")),
        WfhStatus::None,
    );

    assert!(decision.allowed());
}

#[test]
fn strict_denies_outside_radius_first() {
    let decision = strict_utc().evaluate(
        &access_request_at(OUTSIDE, Some("HomeNet"), utc_at(22, 0, 0)),
        WfhStatus::None,
    );

    assert_eq!(decision.reason(), AccessDecisionReason::OutsideGeofence);
}

#[test]
fn strict_denies_wrong_wifi_before_office_hours() {
    let decision = strict_utc().evaluate(
        &access_request_at(INSIDE, Some("HomeNet"), utc_at(22, 0, 0)),
        WfhStatus::None,
    );

    assert_eq!(decision.reason(), AccessDecisionReason::UnauthorizedWifi);
}

#[test]
fn strict_office_hours_are_inclusive_at_minute_granularity() {
    let evaluator = strict_utc();

    let at_open = evaluator.evaluate(
        &access_request_at(INSIDE, Some(OFFICE_SSID), utc_at(9, 0, 0)),
        WfhStatus::None,
    );
    let last_minute = evaluator.evaluate(
        &access_request_at(INSIDE, Some(OFFICE_SSID), utc_at(17, 0, 59)),
        WfhStatus::None,
    );
    let after_close = evaluator.evaluate(
        &access_request_at(INSIDE, Some(OFFICE_SSID), utc_at(17, 1, 0)),
        WfhStatus::None,
    );
    let before_open = evaluator.evaluate(
        &access_request_at(INSIDE, Some(OFFICE_SSID), utc_at(8, 59, 59)),
        WfhStatus::None,
    );

    assert!(at_open.allowed());
    assert!(last_minute.allowed());
    assert_eq!(after_close.reason(), AccessDecisionReason::OutsideOfficeHours);
    assert_eq!(before_open.reason(), AccessDecisionReason::OutsideOfficeHours);
}

#[test]
fn strict_office_hours_use_the_office_offset() {
    // 04:00 UTC is 09:30 in UTC+05:30.
    let evaluator = AccessPolicyEvaluator::strict(
        office_policy(),
        FixedOffset::east_opt(5 * 3600 + 30 * 60).expect("offset"),
    );

    let decision = evaluator.evaluate(
        &access_request_at(INSIDE, Some(OFFICE_SSID), utc_at(4, 0, 0)),
        WfhStatus::None,
    );

    assert!(decision.allowed());
}

#[test]
fn strict_still_reports_presence_failures_first() {
    let evaluator = strict_utc();

    let no_location = evaluator.evaluate(&access_request(None, Some("HomeNet")), WfhStatus::None);
    let no_wifi = evaluator.evaluate(&access_request(OUTSIDE, None), WfhStatus::None);

    assert_eq!(no_location.reason(), AccessDecisionReason::LocationMissing);
    assert_eq!(no_wifi.reason(), AccessDecisionReason::WifiMissing);
}

#[test]
fn strict_lets_approved_wfh_bypass_geofence() {
    let decision = strict_utc().evaluate(
        &access_request_at(OUTSIDE, Some("HomeNet"), utc_at(23, 0, 0)),
        WfhStatus::Approved,
    );

    assert!(decision.allowed());
}

#[test]
fn geofence_policy_rejects_inverted_office_hours() {
    let result = GeofencePolicy::new(GeofencePolicyParts {
        latitude: OFFICE_LATITUDE,
        longitude: OFFICE_LONGITUDE,
        radius_meters: 500.0,
        allowed_ssid: OFFICE_SSID.to_string(),
        start_time: NaiveTime::from_hms_opt(18, 0, 0).expect("time"),
        end_time: NaiveTime::from_hms_opt(9, 0, 0).expect("time"),
    });

    assert!(result.is_err());
}

#[test]
fn geofence_policy_contains_its_centre() {
    let policy = office_policy();
    let centre = *policy.center();

    assert!(policy.contains(&centre));
    assert!(policy.radius_meters() > 0.0);
}
