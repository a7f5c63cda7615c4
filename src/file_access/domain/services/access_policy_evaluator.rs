use chrono::{DateTime, FixedOffset, NaiveTime, Timelike, Utc};

use crate::file_access::domain::model::{
    entities::{
        access_decision::AccessDecision, access_request::AccessRequest,
        geofence_policy::GeofencePolicy,
    },
    enums::{access_decision_reason::AccessDecisionReason, wfh_status::WfhStatus},
    value_objects::{geo_location::GeoLocation, wifi_ssid::WifiSsid},
};

/// Decides whether an employee may open a file.
///
/// Checks run in a fixed order and the first failure names the denial:
/// an approved work-from-home status grants immediately, then the claimed
/// location must be present, then the claimed WiFi network. With a strict
/// geofence the claims are also compared against the office policy
/// (radius, network name, office hours, in that order).
///
/// Evaluation is a pure function of its inputs. The WFH status is resolved by
/// the caller beforehand and the decision is audited by the caller afterwards.
#[derive(Clone, Debug, Default)]
pub struct AccessPolicyEvaluator {
    strict_geofence: Option<StrictGeofence>,
}

#[derive(Clone, Debug)]
struct StrictGeofence {
    policy: GeofencePolicy,
    office_offset: FixedOffset,
}

impl AccessPolicyEvaluator {
    pub fn presence_only() -> Self {
        Self::default()
    }

    pub fn strict(policy: GeofencePolicy, office_offset: FixedOffset) -> Self {
        Self {
            strict_geofence: Some(StrictGeofence {
                policy,
                office_offset,
            }),
        }
    }

    pub fn is_strict(&self) -> bool {
        self.strict_geofence.is_some()
    }

    pub fn evaluate(&self, request: &AccessRequest, wfh: WfhStatus) -> AccessDecision {
        let evaluated_at = request.request_time();

        if wfh.is_approved() {
            return AccessDecision::allow(evaluated_at);
        }

        let Some(location) = request.claimed_location() else {
            return AccessDecision::deny(AccessDecisionReason::LocationMissing, evaluated_at);
        };

        let Some(ssid) = request.claimed_wifi_ssid() else {
            return AccessDecision::deny(AccessDecisionReason::WifiMissing, evaluated_at);
        };

        let violation = self
            .strict_geofence
            .as_ref()
            .and_then(|geofence| geofence.first_violation(location, ssid, evaluated_at));

        match violation {
            Some(reason) => AccessDecision::deny(reason, evaluated_at),
            None => AccessDecision::allow(evaluated_at),
        }
    }
}

impl StrictGeofence {
    fn first_violation(
        &self,
        location: &GeoLocation,
        ssid: &WifiSsid,
        at: DateTime<Utc>,
    ) -> Option<AccessDecisionReason> {
        if !self.policy.contains(location) {
            return Some(AccessDecisionReason::OutsideGeofence);
        }

        if !self.policy.allows_ssid(ssid) {
            return Some(AccessDecisionReason::UnauthorizedWifi);
        }

        let local = at.with_timezone(&self.office_offset).time();
        let local_minute = NaiveTime::from_hms_opt(local.hour(), local.minute(), 0).unwrap_or(local);
        if !self.policy.within_office_hours(local_minute) {
            return Some(AccessDecisionReason::OutsideOfficeHours);
        }

        None
    }
}
