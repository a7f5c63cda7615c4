use chrono::{DateTime, Utc};

use crate::file_access::domain::model::enums::access_decision_reason::AccessDecisionReason;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessDecision {
    allowed: bool,
    reason: AccessDecisionReason,
    evaluated_at: DateTime<Utc>,
}

impl AccessDecision {
    pub fn allow(evaluated_at: DateTime<Utc>) -> Self {
        Self {
            allowed: true,
            reason: AccessDecisionReason::None,
            evaluated_at,
        }
    }

    pub fn deny(reason: AccessDecisionReason, evaluated_at: DateTime<Utc>) -> Self {
        debug_assert_ne!(reason, AccessDecisionReason::None);
        Self {
            allowed: false,
            reason,
            evaluated_at,
        }
    }

    pub fn allowed(&self) -> bool {
        self.allowed
    }
    pub fn reason(&self) -> AccessDecisionReason {
        self.reason
    }
    pub fn evaluated_at(&self) -> DateTime<Utc> {
        self.evaluated_at
    }
}
