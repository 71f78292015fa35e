//! Access request records and their approval state machine.
//!
//! `Pending` is the only initial state. `Approved` and `Rejected` are
//! terminal: no transition leaves them.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use assetdesk_core::{ActorId, AppError, AppResult, NonEmptyString};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EmailAddress, Role};

/// Maximum accepted length of the applicant name.
pub const APPLICANT_NAME_MAX_LENGTH: usize = 200;

/// Maximum accepted length of free-text justifications and decision notes.
pub const ACCESS_REQUEST_TEXT_MAX_LENGTH: usize = 2000;

/// Stable identifier of an access request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessRequestId(Uuid);

impl AccessRequestId {
    /// Creates a random request identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a request identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for AccessRequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for AccessRequestId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for AccessRequestId {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value.trim()).map(Self).map_err(|error| {
            AppError::Validation(format!("invalid access request id '{value}': {error}"))
        })
    }
}

/// Lifecycle status of an access request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessRequestStatus {
    /// Awaiting an administrative decision.
    Pending,
    /// Accepted; a role was granted to the resolved actor.
    Approved,
    /// Declined.
    Rejected,
}

impl AccessRequestStatus {
    /// Returns the stable storage value for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Returns whether no further transition is defined.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Parses a transport value into a status.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl Display for AccessRequestStatus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for AccessRequestStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(AppError::Validation(format!(
                "unknown access request status '{value}'"
            ))),
        }
    }
}

/// Administrative decision applied to a pending request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Approve and grant `role` to the applicant.
    ///
    /// The applicant actor is attached after the decision is stored.
    Approve {
        /// Administrator taking the decision.
        decided_by: ActorId,
        /// Role granted on approval.
        role: Role,
    },
    /// Reject with an optional reason.
    Reject {
        /// Administrator taking the decision.
        decided_by: ActorId,
        /// Free-text reason shared with the applicant.
        reason: Option<String>,
    },
}

impl AccessDecision {
    /// Returns the status this decision leads to.
    #[must_use]
    pub fn target_status(&self) -> AccessRequestStatus {
        match self {
            Self::Approve { .. } => AccessRequestStatus::Approved,
            Self::Reject { .. } => AccessRequestStatus::Rejected,
        }
    }
}

/// A prospective user's request for an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRequest {
    /// Stable identifier.
    pub request_id: AccessRequestId,
    /// Applicant name.
    pub name: String,
    /// Applicant email.
    pub email: EmailAddress,
    /// Free-text justification.
    pub description: Option<String>,
    /// Current lifecycle status.
    pub status: AccessRequestStatus,
    /// Role granted on approval.
    pub assigned_role: Option<Role>,
    /// Actor the request resolved to on approval.
    pub actor_id: Option<ActorId>,
    /// Administrator who decided the request.
    pub decided_by: Option<ActorId>,
    /// Rejection reason.
    pub decision_note: Option<String>,
    /// Submission timestamp.
    pub created_at: DateTime<Utc>,
    /// Last transition timestamp.
    pub updated_at: DateTime<Utc>,
}

impl AccessRequest {
    /// Validates a submission and creates a pending request.
    pub fn submit(
        name: &str,
        email: &str,
        description: Option<&str>,
        now: DateTime<Utc>,
    ) -> AppResult<Self> {
        let name = NonEmptyString::new(name.trim())?;
        if name.as_str().chars().count() > APPLICANT_NAME_MAX_LENGTH {
            return Err(AppError::Validation(format!(
                "applicant name must not exceed {APPLICANT_NAME_MAX_LENGTH} characters"
            )));
        }

        Ok(Self {
            request_id: AccessRequestId::new(),
            name: name.into(),
            email: EmailAddress::new(email)?,
            description: normalize_text(description, "description")?,
            status: AccessRequestStatus::Pending,
            assigned_role: None,
            actor_id: None,
            decided_by: None,
            decision_note: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns the record produced by applying `decision` to this request.
    ///
    /// Fails with [`AppError::InvalidState`] unless the request is pending.
    pub fn decide(&self, decision: AccessDecision, now: DateTime<Utc>) -> AppResult<Self> {
        if self.status.is_terminal() {
            return Err(AppError::InvalidState(format!(
                "access request '{}' is already {} and cannot become {}",
                self.request_id,
                self.status,
                decision.target_status()
            )));
        }

        let mut decided = self.clone();
        decided.status = decision.target_status();
        decided.updated_at = now;

        match decision {
            AccessDecision::Approve { decided_by, role } => {
                decided.decided_by = Some(decided_by);
                decided.assigned_role = Some(role);
            }
            AccessDecision::Reject { decided_by, reason } => {
                decided.decided_by = Some(decided_by);
                decided.decision_note = normalize_text(reason.as_deref(), "rejection reason")?;
            }
        }

        Ok(decided)
    }
}

fn normalize_text(value: Option<&str>, label: &str) -> AppResult<Option<String>> {
    let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };

    if value.chars().count() > ACCESS_REQUEST_TEXT_MAX_LENGTH {
        return Err(AppError::Validation(format!(
            "{label} must not exceed {ACCESS_REQUEST_TEXT_MAX_LENGTH} characters"
        )));
    }

    Ok(Some(value.to_owned()))
}
