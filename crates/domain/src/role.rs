use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use assetdesk_core::AppError;
use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free set of roles.
pub type RoleSet = BTreeSet<Role>;

/// Capability tag from the closed role enumeration.
///
/// Ordering follows declaration order, which keeps [`RoleSet`] iteration and
/// serialized role lists stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Full administrative access, including access request decisions.
    Admin,
    /// Operational management of assets, tickets and employees.
    Manager,
    /// Baseline self-service access.
    User,
}

impl Role {
    /// Returns the stable storage value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Manager => "MANAGER",
            Self::User => "USER",
        }
    }

    /// Returns all known roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[Role::Admin, Role::Manager, Role::User];

        ALL
    }

    /// Parses a transport value into a role.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }

    /// Parses a list of transport values into a role set, dropping duplicates.
    pub fn parse_set<S: AsRef<str>>(values: &[S]) -> Result<RoleSet, AppError> {
        values
            .iter()
            .map(|value| Self::from_transport(value.as_ref()))
            .collect()
    }
}

impl Display for Role {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Self::Admin),
            "MANAGER" => Ok(Self::Manager),
            "USER" => Ok(Self::User),
            _ => Err(AppError::Validation(format!("unknown role value '{value}'"))),
        }
    }
}
