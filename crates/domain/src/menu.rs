use std::fmt::{Display, Formatter};

use assetdesk_core::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Role, RoleSet};

/// Maximum accepted length of a resource key.
pub const RESOURCE_KEY_MAX_LENGTH: usize = 128;

/// Identifier of a protected operation or UI surface, e.g. `assets.list`.
///
/// Keys are lowercase ASCII segments of `[a-z0-9_-]` joined by `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceKey(String);

impl ResourceKey {
    /// Creates a validated resource key.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "resource key must not be empty".to_owned(),
            ));
        }

        if trimmed.len() > RESOURCE_KEY_MAX_LENGTH {
            return Err(AppError::Validation(format!(
                "resource key must not exceed {RESOURCE_KEY_MAX_LENGTH} characters"
            )));
        }

        let segments_are_valid = trimmed.split('.').all(|segment| {
            !segment.is_empty()
                && segment.chars().all(|character| {
                    character.is_ascii_lowercase()
                        || character.is_ascii_digit()
                        || character == '_'
                        || character == '-'
                })
        });

        if !segments_are_valid {
            return Err(AppError::Validation(format!(
                "resource key '{trimmed}' must be dot-separated segments of [a-z0-9_-]"
            )));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for ResourceKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.0.as_str())
    }
}

impl TryFrom<String> for ResourceKey {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ResourceKey> for String {
    fn from(value: ResourceKey) -> Self {
        value.0
    }
}

/// Policy entry mapping one resource key to the roles allowed to reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuPermission {
    /// Protected resource.
    pub resource_key: ResourceKey,
    /// Position of the entry in resolved menus, ascending.
    pub display_order: i32,
    /// Allowed roles in canonical order, never empty.
    pub roles: Vec<Role>,
    /// Last administrative change.
    pub updated_at: DateTime<Utc>,
}

impl MenuPermission {
    /// Creates a policy entry, normalizing the role list to canonical order.
    ///
    /// An empty allow-list is rejected: unconfigured is the only way to deny
    /// everyone, and an empty required set would read as "public".
    pub fn new(
        resource_key: ResourceKey,
        display_order: i32,
        roles: RoleSet,
        updated_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        if roles.is_empty() {
            return Err(AppError::Validation(format!(
                "menu permission '{resource_key}' must allow at least one role"
            )));
        }

        Ok(Self {
            resource_key,
            display_order,
            roles: roles.into_iter().collect(),
            updated_at,
        })
    }

    /// Returns the allow-list as a set.
    #[must_use]
    pub fn role_set(&self) -> RoleSet {
        self.roles.iter().copied().collect()
    }
}
