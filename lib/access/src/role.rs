//! Role tags carried as claims in the session credential.
//!
//! Roles form an open set of string tags (e.g. `basic-user`,
//! `family-admin`). There is no hierarchy and no implicit inheritance
//! between roles: a check for a role succeeds only if that exact tag is
//! present in the claim set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single named entitlement tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    /// Creates a role from a tag string.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Returns the role tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Set of roles extracted from a verified credential.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet {
    roles: Vec<Role>,
}

impl RoleSet {
    /// Creates an empty role set.
    #[must_use]
    pub fn none() -> Self {
        Self { roles: Vec::new() }
    }

    /// Creates a role set from a list of tags.
    #[must_use]
    pub fn from_tags<I, T>(tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Role>,
    {
        Self {
            roles: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if the exact role tag is present.
    ///
    /// No inheritance: `family-admin` does not satisfy a check for
    /// `basic-user` or vice versa.
    #[must_use]
    pub fn contains(&self, role: &Role) -> bool {
        self.roles.contains(role)
    }

    /// Returns the roles as a slice.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Returns true if no roles are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        Self {
            roles: iter.into_iter().collect(),
        }
    }
}
