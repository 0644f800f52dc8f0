//! The authoritative user profile fetched from the backend.
//!
//! The profile is the source of truth for navigation decisions once the
//! user is logged in. It is replaced wholesale on every refresh and never
//! partially mutated.

use hearth_access::RoleSet;
use hearth_core::{FamilyId, UserId};
use serde::{Deserialize, Serialize};

/// Per-family workflow state of a membership.
///
/// Distinct from authentication: a user can hold a valid session while
/// their membership is still pending or was rejected. A closed enum keeps
/// the resolver's branches exhaustively checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    /// Join request awaiting administrator action.
    Pending,
    /// Membership granted.
    Active,
    /// Join request declined by an administrator.
    Rejected,
}

/// A user's membership record in one family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMembership {
    /// The family this membership belongs to.
    pub family_id: FamilyId,
    /// Current workflow state.
    pub status: MembershipStatus,
}

/// User profile as returned by `GET /profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// The user's ID.
    pub id: UserId,
    /// Role tags, mirroring the credential's claims.
    #[serde(default)]
    pub roles: RoleSet,
    /// Membership records, possibly empty.
    #[serde(default)]
    pub family_memberships: Vec<FamilyMembership>,
}

impl UserProfile {
    /// Creates a profile with no memberships.
    #[must_use]
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            roles: RoleSet::none(),
            family_memberships: Vec::new(),
        }
    }

    /// Returns the membership consulted for navigation, if any.
    ///
    /// When a user holds multiple memberships the selection is explicit
    /// rather than positional: an active membership wins over a pending
    /// one, which wins over a rejected one. Ties within a status keep
    /// backend order.
    #[must_use]
    pub fn effective_membership(&self) -> Option<&FamilyMembership> {
        for status in [
            MembershipStatus::Active,
            MembershipStatus::Pending,
            MembershipStatus::Rejected,
        ] {
            if let Some(membership) = self
                .family_memberships
                .iter()
                .find(|m| m.status == status)
            {
                return Some(membership);
            }
        }
        None
    }

    /// Returns the status of the effective membership, if any.
    #[must_use]
    pub fn effective_status(&self) -> Option<MembershipStatus> {
        self.effective_membership().map(|m| m.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn membership(status: MembershipStatus) -> FamilyMembership {
        FamilyMembership {
            family_id: FamilyId::new(),
            status,
        }
    }

    #[test]
    fn no_memberships_means_no_effective_status() {
        let profile = UserProfile::new(UserId::new());
        assert!(profile.effective_membership().is_none());
        assert!(profile.effective_status().is_none());
    }

    #[test]
    fn single_membership_is_effective() {
        let mut profile = UserProfile::new(UserId::new());
        profile
            .family_memberships
            .push(membership(MembershipStatus::Pending));
        assert_eq!(profile.effective_status(), Some(MembershipStatus::Pending));
    }

    #[test]
    fn active_wins_over_pending_and_rejected() {
        let mut profile = UserProfile::new(UserId::new());
        profile
            .family_memberships
            .push(membership(MembershipStatus::Rejected));
        profile
            .family_memberships
            .push(membership(MembershipStatus::Pending));
        profile
            .family_memberships
            .push(membership(MembershipStatus::Active));
        assert_eq!(profile.effective_status(), Some(MembershipStatus::Active));
    }

    #[test]
    fn pending_wins_over_rejected() {
        let mut profile = UserProfile::new(UserId::new());
        profile
            .family_memberships
            .push(membership(MembershipStatus::Rejected));
        profile
            .family_memberships
            .push(membership(MembershipStatus::Pending));
        assert_eq!(profile.effective_status(), Some(MembershipStatus::Pending));
    }

    #[test]
    fn deserializes_backend_json() {
        let id = UserId::new();
        let family_id = FamilyId::new();
        let json = format!(
            r#"{{
                "id": "{}",
                "roles": ["basic-user"],
                "familyMemberships": [
                    {{"familyId": "{}", "status": "pending"}}
                ]
            }}"#,
            id.as_ulid(),
            family_id.as_ulid(),
        );

        let profile: UserProfile = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(profile.id, id);
        assert_eq!(profile.family_memberships.len(), 1);
        assert_eq!(profile.family_memberships[0].family_id, family_id);
        assert_eq!(profile.effective_status(), Some(MembershipStatus::Pending));
    }

    #[test]
    fn missing_optional_fields_default() {
        let id = UserId::new();
        let json = format!(r#"{{"id": "{}"}}"#, id.as_ulid());
        let profile: UserProfile = serde_json::from_str(&json).expect("deserialize");
        assert!(profile.roles.is_empty());
        assert!(profile.family_memberships.is_empty());
    }
}
