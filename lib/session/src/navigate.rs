//! Status-driven navigation decisions.
//!
//! The resolver is a pure function over the fetched profile, the current
//! path, and the suppression flag. It computes the single redirect implied
//! by the user's family-membership status, or `Stay`.
//!
//! Evaluation order matters: membership status is checked before the
//! public-page test, because a status-based redirect must win even from a
//! protected page (a pending user must not remain on `/settings`).
//!
//! Every redirect target is verified to be terminal before it is issued:
//! given the same profile, the target's own decision must be `Stay`. A
//! violation indicates a route-table misconfiguration; it is logged and
//! the redirect suppressed so the user is never trapped in a loop.

use hearth_access::RouteTable;

use crate::profile::{MembershipStatus, UserProfile};
use crate::store::{SessionState, SessionStore};
use crate::suppress::ErrorPageSuppressor;

/// Well-known screen paths the resolver redirects to.
pub mod paths {
    /// Landing screen for authenticated members.
    pub const HOME: &str = "/home";
    /// Family creation screen.
    pub const CREATE_FAMILY: &str = "/create-family";
    /// Holding screen while a join request is pending.
    pub const INVITATION_PENDING: &str = "/invitation-pending";
    /// Screen shown after a join request was rejected.
    pub const INVITATION_REJECTED: &str = "/invitation-rejected";
}

/// Outcome of a navigation resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Remain on the current path.
    Stay,
    /// Navigate to the given path.
    Redirect(&'static str),
}

/// Computes the redirect implied by the user's membership status.
///
/// Returns `Stay` whenever:
/// - suppression is active (an error page is mounted), or
/// - no profile is available (fetch failed or unauthenticated; the edge
///   guard already gates protected pages, so this layer stays permissive
///   rather than stranding users during a backend outage), or
/// - the current path is already where the status wants the user.
#[must_use]
pub fn resolve(
    profile: Option<&UserProfile>,
    current_path: &str,
    routes: &RouteTable,
    suppressed: bool,
) -> NavigationDecision {
    if suppressed {
        return NavigationDecision::Stay;
    }

    let Some(profile) = profile else {
        return NavigationDecision::Stay;
    };

    let decision = decide(profile, current_path, routes);

    if let NavigationDecision::Redirect(target) = decision {
        // Terminal check: the target must not itself redirect.
        if decide(profile, target, routes) != NavigationDecision::Stay {
            tracing::warn!(
                redirect_target = target,
                current_path,
                "redirect target is not terminal; staying put"
            );
            return NavigationDecision::Stay;
        }
    }

    decision
}

fn decide(profile: &UserProfile, path: &str, routes: &RouteTable) -> NavigationDecision {
    match profile.effective_status() {
        Some(MembershipStatus::Pending) => {
            if is_at(path, paths::INVITATION_PENDING) {
                NavigationDecision::Stay
            } else {
                NavigationDecision::Redirect(paths::INVITATION_PENDING)
            }
        }
        Some(MembershipStatus::Rejected) => {
            // Escape hatch: a rejected user may still start a new family.
            if is_at(path, paths::INVITATION_REJECTED) || is_at(path, paths::CREATE_FAMILY) {
                NavigationDecision::Stay
            } else {
                NavigationDecision::Redirect(paths::INVITATION_REJECTED)
            }
        }
        Some(MembershipStatus::Active) => {
            // Members are moved off marketing/login pages.
            if routes.is_public(path) {
                NavigationDecision::Redirect(paths::HOME)
            } else {
                NavigationDecision::Stay
            }
        }
        None => {
            if is_at(path, paths::CREATE_FAMILY) {
                NavigationDecision::Stay
            } else {
                NavigationDecision::Redirect(paths::CREATE_FAMILY)
            }
        }
    }
}

/// Returns true if the path is the screen or one of its sub-paths.
///
/// Segment-aware: `/create-family/step2` counts as being on
/// `/create-family`, but `/create-family-old` does not.
fn is_at(path: &str, screen: &str) -> bool {
    path == screen
        || path
            .strip_prefix(screen)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Ties the session store, the suppressor, and the route table together
/// into per-path navigation decisions.
#[derive(Clone)]
pub struct SessionNavigator {
    store: SessionStore,
    suppressor: ErrorPageSuppressor,
    routes: RouteTable,
}

impl SessionNavigator {
    /// Creates a navigator over the given store and route table.
    #[must_use]
    pub fn new(store: SessionStore, suppressor: ErrorPageSuppressor, routes: RouteTable) -> Self {
        Self {
            store,
            suppressor,
            routes,
        }
    }

    /// Returns the suppressor, for wiring into error-page lifecycles.
    #[must_use]
    pub fn suppressor(&self) -> &ErrorPageSuppressor {
        &self.suppressor
    }

    /// Decides whether to redirect away from the current path.
    ///
    /// Conservative while the store has no completed result: never
    /// redirects during `Uninitialized` or `Loading`.
    #[must_use]
    pub fn decide(&self, current_path: &str) -> NavigationDecision {
        match self.store.state() {
            SessionState::Uninitialized | SessionState::Loading => NavigationDecision::Stay,
            SessionState::Ready(profile) => resolve(
                profile.as_ref(),
                current_path,
                &self.routes,
                self.suppressor.is_active(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{ProfileFetchError, ProfileFetcher};
    use crate::profile::FamilyMembership;
    use async_trait::async_trait;
    use hearth_core::{FamilyId, UserId};
    use std::sync::Arc;

    fn routes() -> RouteTable {
        RouteTable::new(
            vec![
                "/home".to_string(),
                "/settings".to_string(),
                "/family".to_string(),
                "/create-family".to_string(),
                "/invitation-pending".to_string(),
                "/invitation-rejected".to_string(),
            ],
            vec!["/admin".to_string()],
        )
    }

    fn profile_with(status: Option<MembershipStatus>) -> UserProfile {
        let mut profile = UserProfile::new(UserId::new());
        if let Some(status) = status {
            profile.family_memberships.push(FamilyMembership {
                family_id: FamilyId::new(),
                status,
            });
        }
        profile
    }

    #[test]
    fn pending_user_is_sent_to_invitation_pending() {
        let profile = profile_with(Some(MembershipStatus::Pending));
        assert_eq!(
            resolve(Some(&profile), "/settings", &routes(), false),
            NavigationDecision::Redirect("/invitation-pending")
        );
    }

    #[test]
    fn pending_user_stays_on_invitation_pending() {
        let profile = profile_with(Some(MembershipStatus::Pending));
        assert_eq!(
            resolve(Some(&profile), "/invitation-pending", &routes(), false),
            NavigationDecision::Stay
        );
    }

    #[test]
    fn rejected_user_is_sent_to_invitation_rejected() {
        let profile = profile_with(Some(MembershipStatus::Rejected));
        assert_eq!(
            resolve(Some(&profile), "/home", &routes(), false),
            NavigationDecision::Redirect("/invitation-rejected")
        );
    }

    #[test]
    fn rejected_user_may_stay_on_create_family() {
        // Escape hatch: rejected users can still start a new family.
        let profile = profile_with(Some(MembershipStatus::Rejected));
        assert_eq!(
            resolve(Some(&profile), "/create-family", &routes(), false),
            NavigationDecision::Stay
        );
        assert_eq!(
            resolve(Some(&profile), "/invitation-rejected", &routes(), false),
            NavigationDecision::Stay
        );
    }

    #[test]
    fn active_member_is_moved_off_public_pages() {
        let profile = profile_with(Some(MembershipStatus::Active));
        assert_eq!(
            resolve(Some(&profile), "/login", &routes(), false),
            NavigationDecision::Redirect("/home")
        );
        assert_eq!(
            resolve(Some(&profile), "/", &routes(), false),
            NavigationDecision::Redirect("/home")
        );
    }

    #[test]
    fn active_member_stays_on_protected_pages() {
        let profile = profile_with(Some(MembershipStatus::Active));
        assert_eq!(
            resolve(Some(&profile), "/home", &routes(), false),
            NavigationDecision::Stay
        );
        assert_eq!(
            resolve(Some(&profile), "/settings", &routes(), false),
            NavigationDecision::Stay
        );
    }

    #[test]
    fn user_without_membership_is_sent_to_create_family() {
        let profile = profile_with(None);
        assert_eq!(
            resolve(Some(&profile), "/home", &routes(), false),
            NavigationDecision::Redirect("/create-family")
        );
        assert_eq!(
            resolve(Some(&profile), "/create-family", &routes(), false),
            NavigationDecision::Stay
        );
    }

    #[test]
    fn target_subpaths_count_as_already_there() {
        // A user mid-flow on a sub-path of the target screen is not
        // bounced back to its root.
        let no_membership = profile_with(None);
        assert_eq!(
            resolve(Some(&no_membership), "/create-family/step2", &routes(), false),
            NavigationDecision::Stay
        );

        let pending = profile_with(Some(MembershipStatus::Pending));
        assert_eq!(
            resolve(Some(&pending), "/invitation-pending/details", &routes(), false),
            NavigationDecision::Stay
        );

        let rejected = profile_with(Some(MembershipStatus::Rejected));
        assert_eq!(
            resolve(Some(&rejected), "/create-family/confirm", &routes(), false),
            NavigationDecision::Stay
        );
    }

    #[test]
    fn similar_prefix_is_not_the_target_screen() {
        let no_membership = profile_with(None);
        assert_eq!(
            resolve(Some(&no_membership), "/create-family-old", &routes(), false),
            NavigationDecision::Redirect("/create-family")
        );
    }

    #[test]
    fn status_wins_over_public_page_check() {
        // A pending user on a public page is still sent to the holding
        // screen, not to /home.
        let profile = profile_with(Some(MembershipStatus::Pending));
        assert_eq!(
            resolve(Some(&profile), "/login", &routes(), false),
            NavigationDecision::Redirect("/invitation-pending")
        );
    }

    #[test]
    fn missing_profile_never_redirects() {
        for path in ["/", "/login", "/home", "/settings", "/admin"] {
            assert_eq!(
                resolve(None, path, &routes(), false),
                NavigationDecision::Stay
            );
        }
    }

    #[test]
    fn suppression_forces_stay_for_every_input() {
        let statuses = [
            None,
            Some(MembershipStatus::Pending),
            Some(MembershipStatus::Active),
            Some(MembershipStatus::Rejected),
        ];
        for status in statuses {
            let profile = profile_with(status);
            for path in ["/", "/login", "/home", "/settings", "/unknown"] {
                assert_eq!(
                    resolve(Some(&profile), path, &routes(), true),
                    NavigationDecision::Stay
                );
            }
        }
        assert_eq!(
            resolve(None, "/anything", &routes(), true),
            NavigationDecision::Stay
        );
    }

    #[test]
    fn every_redirect_target_is_terminal() {
        let statuses = [
            None,
            Some(MembershipStatus::Pending),
            Some(MembershipStatus::Active),
            Some(MembershipStatus::Rejected),
        ];
        let paths = [
            "/",
            "/login",
            "/home",
            "/settings",
            "/family/members",
            "/create-family",
            "/invitation-pending",
            "/invitation-rejected",
            "/admin",
            "/totally/unknown",
        ];
        for status in statuses {
            let profile = profile_with(status);
            for path in paths {
                if let NavigationDecision::Redirect(target) =
                    resolve(Some(&profile), path, &routes(), false)
                {
                    assert_eq!(
                        resolve(Some(&profile), target, &routes(), false),
                        NavigationDecision::Stay,
                        "redirect from {path} to {target} must be terminal"
                    );
                }
            }
        }
    }

    #[test]
    fn non_terminal_target_is_suppressed() {
        // Misconfigured table that leaves /home public: an active member
        // on /login would be bounced to /home, which would bounce again.
        // The terminal check catches it and stays put instead of looping.
        let broken = RouteTable::new(Vec::new(), Vec::new());
        let profile = profile_with(Some(MembershipStatus::Active));
        assert_eq!(
            resolve(Some(&profile), "/login", &broken, false),
            NavigationDecision::Stay
        );
    }

    struct ImmediateFetcher(Result<UserProfile, ProfileFetchError>);

    #[async_trait]
    impl ProfileFetcher for ImmediateFetcher {
        async fn fetch_profile(&self) -> Result<UserProfile, ProfileFetchError> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn navigator_stays_until_store_is_ready() {
        let profile = profile_with(Some(MembershipStatus::Pending));
        let store = SessionStore::new(Arc::new(ImmediateFetcher(Ok(profile))));
        let navigator =
            SessionNavigator::new(store.clone(), ErrorPageSuppressor::new(), routes());

        // Uninitialized: no redirect even though the profile would demand one.
        assert_eq!(navigator.decide("/settings"), NavigationDecision::Stay);

        store.initialize().await;
        assert_eq!(
            navigator.decide("/settings"),
            NavigationDecision::Redirect("/invitation-pending")
        );
    }

    #[tokio::test]
    async fn navigator_honors_error_page_lifecycle() {
        let profile = profile_with(Some(MembershipStatus::Pending));
        let store = SessionStore::new(Arc::new(ImmediateFetcher(Ok(profile))));
        store.initialize().await;
        let navigator = SessionNavigator::new(store, ErrorPageSuppressor::new(), routes());

        {
            let _mounted = navigator.suppressor().suppress();
            assert_eq!(navigator.decide("/settings"), NavigationDecision::Stay);
        }
        // Error page unmounted: normal resolution resumes.
        assert_eq!(
            navigator.decide("/settings"),
            NavigationDecision::Redirect("/invitation-pending")
        );
    }

    #[tokio::test]
    async fn navigator_after_logout_never_redirects() {
        let store = SessionStore::new(Arc::new(ImmediateFetcher(Err(
            ProfileFetchError::Unauthenticated,
        ))));
        store.logout();
        let navigator = SessionNavigator::new(store, ErrorPageSuppressor::new(), routes());
        assert_eq!(navigator.decide("/settings"), NavigationDecision::Stay);
        assert_eq!(navigator.decide("/login"), NavigationDecision::Stay);
    }
}
