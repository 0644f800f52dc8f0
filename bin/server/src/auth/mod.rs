//! Edge authentication for the hearth server.
//!
//! This module implements the coarse, route-based request gate. It is
//! deliberately decoupled from the fine-grained membership workflow in
//! `hearth-session`: membership status lives in the profile, not in the
//! credential, so the edge cannot and does not consult it.
//!
//! Every denial redirects to the application root. Collapsing "no
//! credential", "bad credential", and "wrong role" into the same outward
//! behavior avoids giving a probing client an oracle for why access was
//! denied.

pub mod middleware;

use hearth_access::{Role, RouteTable, TokenVerifier};

pub use middleware::{DenialReason, GuardDecision, edge_guard, evaluate};

/// Shared application state for the edge guard.
pub struct AppState {
    /// Verifier for the session credential.
    pub verifier: TokenVerifier,
    /// Static route classification tables.
    pub routes: RouteTable,
    /// Role required by admin-only routes.
    pub admin_role: Role,
    /// Name of the session cookie.
    pub cookie_name: String,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(
        verifier: TokenVerifier,
        routes: RouteTable,
        admin_role: Role,
        cookie_name: String,
    ) -> Self {
        Self {
            verifier,
            routes,
            admin_role,
            cookie_name,
        }
    }
}
