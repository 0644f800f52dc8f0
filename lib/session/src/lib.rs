//! Client session state and navigation decisions for the hearth platform.
//!
//! This crate is the second, fine-grained layer of the two-layer gate.
//! The network edge (see `hearth-server`) makes a coarse route-based
//! allow/redirect decision per request; once a page is served, this layer
//! maintains the authoritative session state and decides where the user
//! should be, based on their family-membership workflow status.
//!
//! The pieces:
//! - [`SessionStore`]: process-wide session state machine holding the
//!   last-fetched [`UserProfile`], refreshed through a [`ProfileFetcher`]
//! - [`navigate::resolve`]: pure function mapping profile + current path
//!   to a single redirect decision
//! - [`ErrorPageSuppressor`]: coordination flag disabling redirects while
//!   an error page is displayed
//!
//! The two layers are deliberately decoupled: membership status lives in
//! the profile, not the credential, so the edge cannot see it.

pub mod fetch;
pub mod navigate;
pub mod profile;
pub mod store;
pub mod suppress;

pub use fetch::{ProfileFetchError, ProfileFetcher};
pub use navigate::{NavigationDecision, SessionNavigator, resolve};
pub use profile::{FamilyMembership, MembershipStatus, UserProfile};
pub use store::{SessionState, SessionStore};
pub use suppress::{ErrorPageSuppressor, SuppressionGuard};
