//! Profile fetch abstraction.
//!
//! The session store is decoupled from transport through this trait; the
//! HTTP implementation lives in the server crate, and tests script
//! completions directly.

use async_trait::async_trait;
use std::fmt;

use crate::profile::UserProfile;

/// Errors from fetching the user profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileFetchError {
    /// The backend answered with a 401-class response: no valid session.
    Unauthenticated,
    /// Network failure or server error. Treated as transient; the store
    /// degrades to "no profile" rather than assuming malice.
    Failed { reason: String },
}

impl fmt::Display for ProfileFetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "not authenticated"),
            Self::Failed { reason } => write!(f, "profile fetch failed: {reason}"),
        }
    }
}

impl std::error::Error for ProfileFetchError {}

/// Fetches the authoritative user profile.
///
/// A fetch is not cancellable once issued; overlapping calls are tolerated
/// by the store via last-completed-wins semantics, so implementations must
/// not assume strict request/response pairing.
#[async_trait]
pub trait ProfileFetcher: Send + Sync {
    /// Fetches the current user's profile.
    ///
    /// # Errors
    ///
    /// `Unauthenticated` for a 401-class response, `Failed` for network
    /// or server errors.
    async fn fetch_profile(&self) -> Result<UserProfile, ProfileFetchError>;
}
