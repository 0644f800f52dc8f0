//! Process-wide session state.
//!
//! The store is the single producer of the profile value the navigation
//! resolver consumes. It is an explicit, test-constructible object rather
//! than ambient global state, and is reinitialized per browsing session.
//!
//! Lifecycle: `Uninitialized -> Loading -> Ready(Some(profile) | None)`.
//! Every `refresh()` transitions back through `Loading`. A fetch is never
//! cancelled, so overlapping refreshes are resolved by completion order:
//! whichever fetch completes last writes the state the store exposes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::fetch::{ProfileFetchError, ProfileFetcher};
use crate::profile::UserProfile;

/// Observable state of the session store.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// No fetch has been issued yet.
    Uninitialized,
    /// A fetch is in flight and no result has completed since.
    Loading,
    /// The latest completed fetch; `None` means unauthenticated or the
    /// fetch failed. Downstream code treats `Loading` conservatively and
    /// must not redirect until a result is ready.
    Ready(Option<UserProfile>),
}

/// Holds the last-fetched user profile and drives re-fetches.
#[derive(Clone)]
pub struct SessionStore {
    fetcher: Arc<dyn ProfileFetcher>,
    state: Arc<Mutex<SessionState>>,
    /// One-shot signal set by `logout()` so the next `initialize()` does
    /// not race a stale "still logged in" fetch against the cookie clear.
    logout_latch: Arc<AtomicBool>,
}

impl SessionStore {
    /// Creates a store in the `Uninitialized` state.
    #[must_use]
    pub fn new(fetcher: Arc<dyn ProfileFetcher>) -> Self {
        Self {
            fetcher,
            state: Arc::new(Mutex::new(SessionState::Uninitialized)),
            logout_latch: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.lock().clone()
    }

    /// Returns the current profile, if a fetch has completed with one.
    #[must_use]
    pub fn profile(&self) -> Option<UserProfile> {
        match &*self.lock() {
            SessionState::Ready(profile) => profile.clone(),
            _ => None,
        }
    }

    /// Returns true while a fetch is in flight with no completed result.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(&*self.lock(), SessionState::Loading)
    }

    /// Initializes the store for a new browsing session.
    ///
    /// If a logout just happened, the one-shot latch short-circuits the
    /// fetch and the store settles on `Ready(None)` immediately; otherwise
    /// this is a plain `refresh()`.
    pub async fn initialize(&self) {
        if self.logout_latch.swap(false, Ordering::SeqCst) {
            tracing::debug!("initialization short-circuited by recent logout");
            *self.lock() = SessionState::Ready(None);
            return;
        }
        self.refresh().await;
    }

    /// Forces a profile re-fetch.
    ///
    /// Idempotent and safe to call while another refresh is in flight;
    /// the result completing last wins. Failures are not retried here;
    /// retry is the caller's responsibility via another `refresh()`.
    pub async fn refresh(&self) {
        *self.lock() = SessionState::Loading;

        let result = self.fetcher.fetch_profile().await;

        let mut state = self.lock();
        match result {
            Ok(profile) => {
                tracing::debug!(user = %profile.id, "profile refreshed");
                *state = SessionState::Ready(Some(profile));
            }
            Err(ProfileFetchError::Unauthenticated) => {
                tracing::debug!("profile fetch returned unauthenticated");
                *state = SessionState::Ready(None);
            }
            Err(err) => {
                tracing::warn!(error = %err, "profile fetch failed");
                *state = SessionState::Ready(None);
            }
        }
    }

    /// Clears the session locally without a network fetch.
    ///
    /// Sets the one-shot latch so the next `initialize()` does not refetch
    /// before the external cookie clear is observed.
    pub fn logout(&self) {
        tracing::debug!("session cleared locally");
        *self.lock() = SessionState::Ready(None);
        self.logout_latch.store(true, Ordering::SeqCst);
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
