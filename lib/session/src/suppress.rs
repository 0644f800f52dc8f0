//! Redirect suppression while an error page is displayed.
//!
//! Error pages (404/500) have no valid routing context, so the navigation
//! resolver must not fire redirects while one is mounted. The flag is set
//! when the error page mounts and cleared when it unmounts; leaving the
//! page clears it synchronously via the guard's drop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag disabling navigation redirects.
#[derive(Debug, Clone, Default)]
pub struct ErrorPageSuppressor {
    active: Arc<AtomicBool>,
}

impl ErrorPageSuppressor {
    /// Creates a suppressor in the cleared state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while an error page is mounted.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Sets the flag. Called when an error page mounts.
    pub fn activate(&self) {
        self.active.store(true, Ordering::SeqCst);
    }

    /// Clears the flag. Called when an error page unmounts.
    pub fn deactivate(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    /// Sets the flag and returns a guard that clears it on drop, tying
    /// suppression to the error page's lifetime.
    #[must_use]
    pub fn suppress(&self) -> SuppressionGuard {
        self.activate();
        SuppressionGuard {
            active: Arc::clone(&self.active),
        }
    }
}

/// Clears the suppression flag when dropped.
#[derive(Debug)]
pub struct SuppressionGuard {
    active: Arc<AtomicBool>,
}

impl Drop for SuppressionGuard {
    fn drop(&mut self) {
        self.active.store(false, Ordering::SeqCst);
    }
}
