//! hearth edge gateway.
//!
//! Fronts the application pages with the network-edge half of the
//! two-layer session gate: every request is classified and, for protected
//! routes, the session credential is verified before the page is served.
//!
//! Only the edge half runs in this binary. The fine-grained half in
//! `hearth-session` (store, resolver, suppressor) executes in the
//! frontend runtime alongside the rendered pages; this crate contributes
//! [`client::HttpProfileFetcher`] as the transport implementation that
//! runtime hands to its `SessionStore`.

pub mod auth;
pub mod client;
pub mod config;
pub mod pages;
