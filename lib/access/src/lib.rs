//! Credential verification and route classification for the hearth platform.
//!
//! This crate provides the two stateless halves of the network-edge gate:
//! - Signature verification of the session credential (`TokenVerifier`,
//!   `Claims`) with a fixed asymmetric key and a fixed algorithm
//! - Static classification of request paths (`RouteTable`, `RouteClass`)
//!
//! Neither half holds mutable state; combining them into a per-request
//! allow/redirect decision is the server's job.
//!
//! # Access Control Model
//!
//! Roles are an open set of string tags carried as claims in the signed
//! token. Membership in the set is a claim, not a hierarchy: holding
//! `family-admin` does not imply anything about other roles. Admin-only
//! routes require a specific role on top of a valid session.

pub mod error;
pub mod role;
pub mod route;
pub mod token;

pub use error::CredentialError;
pub use role::{Role, RoleSet};
pub use route::{RouteClass, RouteTable};
pub use token::{Claims, TokenVerifier};
