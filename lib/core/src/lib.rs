//! Core domain types for the hearth family network.
//!
//! This crate provides the strongly-typed identifiers shared by the
//! access-control and session layers.

pub mod id;

pub use id::{FamilyId, ParseIdError, UserId};
