//! # saarthi-core
//!
//! Core types, role routing, and error types for AarogyaSaarthi.
//!
//! This crate provides the foundational types shared across all Saarthi crates:
//! - The `Role` enum that tags every identity and gates every dashboard
//! - The `Identity` profile record and role-specific profile details
//! - Session phase enum describing the auth state machine
//! - Role-gated routing to the four dashboards
//! - Cross-cutting error types
//! - CLI response types

pub mod enums;
pub mod errors;
pub mod identity;
pub mod responses;
pub mod routing;

pub use enums::{Role, SessionPhase};
pub use errors::CoreError;
pub use identity::{Identity, RoleProfile};
pub use routing::Destination;
