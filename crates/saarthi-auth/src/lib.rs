//! # saarthi-auth
//!
//! Mock authentication for the Saarthi portal.
//!
//! Provides the [`SessionStore`] that owns "who is logged in" and "which role
//! is being onboarded", the in-memory [`Directory`] of demo identities that
//! stands in for an identity provider, and the [`Clock`] seam that supplies
//! timestamps and the simulated network delay.
//!
//! Passwords are accepted and never checked. Login only verifies that a
//! known email is used with the role it is registered under.

pub mod clock;
pub mod directory;
pub mod error;
pub mod session;
pub mod signup;

pub use clock::{Clock, ManualClock, SystemClock};
pub use directory::Directory;
pub use error::AuthError;
pub use session::{DEFAULT_SIMULATED_DELAY, SessionState, SessionStore};
pub use signup::SignupRequest;
