use saarthi_core::Role;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The email is registered under a different role than the one requested.
    #[error("role mismatch for {email}: requested {requested}, registered as {registered}")]
    RoleMismatch {
        email: String,
        requested: Role,
        registered: Role,
    },
}
