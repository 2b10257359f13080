//! Role-gated navigation.
//!
//! The UI layer asks for a [`Destination`] after every session change and
//! mounts the matching screen. Dashboard selection is an exhaustive match
//! over [`Role`], so adding a role fails to compile until it has a screen.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{Role, SessionPhase};

/// A screen the portal can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "screen", content = "role")]
pub enum Destination {
    /// Role picker.
    Welcome,
    /// Credential entry for the chosen role.
    Auth,
    Dashboard(Role),
}

impl Destination {
    #[must_use]
    pub const fn dashboard(role: Role) -> Self {
        Self::Dashboard(role)
    }

    /// Pick the screen for a session.
    ///
    /// Authenticated sessions go to their identity's dashboard, a chosen but
    /// unauthenticated role goes to credential entry, and everything else
    /// falls back to the role picker.
    #[must_use]
    pub const fn for_phase(phase: SessionPhase) -> Self {
        match phase {
            SessionPhase::Authenticated(role) => Self::Dashboard(role),
            SessionPhase::RoleChosen(_) => Self::Auth,
            SessionPhase::Anonymous => Self::Welcome,
        }
    }

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Welcome => "/",
            Self::Auth => "/auth",
            Self::Dashboard(Role::Patient) => "/patient",
            Self::Dashboard(Role::Doctor) => "/doctor",
            Self::Dashboard(Role::Pharmacy) => "/pharmacy",
            Self::Dashboard(Role::Admin) => "/admin",
        }
    }

}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
