//! CLI response types returned as JSON by `saarthi` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Role, SessionPhase};
use crate::identity::Identity;
use crate::routing::Destination;

/// One row of `saarthi roles`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RoleSummary {
    pub role: Role,
    pub title: String,
    pub description: String,
    pub dashboard: String,
}

impl From<Role> for RoleSummary {
    fn from(role: Role) -> Self {
        Self {
            role,
            title: role.title().to_string(),
            description: role.description().to_string(),
            dashboard: Destination::dashboard(role).path().to_string(),
        }
    }
}

/// One row of `saarthi accounts`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DemoAccount {
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Response from `saarthi login` and `saarthi signup`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthResponse {
    pub authenticated: bool,
    pub identity: Identity,
    pub destination: String,
}

/// Snapshot of a session, printed by the shell's `whoami`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub phase: SessionPhase,
    pub pending_role: Option<Role>,
    pub identity: Option<Identity>,
    pub destination: String,
}
