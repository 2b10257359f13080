//! Role and session phase enums for Saarthi.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// The single authorization tag carried by every identity.
///
/// Chosen on the welcome screen before credentials are entered, compared on
/// login, and used to pick which dashboard mounts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Patient,
    Doctor,
    Pharmacy,
    Admin,
}

impl Role {
    /// Every role, in role-picker order.
    pub const ALL: [Self; 4] = [Self::Patient, Self::Doctor, Self::Pharmacy, Self::Admin];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Doctor => "doctor",
            Self::Pharmacy => "pharmacy",
            Self::Admin => "admin",
        }
    }

    /// Display title shown on the role picker.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Patient => "Patient",
            Self::Doctor => "Doctor / Hospital",
            Self::Pharmacy => "Medical Store / Pharmacy",
            Self::Admin => "Administrator",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Patient => "Manage your health records, prescriptions, and appointments",
            Self::Doctor => "Access patient records and manage clinical workflows",
            Self::Pharmacy => "Manage inventory and process prescriptions",
            Self::Admin => "System management, analytics and security controls",
        }
    }

    /// Whether identities with this role are issued a health ID.
    #[must_use]
    pub const fn carries_health_id(self) -> bool {
        matches!(self, Self::Patient)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "unknown role '{s}' (expected patient, doctor, pharmacy or admin)"
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// SessionPhase
// ---------------------------------------------------------------------------

/// Where a session sits in the auth lifecycle.
///
/// ```text
/// anonymous → role_chosen(R) → authenticated(R') → (logout) → anonymous
///             role_chosen(R) → role_chosen(R2)
///                              authenticated(R') → authenticated(R'') (re-login)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "phase", content = "role")]
pub enum SessionPhase {
    Anonymous,
    RoleChosen(Role),
    Authenticated(Role),
}

impl SessionPhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::RoleChosen(_) => "role_chosen",
            Self::Authenticated(_) => "authenticated",
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => f.write_str(self.as_str()),
            Self::RoleChosen(role) | Self::Authenticated(role) => {
                write!(f, "{}({role})", self.as_str())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_snake_case() {
        let json = serde_json::to_string(&Role::Pharmacy).unwrap();
        assert_eq!(json, "\"pharmacy\"");
        let back: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(back, Role::Admin);
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Doctor".parse::<Role>().unwrap(), Role::Doctor);
        assert_eq!(" patient ".parse::<Role>().unwrap(), Role::Patient);
    }

    #[test]
    fn role_parse_rejects_unknown() {
        let err = "nurse".parse::<Role>().unwrap_err();
        assert!(err.to_string().contains("unknown role 'nurse'"));
    }

    #[test]
    fn only_patients_carry_health_ids() {
        let carriers: Vec<Role> = Role::ALL
            .into_iter()
            .filter(|r| r.carries_health_id())
            .collect();
        assert_eq!(carriers, vec![Role::Patient]);
    }

    #[test]
    fn phase_display_includes_role() {
        assert_eq!(SessionPhase::Anonymous.to_string(), "anonymous");
        assert_eq!(
            SessionPhase::RoleChosen(Role::Doctor).to_string(),
            "role_chosen(doctor)"
        );
        assert_eq!(
            SessionPhase::Authenticated(Role::Admin).to_string(),
            "authenticated(admin)"
        );
    }

    #[test]
    fn phase_serializes_with_tag() {
        let json = serde_json::to_value(SessionPhase::Authenticated(Role::Patient)).unwrap();
        assert_eq!(json["phase"], "authenticated");
        assert_eq!(json["role"], "patient");
    }
}
