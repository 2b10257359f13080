use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// Authenticated user's profile record.
///
/// Produced by `saarthi-auth` on login or signup and consumed by whatever
/// mounts the dashboards. Never edited in place: a fresh login or signup
/// replaces the whole record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub email: String,
    /// Display name. Derived from the email's local part for synthesized logins.
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Present for patients only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_id: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Role-specific details captured at signup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<RoleProfile>,
}

impl Identity {
    /// Local part of an email address (everything before the first `@`).
    ///
    /// Returns the whole input when there is no `@`.
    #[must_use]
    pub fn display_name_from_email(email: &str) -> &str {
        email.split('@').next().unwrap_or(email)
    }
}

/// Extra signup fields that only apply to some roles.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum RoleProfile {
    Doctor {
        specialization: String,
        license_number: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hospital_name: Option<String>,
    },
    Pharmacy {
        pharmacy_name: String,
        license_number: String,
        address: String,
    },
}

impl RoleProfile {
    /// The role these details belong to.
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Doctor { .. } => Role::Doctor,
            Self::Pharmacy { .. } => Role::Pharmacy,
        }
    }
}
