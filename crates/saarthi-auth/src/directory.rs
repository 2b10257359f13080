use std::collections::HashMap;

use chrono::{DateTime, Utc};
use saarthi_core::{Identity, Role};

/// In-memory email → identity table standing in for a real identity provider.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    entries: HashMap<String, Identity>,
}

impl Directory {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The four demo accounts, one per role, stamped with `created_at`.
    #[must_use]
    pub fn demo(created_at: DateTime<Utc>) -> Self {
        let mut directory = Self::empty();
        for identity in [
            demo_identity(
                "p1",
                "patient@demo.com",
                "John Patient",
                Role::Patient,
                Some("+1234567890"),
                Some("HID-2024-001234"),
                created_at,
            ),
            demo_identity(
                "d1",
                "doctor@demo.com",
                "Dr. Sarah Smith",
                Role::Doctor,
                Some("+1234567891"),
                None,
                created_at,
            ),
            demo_identity(
                "ph1",
                "pharmacy@demo.com",
                "MediCare Pharmacy",
                Role::Pharmacy,
                Some("+1234567892"),
                None,
                created_at,
            ),
            demo_identity(
                "a1",
                "admin@demo.com",
                "Admin User",
                Role::Admin,
                None,
                None,
                created_at,
            ),
        ] {
            directory.insert(identity);
        }
        directory
    }

    /// Add or replace the entry for `identity.email`.
    pub fn insert(&mut self, identity: Identity) -> Option<Identity> {
        self.entries.insert(identity.email.clone(), identity)
    }

    /// Exact, case-sensitive email lookup.
    #[must_use]
    pub fn lookup(&self, email: &str) -> Option<&Identity> {
        self.entries.get(email)
    }

    /// Entries ordered by role, then email.
    #[must_use]
    pub fn accounts(&self) -> Vec<&Identity> {
        let mut accounts: Vec<&Identity> = self.entries.values().collect();
        accounts.sort_by(|a, b| a.role.cmp(&b.role).then_with(|| a.email.cmp(&b.email)));
        accounts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn demo_identity(
    id: &str,
    email: &str,
    name: &str,
    role: Role,
    phone: Option<&str>,
    health_id: Option<&str>,
    created_at: DateTime<Utc>,
) -> Identity {
    Identity {
        id: id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        role,
        phone: phone.map(str::to_string),
        health_id: health_id.map(str::to_string),
        created_at,
        profile: None,
    }
}
