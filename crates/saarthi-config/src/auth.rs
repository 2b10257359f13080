//! Mock authentication settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const fn default_delay_ms() -> u64 {
    1000
}

const fn default_demo_accounts() -> bool {
    true
}

/// Longest simulated delay accepted (one minute).
pub const MAX_SIMULATED_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Latency applied before login and signup resolve, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub simulated_delay_ms: u64,

    /// Seed the directory with the four demo accounts.
    #[serde(default = "default_demo_accounts")]
    pub demo_accounts: bool,
}

impl AuthConfig {
    #[must_use]
    pub const fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_delay_ms(),
            demo_accounts: default_demo_accounts(),
        }
    }
}
