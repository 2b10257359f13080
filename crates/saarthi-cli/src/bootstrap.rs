use saarthi_auth::{Clock, Directory, SessionStore, SystemClock};
use saarthi_config::SaarthiConfig;

pub fn load_config() -> anyhow::Result<SaarthiConfig> {
    SaarthiConfig::load_with_dotenv().map_err(anyhow::Error::from)
}

/// Build a session store on the wall clock from configuration.
pub fn build_store(config: &SaarthiConfig) -> SessionStore<SystemClock> {
    with_config(config, SystemClock)
}

/// Build a session store on any clock from configuration.
pub fn with_config<C: Clock>(config: &SaarthiConfig, clock: C) -> SessionStore<C> {
    let directory = if config.auth.demo_accounts {
        Directory::demo(clock.now())
    } else {
        tracing::debug!("demo accounts disabled; every login synthesizes an identity");
        Directory::empty()
    };

    SessionStore::new(directory, clock).with_delay(config.auth.simulated_delay())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use saarthi_auth::ManualClock;

    use super::*;

    #[test]
    fn store_follows_auth_config() {
        let mut config = SaarthiConfig::default();
        config.auth.simulated_delay_ms = 5;
        config.auth.demo_accounts = false;

        let store = with_config(&config, ManualClock::default());
        assert_eq!(store.delay(), Duration::from_millis(5));
        assert!(store.directory().is_empty());
    }

    #[test]
    fn default_config_seeds_demo_accounts() {
        let store = build_store(&SaarthiConfig::default());
        assert_eq!(store.directory().len(), 4);
        assert_eq!(store.delay(), Duration::from_secs(1));
    }
}
