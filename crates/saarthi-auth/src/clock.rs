//! Time source for the session store.
//!
//! Login and signup both wait out a fixed simulated network delay and stamp
//! new identities with the current time. Routing both through [`Clock`] lets
//! tests run without real timers.

use std::future::Future;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Suspend the caller for `duration`.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Wall clock backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

/// Deterministic clock for tests.
///
/// `sleep` returns immediately, advances `now` by the requested duration, and
/// adds it to a running total.
#[derive(Debug)]
pub struct ManualClock {
    now_millis: AtomicI64,
    slept_millis: AtomicU64,
    sleeps: AtomicU64,
}

impl ManualClock {
    #[must_use]
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            now_millis: AtomicI64::new(start.timestamp_millis()),
            slept_millis: AtomicU64::new(0),
            sleeps: AtomicU64::new(0),
        }
    }

    pub fn advance(&self, by: Duration) {
        let millis = i64::try_from(by.as_millis()).unwrap_or(i64::MAX);
        self.now_millis.fetch_add(millis, Ordering::SeqCst);
    }

    /// Total simulated time spent in `sleep`.
    #[must_use]
    pub fn slept(&self) -> Duration {
        Duration::from_millis(self.slept_millis.load(Ordering::SeqCst))
    }

    /// Number of `sleep` calls so far.
    #[must_use]
    pub fn sleep_count(&self) -> u64 {
        self.sleeps.load(Ordering::SeqCst)
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::starting_at(DateTime::<Utc>::UNIX_EPOCH + TimeDelta::days(19_723))
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.now_millis.load(Ordering::SeqCst))
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self.slept_millis.fetch_add(millis, Ordering::SeqCst);
        self.sleeps.fetch_add(1, Ordering::SeqCst);
        self.advance(duration);
        std::future::ready(())
    }
}
