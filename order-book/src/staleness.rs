pub const DEFAULT_STALE_AFTER_MS: u64 = 5 * 60 * 1000;

/// Source of the current time in epoch milliseconds.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Always reports the same instant. Handy for reproducible calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StalenessGuard {
    window_ms: u64,
}

impl StalenessGuard {
    pub fn new(window_ms: u64) -> Self {
        StalenessGuard { window_ms }
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Age of a snapshot taken at `update_timestamp_ms`. Negative for clock skew.
    pub fn age_ms(&self, update_timestamp_ms: i64, now_ms: i64) -> i64 {
        now_ms.saturating_sub(update_timestamp_ms)
    }

    pub fn is_stale(&self, update_timestamp_ms: i64, now_ms: i64) -> bool {
        let age = self.age_ms(update_timestamp_ms, now_ms);
        age > 0 && age.unsigned_abs() > self.window_ms
    }

    /// Age of the snapshot when it is stale, `None` when it is fresh enough.
    pub fn check(&self, update_timestamp_ms: i64, now_ms: i64) -> Option<u64> {
        self.is_stale(update_timestamp_ms, now_ms)
            .then(|| self.age_ms(update_timestamp_ms, now_ms).unsigned_abs())
    }
}

impl Default for StalenessGuard {
    fn default() -> Self {
        StalenessGuard::new(DEFAULT_STALE_AFTER_MS)
    }
}
