//! Revalidation policy — how long a rendered page may be reused.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::time::Timestamp;

/// Default reuse window for a rendered page.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(10);

/// Window during which a previously rendered page is served again instead
/// of being regenerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Duration", into = "Duration")]
pub struct Revalidate {
    interval: Duration,
}

impl Revalidate {
    /// Build a policy from a non-zero interval.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroRevalidateInterval`] when `interval` is zero.
    pub fn new(interval: Duration) -> Result<Self, ValidationError> {
        if interval.is_zero() {
            return Err(ValidationError::ZeroRevalidateInterval);
        }
        Ok(Self { interval })
    }

    /// Shorthand for [`Revalidate::new`] with a whole number of seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroRevalidateInterval`] when `secs` is zero.
    pub fn from_secs(secs: u64) -> Result<Self, ValidationError> {
        Self::new(Duration::from_secs(secs))
    }

    #[must_use]
    pub fn interval(self) -> Duration {
        self.interval
    }

    /// Whether a page rendered at `rendered_at` may still be served at `now`.
    ///
    /// A clock that went backwards keeps the page fresh rather than forcing
    /// a regeneration on every request.
    #[must_use]
    pub fn is_fresh(self, rendered_at: Timestamp, now: Timestamp) -> bool {
        let elapsed = now.millis_since(rendered_at);
        if elapsed < 0 {
            return true;
        }
        u128::from(elapsed.unsigned_abs()) < self.interval.as_millis()
    }
}

impl Default for Revalidate {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl TryFrom<Duration> for Revalidate {
    type Error = ValidationError;

    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Revalidate> for Duration {
    fn from(value: Revalidate) -> Self {
        value.interval
    }
}
