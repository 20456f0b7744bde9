//! Render timestamps.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Milliseconds elapsed since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Milliseconds from `earlier` to `self`, negative when `earlier` is in the future.
    #[must_use]
    pub const fn millis_since(self, earlier: Self) -> i64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Return the current wall-clock time.
#[must_use]
pub fn now() -> Timestamp {
    Timestamp(Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_current_epoch_millis() {
        let before = Utc::now().timestamp_millis();
        let ts = now();
        let after = Utc::now().timestamp_millis();
        assert!(ts.as_millis() >= before);
        assert!(ts.as_millis() <= after);
    }

    #[test]
    fn should_display_as_plain_integer() {
        assert_eq!(Timestamp::from_millis(1_700_000_000_123).to_string(), "1700000000123");
    }

    #[test]
    fn should_compute_negative_elapsed_when_clock_goes_backwards() {
        let later = Timestamp::from_millis(1_000);
        let earlier = Timestamp::from_millis(900);
        assert_eq!(later.millis_since(earlier), 100);
        assert_eq!(earlier.millis_since(later), -100);
    }
}
