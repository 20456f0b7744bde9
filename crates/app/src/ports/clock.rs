//! Clock port — source of render timestamps.

use landing_domain::time::Timestamp;

/// Wall-clock time source.
pub trait Clock {
    /// Current time in milliseconds since the Unix epoch.
    fn now(&self) -> Timestamp;
}
