//! # landing-adapter-system
//!
//! Driven adapters backed by the operating system.
//!
//! - [`SystemHostResolver`] reads the machine's host name on every call
//!   through the [`hostname`](https://docs.rs/hostname) crate.
//! - [`SystemClock`] reads the wall clock.
//!
//! ## Dependency rule
//! Depends on `landing-app` (port traits) and `landing-domain` (value types).

use landing_app::ports::{Clock, HostResolver};
use landing_domain::error::{HostLookupError, LandingError};
use landing_domain::host::HostName;
use landing_domain::time::{self, Timestamp};

/// Resolves the host name of the running machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostResolver;

impl HostResolver for SystemHostResolver {
    async fn resolve(&self) -> Result<HostName, LandingError> {
        // gethostname is a blocking syscall; keep it off the reactor threads.
        let raw = tokio::task::spawn_blocking(hostname::get)
            .await
            .map_err(HostLookupError::new)?
            .map_err(|err| {
                tracing::warn!(error = %err, "hostname lookup failed");
                HostLookupError::new(err)
            })?;
        Ok(HostName::try_from(raw)?)
    }
}

/// Wall clock in milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        time::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_resolve_non_empty_host_name() {
        let host = SystemHostResolver.resolve().await.unwrap();
        assert!(!host.as_str().is_empty());
    }

    #[tokio::test]
    async fn should_match_hostname_crate() {
        let expected = hostname::get().unwrap().into_string().unwrap();
        let host = SystemHostResolver.resolve().await.unwrap();
        assert_eq!(host.as_str(), expected.trim());
    }

    #[test]
    fn should_tick_forward() {
        let first = SystemClock.now();
        let second = SystemClock.now();
        assert!(second >= first);
    }
}
