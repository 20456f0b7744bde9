//! Page service — the current landing page snapshot, reused for the
//! revalidation window.

use tokio::sync::Mutex;

use landing_domain::error::LandingError;
use landing_domain::page::PageSnapshot;
use landing_domain::revalidate::Revalidate;

use crate::ports::{Clock, HostResolver};

/// Whether a snapshot was served from the cache or freshly generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

impl CacheStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hit => "HIT",
            Self::Miss => "MISS",
        }
    }
}

/// A snapshot handed out by [`PageService::current`].
#[derive(Debug, Clone)]
pub struct Rendered {
    pub snapshot: PageSnapshot,
    pub cache: CacheStatus,
}

/// Application service producing the landing page snapshot.
///
/// Holds a single cached snapshot. The lock is held across regeneration so
/// that concurrent requests arriving after expiry wait for one lookup
/// instead of each resolving the host.
pub struct PageService<H, C> {
    host: H,
    clock: C,
    revalidate: Revalidate,
    cache: Mutex<Option<PageSnapshot>>,
}

impl<H: HostResolver, C: Clock> PageService<H, C> {
    /// Create a new service with the given revalidation policy.
    pub fn new(host: H, clock: C, revalidate: Revalidate) -> Self {
        Self {
            host,
            clock,
            revalidate,
            cache: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn revalidate(&self) -> Revalidate {
        self.revalidate
    }

    /// Return the cached snapshot while it is fresh, or render a new one.
    ///
    /// # Errors
    ///
    /// Returns [`LandingError::HostLookup`] (or a validation error) when the
    /// host name cannot be resolved. The cache is left untouched in that case.
    pub async fn current(&self) -> Result<Rendered, LandingError> {
        let mut cache = self.cache.lock().await;
        let now = self.clock.now();

        if let Some(snapshot) = cache.as_ref()
            && self.revalidate.is_fresh(snapshot.rendered_at, now)
        {
            return Ok(Rendered {
                snapshot: snapshot.clone(),
                cache: CacheStatus::Hit,
            });
        }

        let host = self.host.resolve().await?;
        let snapshot = PageSnapshot::new(host, now);
        tracing::debug!(host = %snapshot.host, rendered_at = %snapshot.rendered_at, "page regenerated");
        *cache = Some(snapshot.clone());

        Ok(Rendered {
            snapshot,
            cache: CacheStatus::Miss,
        })
    }

    /// Drop the cached snapshot so the next call regenerates it.
    pub async fn invalidate(&self) {
        let previous = self.cache.lock().await.take();
        if previous.is_some() {
            tracing::debug!("page snapshot invalidated");
        }
    }
}
