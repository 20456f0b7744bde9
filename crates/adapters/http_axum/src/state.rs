//! Shared application state for axum handlers.

use std::sync::Arc;

use landing_app::ports::{Clock, HostResolver};
use landing_app::services::page_service::PageService;

/// Application state shared across all axum handlers.
///
/// Generic over the host resolver and clock to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<H, C> {
    /// Landing page snapshot service.
    pub page_service: Arc<PageService<H, C>>,
}

impl<H, C> Clone for AppState<H, C> {
    fn clone(&self) -> Self {
        Self {
            page_service: Arc::clone(&self.page_service),
        }
    }
}

impl<H, C> AppState<H, C>
where
    H: HostResolver + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(page_service: PageService<H, C>) -> Self {
        Self {
            page_service: Arc::new(page_service),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    pub fn from_arc(page_service: Arc<PageService<H, C>>) -> Self {
        Self { page_service }
    }
}
