//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use landing_app::ports::{Clock, HostResolver};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the landing page at `/`, a health probe at `/health`, and falls
/// back to static files from `public_dir` for every other path.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<H, C>(state: AppState<H, C>, public_dir: impl AsRef<Path>) -> Router
where
    H: HostResolver + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::pages::routes())
        .fallback_service(ServeDir::new(public_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
