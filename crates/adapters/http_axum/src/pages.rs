//! Server-side rendered HTML pages.

pub mod home;

use axum::Router;
use axum::routing::{get, post};

use landing_app::ports::{Clock, HostResolver};

use crate::state::AppState;

/// Build the sub-router for SSR HTML pages.
pub fn routes<H, C>() -> Router<AppState<H, C>>
where
    H: HostResolver + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index::<H, C>))
        .route("/revalidate", post(home::revalidate::<H, C>))
}
