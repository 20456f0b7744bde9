//! HTTP error response mapping.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use landing_domain::error::LandingError;

/// Generic error page; details stay in the logs.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    reason: &'static str,
}

/// Anything that prevents a page from being rendered.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("unable to produce page snapshot")]
    Landing(#[from] LandingError),

    #[error("unable to render template")]
    Template(#[from] askama::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match &self {
            Self::Landing(err) => tracing::error!(error = ?err, "page snapshot failed"),
            Self::Template(err) => tracing::error!(error = %err, "template rendering failed"),
        }

        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let page = ErrorTemplate {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error"),
        };
        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "error page rendering failed");
                (status, "internal server error").into_response()
            }
        }
    }
}
