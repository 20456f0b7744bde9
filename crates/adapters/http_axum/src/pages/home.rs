//! Landing page — logo, heading, render stamp, reload control, doc links.

use askama::Template;
use axum::extract::State;
use axum::http::{HeaderName, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};

use landing_app::ports::{Clock, HostResolver};
use landing_domain::page::{self, DocLink, Image, PageSnapshot};

use crate::error::PageError;
use crate::reload::ReloadControl;
use crate::state::AppState;

/// Response header telling whether the page came from the snapshot cache.
pub static RENDER_CACHE: HeaderName = HeaderName::from_static("x-render-cache");

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate<'a> {
    heading: &'static str,
    logo: Image,
    rendered_at: i64,
    host: &'a str,
    reload_control: String,
    doc_links: [DocLink; 2],
}

/// Render the landing page for a snapshot.
///
/// The output depends on nothing but `snapshot`, so the same snapshot always
/// yields the same bytes.
///
/// # Errors
///
/// Returns an [`askama::Error`] if a template fails to render.
pub fn render_home(snapshot: &PageSnapshot) -> Result<String, askama::Error> {
    HomeTemplate {
        heading: page::HEADING,
        logo: page::LOGO,
        rendered_at: snapshot.rendered_at.as_millis(),
        host: snapshot.host.as_str(),
        reload_control: ReloadControl::default().to_html()?,
        doc_links: page::DOC_LINKS,
    }
    .render()
}

/// `GET /` — the landing page.
///
/// # Errors
///
/// Returns a [`PageError`] (rendered as a 500 page) when the host name
/// cannot be resolved or the template fails.
pub async fn index<H, C>(State(state): State<AppState<H, C>>) -> Result<Response, PageError>
where
    H: HostResolver + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let rendered = state.page_service.current().await?;
    let body = render_home(&rendered.snapshot)?;
    let max_age = state.page_service.revalidate().interval().as_secs();

    Ok((
        [
            (
                header::CACHE_CONTROL,
                format!("s-maxage={max_age}, stale-while-revalidate"),
            ),
            (RENDER_CACHE.clone(), rendered.cache.as_str().to_string()),
        ],
        Html(body),
    )
        .into_response())
}

/// `POST /revalidate` — drop the cached page so the next request renders anew.
pub async fn revalidate<H, C>(State(state): State<AppState<H, C>>) -> StatusCode
where
    H: HostResolver + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    state.page_service.invalidate().await;
    tracing::info!("landing page revalidation requested");
    StatusCode::NO_CONTENT
}
