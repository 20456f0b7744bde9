//! End-to-end smoke tests for the full landingd stack.
//!
//! Each test wires the real OS adapters, the real page service and the real
//! axum router, and exercises the HTTP layer via `tower::ServiceExt::oneshot`
//! — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use landing_adapter_http_axum::router;
use landing_adapter_http_axum::state::AppState;
use landing_adapter_system::{SystemClock, SystemHostResolver};
use landing_app::services::page_service::PageService;
use landing_domain::revalidate::Revalidate;
use tower::ServiceExt;

const PUBLIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../../public");

/// Build a fully-wired router with a long revalidation window.
fn app() -> axum::Router {
    let page_service = PageService::new(
        SystemHostResolver,
        SystemClock,
        Revalidate::from_secs(3600).unwrap(),
    );
    router::build(AppState::new(page_service), PUBLIC_DIR)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_string(resp: axum::response::Response) -> String {
    String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap()
}

/// Text between the first `<strong>` pair following `marker`.
fn strong_after<'a>(body: &'a str, marker: &str) -> &'a str {
    let rest = &body[body.find(marker).unwrap() + marker.len()..];
    let start = rest.find("<strong>").unwrap() + "<strong>".len();
    let end = rest[start..].find("</strong>").unwrap();
    &rest[start..start + end]
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app().oneshot(get("/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Landing page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_landing_page_with_machine_host_name() {
    let resp = app().oneshot(get("/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        resp.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );

    let body = body_string(resp).await;
    let expected = hostname::get().unwrap().into_string().unwrap();
    assert_eq!(strong_after(&body, "served by"), expected.trim());
}

#[tokio::test]
async fn should_render_numeric_timestamp() {
    let resp = app().oneshot(get("/")).await.unwrap();
    let body = body_string(resp).await;

    let stamp = strong_after(&body, "Last server date is");
    let millis: i64 = stamp.parse().unwrap();
    assert!(millis > 0);
    assert_eq!(body.matches(stamp).count(), 1);
}

#[tokio::test]
async fn should_serve_identical_page_within_window() {
    let app = app();

    let first = body_string(app.clone().oneshot(get("/")).await.unwrap()).await;
    let second = body_string(app.oneshot(get("/")).await.unwrap()).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn should_link_to_platformatic_docs() {
    let body = body_string(app().oneshot(get("/")).await.unwrap()).await;

    assert!(body.contains(r#"href="https://docs.platformatic.dev/docs/next/guides""#));
    assert!(body.contains(r#"href="https://docs.platformatic.dev/""#));
}

// ---------------------------------------------------------------------------
// Static assets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serve_referenced_assets() {
    for asset in ["/next.svg", "/file.svg", "/globe.svg"] {
        let resp = app().oneshot(get(asset)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "{asset}");
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "image/svg+xml");
    }
}
