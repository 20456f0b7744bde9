//! # landing-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **server-side-rendered landing page** at `/`, reusing the
//!   snapshot handed out by `PageService` for the revalidation window
//! - Render the **reload control**, the only piece of client-side behaviour
//! - Serve the static assets the page references (`/next.svg`, …) from a
//!   public directory
//! - Map render failures into a generic HTML error page
//!
//! ## Dependency rule
//! Depends on `landing-app` (for port traits and services) and `landing-domain`
//! (for the values rendered into the page). Never leaks axum types into the domain.

pub mod error;
pub mod pages;
pub mod reload;
pub mod router;
pub mod state;
