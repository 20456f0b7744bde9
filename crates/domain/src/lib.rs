//! # landing-domain
//!
//! Pure domain model for the landing page service.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, render timestamps
//! - Define the **host name** a page is rendered by
//! - Define the **page snapshot**: everything that varies between two renders
//! - Define the **revalidation policy** deciding when a snapshot goes stale
//! - Hold the fixed content of the page (heading, documentation links, assets)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod host;
pub mod page;
pub mod revalidate;
