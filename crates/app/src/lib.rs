//! # landing-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `HostResolver` — name of the machine serving the render
//!   - `Clock` — wall-clock time used to stamp renders
//! - Define the **driving/inbound** use-case:
//!   - `PageService` — hand out the current page snapshot, regenerating it
//!     once the revalidation window has elapsed
//!
//! ## Dependency rule
//! Depends on `landing-domain` only (plus `tokio::sync` for the cache lock).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
