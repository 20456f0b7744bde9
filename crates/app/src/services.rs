//! Application services (use-cases).

pub mod page_service;
