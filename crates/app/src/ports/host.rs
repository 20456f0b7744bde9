//! Host resolver port — who is rendering the page.

use std::future::Future;

use landing_domain::error::LandingError;
use landing_domain::host::HostName;

/// Looks up the name of the machine executing a render.
///
/// Called once per regeneration; implementations should not cache.
pub trait HostResolver {
    /// Resolve the current host name.
    fn resolve(&self) -> impl Future<Output = Result<HostName, LandingError>> + Send;
}
