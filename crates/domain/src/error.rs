//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`LandingError`] via `#[from]`.

/// Top-level error for anything that can go wrong while producing a page.
#[derive(Debug, thiserror::Error)]
pub enum LandingError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("host lookup failed")]
    HostLookup(#[from] HostLookupError),
}

/// A domain invariant was violated.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("host name must not be empty")]
    EmptyHostName,

    #[error("host name is not valid unicode")]
    NonUnicodeHostName,

    #[error("revalidation interval must be non-zero")]
    ZeroRevalidateInterval,
}

/// The machine's host name could not be resolved.
#[derive(Debug, thiserror::Error)]
#[error("unable to resolve the host name")]
pub struct HostLookupError {
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl HostLookupError {
    /// Wrap the underlying cause of a failed lookup.
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_landing_error() {
        let err: LandingError = ValidationError::EmptyHostName.into();
        assert!(matches!(
            err,
            LandingError::Validation(ValidationError::EmptyHostName)
        ));
    }

    #[test]
    fn should_keep_lookup_cause_as_source() {
        let io = std::io::Error::other("uname failed");
        let err: LandingError = HostLookupError::new(io).into();
        let source = std::error::Error::source(&err).unwrap();
        let cause = std::error::Error::source(source).unwrap();
        assert_eq!(cause.to_string(), "uname failed");
    }
}
