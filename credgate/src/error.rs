//! Failure modes of the credential bootstrap. Both variants are fatal: the
//! caller is expected to abort initialization rather than retry.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The secure random source could not produce bytes.
    #[error("secure random source unavailable: {0}")]
    EntropyUnavailable(String),
    /// The password hashing primitive rejected its parameters or input.
    #[error("password hashing unavailable: {0}")]
    HashingUnavailable(String),
}

impl BootstrapError {
    /// Short name of the primitive that failed, for startup diagnostics.
    pub fn primitive(&self) -> &'static str {
        match self {
            BootstrapError::EntropyUnavailable(_) => "random source",
            BootstrapError::HashingUnavailable(_) => "password hash",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BootstrapError;

    #[test]
    fn names_the_failing_primitive() {
        let err = BootstrapError::EntropyUnavailable("getrandom failed".to_string());
        assert_eq!(err.primitive(), "random source");
        assert_eq!(format!("{err}"), "secure random source unavailable: getrandom failed");

        let err = BootstrapError::HashingUnavailable("bad params".to_string());
        assert_eq!(err.primitive(), "password hash");
        assert!(format!("{err}").contains("bad params"));
    }
}
