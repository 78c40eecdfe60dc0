//! Error types for vendor operations.

use thiserror::Error;

/// Errors that can occur when calling an external AI vendor.
#[derive(Debug, Error)]
pub enum VendorError {
    /// Vendor client is misconfigured (missing key, bad URL, etc.)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Network-level failure reaching the vendor.
    #[error("network error: {0}")]
    Network(String),

    /// The vendor returned a non-success HTTP status.
    #[error("vendor error ({status}): {message}")]
    Provider { status: u16, message: String },

    /// The vendor responded but the payload was not usable.
    #[error("invalid vendor response: {0}")]
    InvalidResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display() {
        let err = VendorError::Provider {
            status: 429,
            message: "rate limited".to_string(),
        };
        assert_eq!(err.to_string(), "vendor error (429): rate limited");
    }

    #[test]
    fn test_configuration_error_display() {
        let err = VendorError::Configuration("LLM_API_KEY not set".to_string());
        assert!(err.to_string().contains("LLM_API_KEY"));
    }
}
