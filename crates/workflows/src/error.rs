//! Error types for workflow operations.

use thiserror::Error;
use vendor_core::VendorError;

/// Errors that can occur while running a workflow.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// An upstream vendor call failed.
    #[error(transparent)]
    Vendor(#[from] VendorError),

    /// A vendor replied, but the reply could not be used.
    #[error("invalid workflow response: {0}")]
    InvalidResponse(String),
}
