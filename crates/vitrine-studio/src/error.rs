//! Studio error types.

use thiserror::Error;

/// Errors that can occur in authoring/view state transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StudioError {
    /// A remote call for this trigger is already pending.
    #[error("A request is already in flight")]
    CallInFlight,

    /// A print/export flow is already running.
    #[error("A print or export is already in progress")]
    ExportInFlight,

    /// Print flow stepped out of order.
    #[error("Invalid print flow transition from {0}")]
    InvalidPrintTransition(&'static str),

    /// Description suggestion requested for an unnamed product.
    #[error("Product needs a name before requesting a description")]
    UnnamedProduct,
}
