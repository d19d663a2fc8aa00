//! Presenter errors
//!
//! Every failure is surfaced directly to the caller - there are no retries
//! and no fallback presenter.

use thiserror::Error;

/// Errors from presenter resolution and field dispatch
#[derive(Debug, Error)]
pub enum PresentError {
    #[error("Presenter namespace not registered: {0}")]
    NamespaceNotFound(String),

    #[error("Presenter not found: {name} in namespace {namespace}")]
    PresenterNotFound { namespace: String, name: String },

    #[error("Presenter already registered: {namespace}::{name}")]
    DuplicatePresenter { namespace: String, name: String },

    #[error("Presenter constructor incompatible with subject: {0}")]
    ConstructorMismatch(String),

    #[error("No field '{0}' on presenter or subject")]
    FieldMissing(String),

    #[error("Subject serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result alias for presenter operations
pub type PresentResult<T> = Result<T, PresentError>;
