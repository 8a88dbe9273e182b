//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `IxError` as one variant
//! where they need to surface configuration problems.

use thiserror::Error;

/// The top-level error type for `ix-core`.
#[derive(Debug, Error)]
pub enum IxError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `ix-core`.
pub type IxResult<T> = Result<T, IxError>;
