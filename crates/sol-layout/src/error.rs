//! Error types for layout parsing.

use thiserror::Error;

/// Errors that can occur while decoding account byte layouts.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Account data ends before the layout does. The message names the
    /// account kind and the length that was required.
    #[error("{0}")]
    TooShort(String),
}
