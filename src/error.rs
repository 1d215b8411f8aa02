//! Error handling for page operations
//!
//! None of these are fatal: they are business-rule rejections that the
//! controller either surfaces as a toast or skips silently.

use crate::elements::ElementId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    /// A display or control target is not part of the page markup.
    #[error("Element `{0}` is not present on the page")]
    MissingElement(ElementId),

    /// The viewer has no voting power left.
    #[error("Insufficient voting power!")]
    InsufficientPower,

    /// The charity key is outside the fixed voting set.
    #[error("Unknown charity: {0}")]
    UnknownCharity(String),
}
