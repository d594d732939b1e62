use thiserror::Error;

use crate::Format;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("converting format {format:?} is not supported without the native DXTn library")]
    Unsupported { format: Format },

    #[error("expected buffer to have at least {expected} elements but found {actual}")]
    NotEnoughData { expected: usize, actual: usize },
}
