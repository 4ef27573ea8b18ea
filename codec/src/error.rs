//! Error types for encoding and decoding

use thiserror::Error;

/// Error type for codec operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("reading out of boundary")]
    EndOfBuffer,
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
    #[error("invalid size header: {0:#04x}")]
    InvalidSizeHeader(u8), // leading byte
    #[error("size too large: {0}")]
    SizeTooLarge(u64),
    #[error("invalid length: {0}")]
    InvalidLength(usize),
}
