//! Error types for the combinatorial codec.
//!
//! Rank and select themselves never fail: out-of-range positions clamp
//! and out-of-range ranks come back as `None`. The codec is the one
//! surface with real preconditions, and those violations are typed
//! here.

use thiserror::Error;

/// Error variants for codec precondition violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A block value did not fit in the 15-bit codec width.
    #[error("block {0:#06x} wider than 15 bits")]
    BlockTooWide(u16),

    /// The stated class did not match the block's actual popcount.
    #[error("class {0} does not match block population {1}")]
    ClassMismatch(usize, usize),

    /// A decode width exceeded the 15-bit table range.
    #[error("width {0} exceeds the 15-bit codec limit")]
    WidthTooLarge(usize),

    /// A class larger than the decode width was requested.
    #[error("class {0} is invalid for width {1}")]
    InvalidClass(usize, usize),

    /// An offset at or past C(width, class) was requested.
    #[error("offset {0} out of range for class {1}")]
    OffsetOutOfRange(u16, usize),
}

/// A specialized Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
