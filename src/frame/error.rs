//! Reasons a line is rejected by the frame parser

use crate::domain::Crc32Value;
use thiserror::Error;

/// Why a single line did not yield a frame
///
/// The decoder discards every variant the same way; the distinction exists
/// for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("blank line")]
    Blank,

    #[error("no field separator")]
    MissingSeparator,

    #[error("unknown frame kind {0:?}")]
    UnknownKind(String),

    #[error("expected {expected} fields after the kind tag, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("field {field} is not a valid number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("payload is not valid base64: {0}")]
    InvalidEnvelope(#[from] base64::DecodeError),

    #[error("declared size {declared} but payload has {actual} bytes")]
    SizeMismatch { declared: usize, actual: usize },

    #[error("checksum mismatch: declared {declared}, computed {computed}")]
    ChecksumMismatch {
        declared: Crc32Value,
        computed: Crc32Value,
    },
}
