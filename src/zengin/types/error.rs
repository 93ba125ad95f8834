//! Custom error types for the zengin crate.
//!
//! `ZenginError` is reserved for broken invariants: a caller handing the
//! encoder mismatched tables, or a framing bug in the decoder. Problems in
//! the file itself are never errors; they surface as data in
//! [`Document::errors`](super::models::Document) and
//! [`ValidationReport`](super::models::ValidationReport).

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum ZenginError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The encoder was given a different number of rows and schemas.
    #[error("Row count mismatch: {rows} rows but {schemas} field definitions")]
    RowCountMismatch { rows: usize, schemas: usize },

    /// A row does not have as many fields as its schema declares.
    #[error("Field count mismatch in row {row_index}: expected {expected}, but found {found}")]
    FieldCountMismatch {
        row_index: usize,
        expected: usize,
        found: usize,
    },

    /// The decoder stopped before consuming the whole buffer.
    #[error("Framing stopped at offset {offset} of {len} bytes")]
    FramingInvariant { offset: usize, len: usize },

    /// A record type digit outside {1, 2, 8, 9}.
    #[error("Unknown record type: {0}")]
    UnknownRecordType(u32),
}

/// A convenience `Result` type alias using the crate's `ZenginError` type.
pub type Result<T> = std::result::Result<T, ZenginError>;
