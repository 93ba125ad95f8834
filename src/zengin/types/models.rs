//! Core data structures shared by the decoder, encoder, validator and
//! aggregator.

use std::fmt;

use clap::ValueEnum;

use crate::zengin::codec::CharEncoding;

/// Decoded field strings of one record, in schema order.
pub type Row = Vec<String>;

/// A recoverable problem found while framing the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The record was shorter than 120 bytes and was padded with spaces.
    Partial { row_index: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Partial { row_index } => {
                write!(f, "row {}: record shorter than 120 bytes, padded", row_index)
            }
        }
    }
}

/// A decoded file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub rows: Vec<Row>,
    /// Framing diagnostics, in row order.
    pub errors: Vec<DecodeError>,
    /// Encoding each row was decoded with. Parallel to `rows`.
    pub encodings: Vec<CharEncoding>,
}

/// Per-field error strings for a document.
///
/// `field_errors[row][field]` is empty when the field is fine. Field 0 of a
/// row may also carry a record-ordering error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub field_errors: Vec<Vec<String>>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.field_errors.iter().flatten().all(String::is_empty)
    }

    pub fn error_count(&self) -> usize {
        self.field_errors
            .iter()
            .flatten()
            .filter(|e| !e.is_empty())
            .count()
    }

    /// Iterate over `(row, field, message)` for every non-empty slot.
    pub fn errors(&self) -> impl Iterator<Item = (usize, usize, &str)> + '_ {
        self.field_errors.iter().enumerate().flat_map(|(row, fields)| {
            fields
                .iter()
                .enumerate()
                .filter(|(_, e)| !e.is_empty())
                .map(move |(field, e)| (row, field, e.as_str()))
        })
    }
}

/// Settlement totals of one trailer group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrailerRecord {
    pub total_count: u64,
    pub total_amount: u64,
    pub transferred_count: u64,
    pub transferred_amount: u64,
    pub failed_count: u64,
    pub failed_amount: u64,
}

impl fmt::Display for TrailerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total {}=>{}, transferred {}=>{}, failed {}=>{}",
            self.total_count,
            self.total_amount,
            self.transferred_count,
            self.transferred_amount,
            self.failed_count,
            self.failed_amount
        )
    }
}

/// Line break written after each record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LineBreak {
    #[default]
    #[value(name = "crlf")]
    CrLf,
    None,
}

impl LineBreak {
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            LineBreak::CrLf => b"\r\n",
            LineBreak::None => b"",
        }
    }
}

/// How the decoder picks a character encoding for each record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum EncodingMode {
    /// Every record is Shift_JIS.
    #[default]
    #[value(aliases = ["sjis", "shift_jis", "shift-jis"])]
    Jis,
    /// Every record is Fujitsu EBCDIC.
    #[value(alias = "fujitsu")]
    Ebcdic,
    /// Decide per record from its first byte.
    #[value(alias = "auto")]
    Detect,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeOptions {
    pub encoding: EncodingMode,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeOptions {
    pub line_break: LineBreak,
    pub encoding: CharEncoding,
}
