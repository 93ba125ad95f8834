//! # Record Framing & Field Decoding
//!
//! Splits a raw byte buffer into 120-byte records and each record into its
//! fields.
//!
//! ## Framing rules
//! 1.  A record is the next 120 bytes, or fewer if a CR or LF comes first.
//! 2.  After a record, one line break is consumed: CRLF, a lone CR, a lone
//!     LF, or nothing at all.
//! 3.  Short records are right-padded with encoded spaces and reported as
//!     [`DecodeError::Partial`]. Decoding never aborts on bad data.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::zengin::codec::CharEncoding;
use crate::zengin::types::error::{Result, ZenginError};
use crate::zengin::types::models::{DecodeError, DecodeOptions, Document, EncodingMode, Row};
use crate::zengin::types::schema::{FieldDef, RecordKind, RECORD_LEN};
use crate::zengin::utils::{self, CR, LF};

/// Cursor over the raw input.
struct Framer<'a> {
    input: &'a [u8],
    index: usize,
}

impl<'a> Framer<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self { input, index: 0 }
    }

    /// True when only an optional trailing line break is left.
    fn at_end(&self) -> bool {
        self.index + utils::line_break_len(self.input, self.index) == self.input.len()
    }

    fn has_remaining(&self) -> bool {
        self.index < self.input.len()
    }

    /// The payload of the next record, without its line break.
    fn next_record(&mut self) -> Option<&'a [u8]> {
        if self.at_end() {
            return None;
        }

        let input = self.input;
        let window_end = (self.index + RECORD_LEN).min(input.len());
        let window = &input[self.index..window_end];
        let len = window
            .iter()
            .position(|&b| b == CR || b == LF)
            .unwrap_or(window.len());
        let payload = &window[..len];

        self.index += len;
        self.index += utils::line_break_len(input, self.index);
        Some(payload)
    }
}

fn choose_encoding(mode: EncodingMode, first_byte: Option<u8>) -> CharEncoding {
    match mode {
        EncodingMode::Jis => CharEncoding::Jis,
        EncodingMode::Ebcdic => CharEncoding::Ebcdic,
        EncodingMode::Detect => CharEncoding::detect(first_byte).unwrap_or_default(),
    }
}

/// Decode a whole file.
///
/// # Errors
/// Only `ZenginError::FramingInvariant`, which means the framer itself is
/// broken. Malformed input is reported through [`Document::errors`].
pub fn decode_document(input: &[u8], options: &DecodeOptions) -> Result<Document> {
    let mut framer = Framer::new(input);
    let mut document = Document::default();

    while framer.has_remaining() {
        let Some(payload) = framer.next_record() else {
            break;
        };
        let row_index = document.rows.len();
        let encoding = choose_encoding(options.encoding, payload.first().copied());

        let mut record = payload.to_vec();
        if record.len() < RECORD_LEN {
            debug!(
                "Row {}: partial record of {} bytes, padding to {}",
                row_index,
                record.len(),
                RECORD_LEN
            );
            record.resize(RECORD_LEN, encoding.space());
            document.errors.push(DecodeError::Partial { row_index });
        }

        let kind = RecordKind::from_row(&[encoding.decode(&record[..1])]);
        debug!("Row {}: {:?} record ({})", row_index, kind, encoding.name());
        document.rows.push(decode_record(&record, kind.field_defs(), encoding));
        document.encodings.push(encoding);
    }

    if !framer.at_end() {
        return Err(ZenginError::FramingInvariant {
            offset: framer.index,
            len: input.len(),
        });
    }

    info!(
        "Decoded {} records ({} partial) from {} bytes",
        document.rows.len(),
        document.errors.len(),
        input.len()
    );
    Ok(document)
}

/// Read and decode the file at `path`.
///
/// # Errors
/// `ZenginError::Io` if the file cannot be read, otherwise as
/// [`decode_document`].
pub fn read_document<P: AsRef<Path>>(path: P, options: &DecodeOptions) -> Result<Document> {
    let input = fs::read(path)?;
    decode_document(&input, options)
}

/// Slice a full record by the cumulative field sizes and decode each slice.
pub fn decode_record(record: &[u8], field_defs: &[FieldDef], encoding: CharEncoding) -> Row {
    let mut offset = 0;
    field_defs
        .iter()
        .map(|def| {
            let end = (offset + def.size).min(record.len());
            let chunk = &record[offset.min(end)..end];
            offset = end;
            encoding.decode(chunk)
        })
        .collect()
}
