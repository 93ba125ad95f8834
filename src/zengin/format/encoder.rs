//! Serialization of rows back into fixed-width records.

use std::fs;
use std::path::Path;

use log::info;

use crate::zengin::codec::CharEncoding;
use crate::zengin::types::error::{Result, ZenginError};
use crate::zengin::types::models::{Document, EncodeOptions, LineBreak, Row};
use crate::zengin::types::schema::{get_record_type, FieldDef, FieldType};

/// Encode `rows` with one schema per row, all in `options.encoding`.
///
/// # Errors
/// Returns `RowCountMismatch` or `FieldCountMismatch` if `rows` and
/// `field_defs` do not line up. Those are caller bugs, not data problems.
pub fn encode_document(
    rows: &[Row],
    field_defs: &[&[FieldDef]],
    options: &EncodeOptions,
) -> Result<Vec<u8>> {
    encode_rows(rows, field_defs, |_| options.encoding, options.line_break)
}

impl Document {
    /// Re-encode every row with the encoding it was decoded with, using the
    /// schema selected by its record type.
    pub fn to_bytes(&self, line_break: LineBreak) -> Result<Vec<u8>> {
        let field_defs: Vec<&[FieldDef]> = self.rows.iter().map(|r| get_record_type(r.as_slice())).collect();
        encode_rows(
            &self.rows,
            &field_defs,
            |i| self.encodings.get(i).copied().unwrap_or_default(),
            line_break,
        )
    }

    /// Re-encode the document and write it to `path`. Returns the number of
    /// bytes written.
    pub fn write_file<P: AsRef<Path>>(&self, path: P, line_break: LineBreak) -> Result<usize> {
        let bytes = self.to_bytes(line_break)?;
        fs::write(path, &bytes)?;
        Ok(bytes.len())
    }
}

fn encode_rows(
    rows: &[Row],
    field_defs: &[&[FieldDef]],
    encoding_of: impl Fn(usize) -> CharEncoding,
    line_break: LineBreak,
) -> Result<Vec<u8>> {
    if rows.len() != field_defs.len() {
        return Err(ZenginError::RowCountMismatch {
            rows: rows.len(),
            schemas: field_defs.len(),
        });
    }

    let mut out = Vec::new();
    for (row_index, (fields, defs)) in rows.iter().zip(field_defs).enumerate() {
        if fields.len() != defs.len() {
            return Err(ZenginError::FieldCountMismatch {
                row_index,
                expected: defs.len(),
                found: fields.len(),
            });
        }
        write_record(fields, defs, encoding_of(row_index), &mut out);
        out.extend_from_slice(line_break.as_bytes());
    }

    info!("Encoded {} records into {} bytes", rows.len(), out.len());
    Ok(out)
}

fn write_record(fields: &[String], defs: &[FieldDef], encoding: CharEncoding, out: &mut Vec<u8>) {
    for (value, def) in fields.iter().zip(defs) {
        out.extend_from_slice(&fit_field(value, def, encoding));
    }
}

/// Encode one value and force it to exactly `def.size` bytes.
///
/// Numeric fields keep their last bytes and are zero-padded on the left;
/// character fields keep their first bytes and are space-padded on the
/// right.
pub fn fit_field(value: &str, def: &FieldDef, encoding: CharEncoding) -> Vec<u8> {
    let mut code = encoding.encode(value);
    match def.field_type {
        FieldType::Numeric => {
            if code.len() > def.size {
                code.drain(..code.len() - def.size);
            } else if code.len() < def.size {
                let mut padded = vec![encoding.zero(); def.size - code.len()];
                padded.append(&mut code);
                code = padded;
            }
        }
        FieldType::Character => {
            code.resize(def.size, encoding.space());
        }
    }
    code
}
