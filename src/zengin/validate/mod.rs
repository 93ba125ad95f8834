//! Validation of decoded documents.
//!
//! Two independent passes over the rows:
//! - [`field`]: per-field content (character classes and size limits)
//! - [`ordering`]: the `(Header Data* Trailer)* End` record grammar
//!
//! Both report through the same [`ValidationReport`]; field 0 of a row
//! carries the ordering error if there is one.

pub mod field;
pub mod ordering;

use log::{debug, info};

use crate::zengin::types::models::{Row, ValidationReport};
use crate::zengin::types::schema::{record_type_to_field_defs, RecordKind, HEADER_FIELD_DEFS};

use field::{validate_field, validate_numeric_field};
use ordering::{check_ordering, OrderingOutcome};

/// Validate every field and the record ordering of `rows`.
///
/// The report has one slot per field of each row. Rows without fields get
/// two empty slots. Fields beyond the row's schema are reported as
/// unexpected.
pub fn validate_document(rows: &[Row]) -> ValidationReport {
    let mut report = ValidationReport {
        field_errors: rows.iter().map(validate_row).collect(),
    };

    let kinds = rows
        .iter()
        .map(|row| (!row.is_empty()).then(|| RecordKind::from_row(row.as_slice())));
    match check_ordering(kinds) {
        OrderingOutcome::Accepted => {}
        OrderingOutcome::Rejected { row_index, error } => {
            debug!("Row {}: ordering error: {}", row_index, error);
            report.field_errors[row_index][0] = error.to_string();
        }
        OrderingOutcome::Unfinished { error } => {
            if let Some(slot) = report.field_errors.last_mut().and_then(|r| r.first_mut()) {
                if slot.is_empty() {
                    debug!("Document ends early: {}", error);
                    *slot = error.to_string();
                }
            }
        }
    }

    info!(
        "Validated {} rows: {} field errors",
        rows.len(),
        report.error_count()
    );
    report
}

fn validate_row(fields: &Row) -> Vec<String> {
    let Some(record_type) = fields.first() else {
        return vec![String::new(), String::new()];
    };

    let digit = match validate_numeric_field(record_type, &HEADER_FIELD_DEFS[0]) {
        Ok(padded) => padded.parse::<u32>().unwrap_or_default(),
        Err(e) => return vec![e.to_string(), String::new()],
    };
    let defs = match record_type_to_field_defs(digit) {
        Ok(defs) => defs,
        Err(_) => return vec!["Unknown record type".to_string(), String::new()],
    };

    fields
        .iter()
        .enumerate()
        .map(|(i, value)| match defs.get(i) {
            Some(def) => validate_field(value, def).err().map(|e| e.to_string()).unwrap_or_default(),
            None => "unexpected field".to_string(),
        })
        .collect()
}
