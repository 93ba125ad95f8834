//! Settlement totals per trailer group.
//!
//! Each Data row adds its amount to the running totals, split by its
//! result code (0 = transferred, anything else = failed). Each Trailer row
//! closes the group. The totals a Trailer row states itself are not read
//! by [`compute_result`]; use [`reconcile`] to compare them.

use log::{debug, warn};

use crate::zengin::types::error::{Result, ZenginError};
use crate::zengin::types::models::{Row, TrailerRecord};
use crate::zengin::types::schema::{FieldDef, RecordKind, DATA_FIELD_DEFS, TRAILER_FIELD_DEFS};

const TRAILER_FIELDS: [&str; 6] = [
    "totalCount",
    "totalAmount",
    "transferredCount",
    "transferredAmount",
    "failedCount",
    "failedAmount",
];

/// Parse a numeric field. Blank is zero.
fn parse_number(value: &str) -> Option<u64> {
    let value = value.trim();
    if value.is_empty() {
        Some(0)
    } else {
        value.parse().ok()
    }
}

fn field_index(defs: &[FieldDef], name: &str) -> usize {
    FieldDef::position(defs, name).unwrap_or_else(|| unreachable!("no field {} in schema", name))
}

/// Compute one `TrailerRecord` per Trailer row, in order.
///
/// `rows` should already pass the ordering check. Header and End rows are
/// ignored.
///
/// # Errors
/// Returns `FieldCountMismatch` if a Data row does not have the Data layout.
pub fn compute_result(rows: &[Row]) -> Result<Vec<TrailerRecord>> {
    let amount_index = field_index(DATA_FIELD_DEFS, "amount");
    let result_code_index = field_index(DATA_FIELD_DEFS, "resultCode");

    let mut records = Vec::new();
    let mut current = TrailerRecord::default();

    for (row_index, row) in rows.iter().enumerate() {
        match RecordKind::from_row(row.as_slice()) {
            RecordKind::Data => {
                if row.len() != DATA_FIELD_DEFS.len() {
                    return Err(ZenginError::FieldCountMismatch {
                        row_index,
                        expected: DATA_FIELD_DEFS.len(),
                        found: row.len(),
                    });
                }
                let amount = parse_number(&row[amount_index]).unwrap_or_else(|| {
                    warn!("Row {}: unparsable amount {:?}, counted as 0", row_index, row[amount_index]);
                    0
                });
                let transferred = parse_number(&row[result_code_index]) == Some(0);
                current.add(amount, transferred);
            }
            RecordKind::Trailer => {
                debug!("Row {}: closing group: {}", row_index, current);
                records.push(std::mem::take(&mut current));
            }
            _ => {}
        }
    }
    Ok(records)
}

impl TrailerRecord {
    /// Count one Data row. Sums saturate at `u64::MAX`.
    fn add(&mut self, amount: u64, transferred: bool) {
        let (count, sum) = if transferred {
            (&mut self.transferred_count, &mut self.transferred_amount)
        } else {
            (&mut self.failed_count, &mut self.failed_amount)
        };
        *count = count.saturating_add(1);
        *sum = sum.saturating_add(amount);
        self.total_count = self.total_count.saturating_add(1);
        self.total_amount = self.total_amount.saturating_add(amount);
    }

    fn values(&self) -> [u64; 6] {
        [
            self.total_count,
            self.total_amount,
            self.transferred_count,
            self.transferred_amount,
            self.failed_count,
            self.failed_amount,
        ]
    }

    /// Read the totals a Trailer row states. `None` if the row is not a
    /// Trailer row or a total is not a number.
    pub fn from_row(row: &[String]) -> Option<Self> {
        if RecordKind::from_row(row) != RecordKind::Trailer || row.len() != TRAILER_FIELD_DEFS.len() {
            return None;
        }
        let mut values = [0u64; 6];
        for (value, name) in values.iter_mut().zip(TRAILER_FIELDS) {
            *value = parse_number(&row[field_index(TRAILER_FIELD_DEFS, name)])?;
        }
        let [total_count, total_amount, transferred_count, transferred_amount, failed_count, failed_amount] =
            values;
        Some(Self {
            total_count,
            total_amount,
            transferred_count,
            transferred_amount,
            failed_count,
            failed_amount,
        })
    }

    /// Overwrite the total fields of a Trailer row.
    ///
    /// # Errors
    /// Returns `FieldCountMismatch` if `row` does not have the Trailer layout.
    pub fn write_to_row(&self, row: &mut [String], row_index: usize) -> Result<()> {
        if row.len() != TRAILER_FIELD_DEFS.len() {
            return Err(ZenginError::FieldCountMismatch {
                row_index,
                expected: TRAILER_FIELD_DEFS.len(),
                found: row.len(),
            });
        }
        for (value, name) in self.values().iter().zip(TRAILER_FIELDS) {
            row[field_index(TRAILER_FIELD_DEFS, name)] = value.to_string();
        }
        Ok(())
    }
}

/// Recompute totals and write them into every Trailer row. Returns the
/// number of Trailer rows updated.
pub fn apply_totals(rows: &mut [Row]) -> Result<usize> {
    let records = compute_result(rows)?;
    let trailer_rows = rows
        .iter_mut()
        .enumerate()
        .filter(|(_, row)| RecordKind::from_row(row.as_slice()) == RecordKind::Trailer);
    for ((row_index, row), record) in trailer_rows.zip(&records) {
        record.write_to_row(row, row_index)?;
    }
    Ok(records.len())
}

/// A Trailer row whose stated totals differ from the computed ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailerMismatch {
    pub row_index: usize,
    /// `None` when the row's totals are not numbers.
    pub stated: Option<TrailerRecord>,
    pub computed: TrailerRecord,
}

/// Compare each Trailer row's stated totals with the computed ones.
pub fn reconcile(rows: &[Row]) -> Result<Vec<TrailerMismatch>> {
    let records = compute_result(rows)?;
    let trailer_rows = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| RecordKind::from_row(row.as_slice()) == RecordKind::Trailer);
    Ok(trailer_rows
        .zip(records)
        .filter_map(|((row_index, row), computed)| {
            let stated = TrailerRecord::from_row(row);
            (stated != Some(computed)).then_some(TrailerMismatch {
                row_index,
                stated,
                computed,
            })
        })
        .collect())
}
