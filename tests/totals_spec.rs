use zengin::{
    apply_totals, compute_result, get_record_type, reconcile, Row, TrailerRecord, ZenginError,
    DATA_FIELD_DEFS, TRAILER_FIELD_DEFS,
};

fn data_row(amount: &str, result_code: &str) -> Row {
    DATA_FIELD_DEFS
        .iter()
        .map(|d| match d.name {
            "type" => "2".to_string(),
            "amount" => amount.to_string(),
            "resultCode" => result_code.to_string(),
            _ => String::new(),
        })
        .collect()
}

fn trailer_row() -> Row {
    let mut row: Row = TRAILER_FIELD_DEFS.iter().map(|_| String::new()).collect();
    row[0] = "8".to_string();
    row
}

/// One Header/Trailer group per entry, each holding `(amount, result_code)`
/// Data rows.
fn groups(input: &[&[(&str, &str)]]) -> Vec<Row> {
    let mut rows = Vec::new();
    for group in input {
        rows.push(vec!["1".to_string()]);
        rows.extend(group.iter().map(|(amount, code)| data_row(amount, code)));
        rows.push(vec!["8".to_string()]);
    }
    rows
}

fn summarize(rows: &[Row]) -> Vec<String> {
    compute_result(rows).unwrap().iter().map(ToString::to_string).collect()
}

#[test]
fn all_success() {
    let rows = groups(&[&[("100", "0"), ("20", "0"), ("3", "0")]]);
    assert_eq!(summarize(&rows), ["total 3=>123, transferred 3=>123, failed 0=>0"]);
}

#[test]
fn partial_failure() {
    let rows = groups(&[&[("1000", "0"), ("200", "1"), ("30", "0"), ("4", "1")]]);
    assert_eq!(summarize(&rows), ["total 4=>1234, transferred 2=>1030, failed 2=>204"]);
}

#[test]
fn multiple_headers() {
    let rows = groups(&[&[("1000", "0")], &[("2000", "0")]]);
    assert_eq!(
        summarize(&rows),
        [
            "total 1=>1000, transferred 1=>1000, failed 0=>0",
            "total 1=>2000, transferred 1=>2000, failed 0=>0",
        ]
    );
}

#[test]
fn empty_group_and_zero_padded_fields() {
    let rows = groups(&[&[], &[("0000000500", "0"), ("0000000070", "9")]]);
    let result = compute_result(&rows).unwrap();
    assert_eq!(result[0], TrailerRecord::default());
    assert_eq!(
        result[1],
        TrailerRecord {
            total_count: 2,
            total_amount: 570,
            transferred_count: 1,
            transferred_amount: 500,
            failed_count: 1,
            failed_amount: 70,
        }
    );
}

#[test]
fn data_after_last_trailer_is_not_emitted() {
    let mut rows = groups(&[&[("10", "0")]]);
    rows.push(data_row("99", "0"));
    assert_eq!(compute_result(&rows).unwrap().len(), 1);
}

#[test]
fn short_data_row_is_an_invariant_error() {
    let rows: Vec<Row> = vec![vec!["1".to_string()], vec!["2".to_string()], vec!["8".to_string()]];
    let err = compute_result(&rows).unwrap_err();
    assert!(matches!(err, ZenginError::FieldCountMismatch { row_index: 1, .. }));
}

#[test]
fn trailer_totals_are_written_and_reconciled() {
    let mut rows: Vec<Row> = vec![vec!["1".to_string()]];
    rows.push(data_row("100", "0"));
    rows.push(data_row("20", "1"));
    rows.push(trailer_row());
    rows.push(get_record_type(&["9"]).iter().map(|_| String::new()).collect());
    rows[4][0] = "9".to_string();

    let mismatches = reconcile(&rows).unwrap();
    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].row_index, 3);
    assert_eq!(mismatches[0].stated, Some(TrailerRecord::default()));

    assert_eq!(apply_totals(&mut rows).unwrap(), 1);
    assert_eq!(rows[3][1], "2");
    assert_eq!(rows[3][2], "120");
    assert_eq!(rows[3][4], "100");
    assert_eq!(rows[3][6], "20");
    assert!(reconcile(&rows).unwrap().is_empty());
    assert_eq!(
        TrailerRecord::from_row(&rows[3]),
        Some(TrailerRecord {
            total_count: 2,
            total_amount: 120,
            transferred_count: 1,
            transferred_amount: 100,
            failed_count: 1,
            failed_amount: 20,
        })
    );
}

#[test]
fn oversized_amounts_saturate() {
    let max = u64::MAX.to_string();
    let rows = groups(&[&[(max.as_str(), "0"), (max.as_str(), "1"), ("5", "0")]]);
    let result = compute_result(&rows).unwrap();
    assert_eq!(result[0].total_count, 3);
    assert_eq!(result[0].total_amount, u64::MAX);
    assert_eq!(result[0].transferred_amount, u64::MAX);
    assert_eq!(result[0].failed_amount, u64::MAX);
}
