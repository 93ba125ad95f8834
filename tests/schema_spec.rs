use zengin::{
    get_record_type, is_valid_record_type, record_type_to_field_defs, FieldDef, RecordKind,
    ZenginError, DATA_FIELD_DEFS, END_FIELD_DEFS, HEADER_FIELD_DEFS, RECORD_LEN,
    TRAILER_FIELD_DEFS, UNKNOWN_FIELD_DEFS,
};

fn total_size(defs: &[FieldDef]) -> usize {
    defs.iter().map(|d| d.size).sum()
}

#[test]
fn every_layout_fills_a_record() {
    let tables = [
        ("header", HEADER_FIELD_DEFS),
        ("data", DATA_FIELD_DEFS),
        ("trailer", TRAILER_FIELD_DEFS),
        ("end", END_FIELD_DEFS),
        ("unknown", UNKNOWN_FIELD_DEFS),
    ];
    for (name, defs) in tables {
        assert_eq!(total_size(defs), RECORD_LEN, "{} layout", name);
        assert_eq!(defs[0].name, "type", "{} layout", name);
        assert_eq!(defs[0].size, 1, "{} layout", name);
    }
}

#[test]
fn valid_record_types() {
    for n in [1, 2, 8, 9] {
        assert!(is_valid_record_type(n), "{}", n);
    }
    for n in [0, 3, 4, 5, 6, 7, 10, 91] {
        assert!(!is_valid_record_type(n), "{}", n);
    }
}

#[test]
fn field_defs_by_digit() {
    assert_eq!(record_type_to_field_defs(1).unwrap(), HEADER_FIELD_DEFS);
    assert_eq!(record_type_to_field_defs(2).unwrap(), DATA_FIELD_DEFS);
    assert_eq!(record_type_to_field_defs(8).unwrap(), TRAILER_FIELD_DEFS);
    assert_eq!(record_type_to_field_defs(9).unwrap(), END_FIELD_DEFS);
}

#[test]
fn unknown_digit_is_an_error() {
    assert!(matches!(record_type_to_field_defs(3), Err(ZenginError::UnknownRecordType(3))));
    assert!(matches!(record_type_to_field_defs(0), Err(ZenginError::UnknownRecordType(0))));
}

#[test]
fn record_type_of_a_row() {
    assert_eq!(get_record_type(&["2"]), DATA_FIELD_DEFS);
    assert_eq!(get_record_type(&["3"]), UNKNOWN_FIELD_DEFS);
    assert_eq!(get_record_type(&[" "]), UNKNOWN_FIELD_DEFS);
    assert_eq!(get_record_type::<&str>(&[]), UNKNOWN_FIELD_DEFS);
    assert_eq!(RecordKind::from_row(&["8xyz"]), RecordKind::Trailer);
    assert_eq!(RecordKind::Trailer.field_defs(), TRAILER_FIELD_DEFS);
}
