//! # zengin
//!
//! Codec and validator for Zengin (全銀) interbank transfer files: batches of
//! 120-byte fixed-width Header, Data, Trailer and End records, in Shift_JIS
//! or Fujitsu EBCDIC.
//!
//! ```
//! use zengin::{decode_document, validate_document, DecodeOptions};
//!
//! let input = format!("9{}\r\n", " ".repeat(119));
//! let document = decode_document(input.as_bytes(), &DecodeOptions::default()).unwrap();
//! assert_eq!(document.rows.len(), 1);
//! assert!(validate_document(&document.rows).is_valid());
//! ```
pub mod zengin;

// Re-export the main types for convenience
pub use zengin::{
    apply_totals, compute_result, decode_document, encode_document, get_record_type,
    is_valid_record_type, read_document, reconcile, record_type_to_field_defs, validate_char_field,
    validate_document, validate_numeric_field, CharEncoding, DecodeError, DecodeOptions,
    Document, EncodeOptions, EncodingMode, FieldDef, FieldError, FieldType, LineBreak,
    OrderingError, OrderingState, RecordKind, Result, Row, TrailerMismatch, TrailerRecord,
    ValidationReport, ZenginError, DATA_FIELD_DEFS, END_FIELD_DEFS, HEADER_FIELD_DEFS,
    RECORD_LEN, TRAILER_FIELD_DEFS, UNKNOWN_FIELD_DEFS,
};
