//! Core Zengin codec and validation module

pub mod codec;
pub mod format;
pub mod totals;
pub mod types;
pub mod utils;
pub mod validate;

pub use codec::CharEncoding;
pub use format::decoder::{decode_document, read_document};
pub use format::encoder::encode_document;
pub use totals::{apply_totals, compute_result, reconcile, TrailerMismatch};
pub use types::error::{Result, ZenginError};
pub use types::models::*;
pub use types::schema::{
    get_record_type, is_valid_record_type, record_type_to_field_defs, FieldDef, FieldType,
    RecordKind, DATA_FIELD_DEFS, END_FIELD_DEFS, HEADER_FIELD_DEFS, RECORD_LEN,
    TRAILER_FIELD_DEFS, UNKNOWN_FIELD_DEFS,
};
pub use validate::field::{validate_char_field, validate_numeric_field, FieldError};
pub use validate::ordering::{OrderingError, OrderingState};
pub use validate::validate_document;
