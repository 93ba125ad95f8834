//! Field layouts for the four Zengin record kinds.
//!
//! Every record is 120 bytes. Field 0 of every layout is the one-digit
//! record type that selects the layout.

use super::error::{Result, ZenginError};

/// Length of one record in bytes.
pub const RECORD_LEN: usize = 120;

/// Data type of a field.
///
/// Numeric fields are zero-padded on the left, character fields are
/// space-padded on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Numeric,
    Character,
}

/// One field of a record layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub field_type: FieldType,
    /// Width in bytes.
    pub size: usize,
    /// Stable identifier.
    pub name: &'static str,
    /// Display label. Opaque to the codec.
    pub title: &'static str,
}

impl FieldDef {
    const fn n(size: usize, name: &'static str, title: &'static str) -> Self {
        Self { field_type: FieldType::Numeric, size, name, title }
    }

    const fn c(size: usize, name: &'static str, title: &'static str) -> Self {
        Self { field_type: FieldType::Character, size, name, title }
    }

    /// Index of the field called `name` within `defs`.
    pub fn position(defs: &[FieldDef], name: &str) -> Option<usize> {
        defs.iter().position(|d| d.name == name)
    }
}

/// Kind of a record, selected by its first digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Header,
    Data,
    Trailer,
    End,
    Unknown,
}

impl RecordKind {
    pub fn from_digit(n: u32) -> Self {
        match n {
            1 => Self::Header,
            2 => Self::Data,
            8 => Self::Trailer,
            9 => Self::End,
            _ => Self::Unknown,
        }
    }

    /// Classify a decoded row by the first character of its first field.
    pub fn from_row<S: AsRef<str>>(fields: &[S]) -> Self {
        fields
            .first()
            .and_then(|f| f.as_ref().chars().next())
            .and_then(|c| c.to_digit(10))
            .map(Self::from_digit)
            .unwrap_or(Self::Unknown)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Header => "ヘッダー",
            Self::Data => "データ",
            Self::Trailer => "トレイラー",
            Self::End => "エンド",
            Self::Unknown => "不明",
        }
    }

    pub fn field_defs(self) -> &'static [FieldDef] {
        match self {
            Self::Header => HEADER_FIELD_DEFS,
            Self::Data => DATA_FIELD_DEFS,
            Self::Trailer => TRAILER_FIELD_DEFS,
            Self::End => END_FIELD_DEFS,
            Self::Unknown => UNKNOWN_FIELD_DEFS,
        }
    }
}

pub static HEADER_FIELD_DEFS: &[FieldDef] = &[
    FieldDef::n(1, "type", "データ区分"),
    FieldDef::n(2, "shubetsuCode", "種別コード"),
    FieldDef::n(1, "codeType", "コード区分"),
    FieldDef::n(10, "clientCode", "委託者コード"),
    FieldDef::c(40, "clientName", "委託者名"),
    FieldDef::n(4, "withdrawDate", "引落日"),
    FieldDef::n(4, "bankCode", "取引銀行番号"),
    FieldDef::c(15, "bankName", "取引銀行名"),
    FieldDef::n(3, "branchCode", "取引支店番号"),
    FieldDef::c(15, "branchName", "取引支店名"),
    FieldDef::n(1, "clientAccountType", "預金種目(委託者)"),
    FieldDef::n(7, "clientAccountNumber", "口座番号(委託者)"),
    FieldDef::c(17, "dummy", "ダミー"),
];

pub static DATA_FIELD_DEFS: &[FieldDef] = &[
    FieldDef::n(1, "type", "データ区分"),
    FieldDef::n(4, "payerBankCode", "引落銀行番号"),
    FieldDef::c(15, "payerBankName", "引落銀行名"),
    FieldDef::n(3, "payerBranchCode", "引落支店番号"),
    FieldDef::c(15, "payerBranchName", "引落支店名"),
    FieldDef::c(4, "dummy1", "ダミー"),
    FieldDef::n(1, "accountType", "預金種目"),
    FieldDef::n(7, "accountNumber", "口座番号"),
    FieldDef::c(30, "accountHolder", "預金者名"),
    FieldDef::n(10, "amount", "引落金額"),
    FieldDef::n(1, "newCode", "新規コード"),
    FieldDef::n(20, "customerCode", "顧客番号"),
    FieldDef::n(1, "resultCode", "振替結果コード"),
    FieldDef::c(8, "dummy2", "ダミー"),
];

pub static TRAILER_FIELD_DEFS: &[FieldDef] = &[
    FieldDef::n(1, "type", "データ区分"),
    FieldDef::n(6, "totalCount", "合計件数"),
    FieldDef::n(12, "totalAmount", "合計金額"),
    FieldDef::n(6, "transferredCount", "振替済件数"),
    FieldDef::n(12, "transferredAmount", "振替済金額"),
    FieldDef::n(6, "failedCount", "振替不能件数"),
    FieldDef::n(12, "failedAmount", "振替不能金額"),
    FieldDef::c(65, "dummy", "ダミー"),
];

pub static END_FIELD_DEFS: &[FieldDef] = &[
    FieldDef::n(1, "type", "データ区分"),
    FieldDef::c(119, "dummy", "ダミー"),
];

pub static UNKNOWN_FIELD_DEFS: &[FieldDef] = &[
    FieldDef::n(1, "type", "データ区分"),
    FieldDef::c(119, "unknown", "不明"),
];

pub fn is_valid_record_type(n: u32) -> bool {
    RecordKind::from_digit(n) != RecordKind::Unknown
}

/// Layout for a discriminator digit.
///
/// # Errors
/// Returns `ZenginError::UnknownRecordType` for anything but 1, 2, 8 or 9.
pub fn record_type_to_field_defs(n: u32) -> Result<&'static [FieldDef]> {
    match RecordKind::from_digit(n) {
        RecordKind::Unknown => Err(ZenginError::UnknownRecordType(n)),
        kind => Ok(kind.field_defs()),
    }
}

/// Layout for an already decoded row. Never fails: falls back to the
/// unknown layout.
pub fn get_record_type<S: AsRef<str>>(fields: &[S]) -> &'static [FieldDef] {
    RecordKind::from_row(fields).field_defs()
}
