//! Per-field content checks.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::zengin::types::schema::{FieldDef, FieldType};

/// A field value that does not fit its definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    SizeLimitExceeded,
    /// `position` counts characters, not bytes.
    InvalidCharacter { position: usize, ch: char },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::SizeLimitExceeded => f.write_str("size limit exceeded"),
            FieldError::InvalidCharacter { position, ch } => {
                write!(f, "invalid character at {} (", position)?;
                // Control characters are shown by code point only.
                let code = *ch as u32;
                if code >= 0x20 && code != 0x7F {
                    write!(f, "'{}' ", ch)?;
                }
                write!(f, "U+{:04X})", code)
            }
        }
    }
}

static NUMERIC_PATTERN: OnceLock<Regex> = OnceLock::new();
static CHARACTER_PATTERN: OnceLock<Regex> = OnceLock::new();

fn numeric_regex() -> &'static Regex {
    NUMERIC_PATTERN.get_or_init(|| Regex::new(r"^[0-9]*").expect("Invalid numeric field pattern"))
}

/// Upper-case letters, digits, `- '()+,./:?\`, half-width brackets, `ｦ`,
/// and the non-small half-width katakana with the two sound marks.
fn character_regex() -> &'static Regex {
    CHARACTER_PATTERN.get_or_init(|| {
        Regex::new(r"^[- '()+,./0-9:?A-Z\\\x{FF62}-\x{FF63}\x{FF66}\x{FF71}-\x{FF9F}]*")
            .expect("Invalid character field pattern")
    })
}

/// Find the first character not covered by the anchored prefix match.
fn report_bad_char(value: &str, pattern: &Regex) -> Option<FieldError> {
    let valid_len = pattern.find(value).map_or(0, |m| m.end());
    let ch = value[valid_len..].chars().next()?;
    Some(FieldError::InvalidCharacter {
        position: value[..valid_len].chars().count(),
        ch,
    })
}

/// Check a numeric field. Returns the value left-padded with `0`.
///
/// Shorter values are fine; only values longer than the field fail.
pub fn validate_numeric_field(value: &str, def: &FieldDef) -> Result<String, FieldError> {
    let len = value.chars().count();
    if len > def.size {
        return Err(FieldError::SizeLimitExceeded);
    }
    if let Some(err) = report_bad_char(value, numeric_regex()) {
        return Err(err);
    }
    Ok(format!("{}{}", "0".repeat(def.size - len), value))
}

/// Check a character field. Returns the value right-padded with spaces.
pub fn validate_char_field(value: &str, def: &FieldDef) -> Result<String, FieldError> {
    let len = value.chars().count();
    if len > def.size {
        return Err(FieldError::SizeLimitExceeded);
    }
    if let Some(err) = report_bad_char(value, character_regex()) {
        return Err(err);
    }
    Ok(format!("{}{}", value, " ".repeat(def.size - len)))
}

pub fn validate_field(value: &str, def: &FieldDef) -> Result<String, FieldError> {
    match def.field_type {
        FieldType::Numeric => validate_numeric_field(value, def),
        FieldType::Character => validate_char_field(value, def),
    }
}
