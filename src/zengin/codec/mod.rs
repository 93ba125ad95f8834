//! Codec layer for the two character encodings a Zengin file may use.
//!
//! Both codecs never fail. Characters that cannot be represented are
//! replaced with a sentinel that the field validator later rejects.
//!
//! # Submodules
//!
//! - [`jis`][]: Shift_JIS via `encoding_rs`
//! - [`ebcdic`][]: Fujitsu Japanese EBCDIC, partial repertoire

pub mod ebcdic;
pub mod jis;

/// A character encoding a record can be transmitted in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CharEncoding {
    #[default]
    Jis,
    Ebcdic,
}

impl CharEncoding {
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            CharEncoding::Jis => jis::encode(text),
            CharEncoding::Ebcdic => ebcdic::encode(text),
        }
    }

    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            CharEncoding::Jis => jis::decode(bytes),
            CharEncoding::Ebcdic => ebcdic::decode(bytes),
        }
    }

    /// The encoded space byte, used for padding.
    pub fn space(self) -> u8 {
        match self {
            CharEncoding::Jis => b' ',
            CharEncoding::Ebcdic => ebcdic::SPACE,
        }
    }

    /// The encoded `'0'` byte, used for padding numeric fields.
    pub fn zero(self) -> u8 {
        match self {
            CharEncoding::Jis => b'0',
            CharEncoding::Ebcdic => ebcdic::DIGIT_ZERO,
        }
    }

    /// Guess the encoding of a record from its first byte.
    ///
    /// Record type digits are 0x30..=0x39 in JIS and 0xF0..=0xF9 in EBCDIC.
    pub fn detect(first_byte: Option<u8>) -> Option<Self> {
        match first_byte? {
            0x30..=0x39 => Some(CharEncoding::Jis),
            0xF0..=0xF9 => Some(CharEncoding::Ebcdic),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharEncoding::Jis => "JIS",
            CharEncoding::Ebcdic => "EBCDIC",
        }
    }
}
