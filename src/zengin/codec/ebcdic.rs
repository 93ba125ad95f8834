//! Fujitsu Japanese EBCDIC.
//!
//! Only the characters a Zengin record may contain are mapped: digits,
//! upper-case letters, the allowed punctuation and half-width katakana.
//! See <https://en.wikipedia.org/wiki/Japanese_language_in_EBCDIC>.

use std::collections::HashMap;
use std::sync::OnceLock;

use log::trace;

pub const SPACE: u8 = 0x40;
pub const DIGIT_ZERO: u8 = 0xF0;

/// Written for characters without a mapping. 0x6D is `_` in EBCDIC, which
/// is not allowed in a Zengin record, so it has no entry in the table.
pub const SENTINEL: u8 = 0x6D;

/// Each run assigns consecutive byte codes, starting at the given one, to
/// the characters of the string.
const RUNS: &[(u8, &str)] = &[
    (0x40, " "),
    (0x42, "｢"),
    (0x43, "｣"),
    (0x46, "ｦ"),
    (0x4B, "."),
    (0x4D, "("),
    (0x4E, "+"),
    (0x5B, "\\"),
    (0x5D, ")"),
    (0x60, "-"),
    (0x61, "/"),
    (0x6B, ","),
    (0x6F, "?"),
    (0x7A, ":"),
    (0x7D, "'"),
    (0x81, "ｱｲｳｴｵｶｷｸｹｺ"),
    (0x8C, "ｻｼｽｾｿﾀﾁﾂﾃﾄﾅﾆﾇﾈﾉ"),
    (0x9D, "ﾊﾋﾌ"),
    (0xA2, "ﾍﾎﾏﾐﾑﾒﾓﾔﾕ"),
    (0xAB, "ﾖﾗﾘﾙ"),
    (0xBA, "ﾚﾛﾜﾝﾞﾟ"),
    (0xC1, "ABCDEFGHI"),
    (0xD1, "JKLMNOPQR"),
    (0xE2, "STUVWXYZ"),
    (0xF0, "0123456789"),
];

struct CodeTable {
    /// Byte code to character.
    forward: [Option<char>; 256],
    /// Character to byte code, derived from `forward`.
    inverse: HashMap<char, u8>,
}

static TABLE: OnceLock<CodeTable> = OnceLock::new();

fn table() -> &'static CodeTable {
    TABLE.get_or_init(|| {
        let mut forward = [None; 256];
        forward[0x0D] = Some('\r');
        forward[0x0A] = Some('\n');
        for &(start, chars) in RUNS {
            for (i, c) in chars.chars().enumerate() {
                forward[start as usize + i] = Some(c);
            }
        }

        let inverse = forward
            .iter()
            .enumerate()
            .filter_map(|(code, c)| c.map(|c| (c, code as u8)))
            .collect();

        CodeTable { forward, inverse }
    })
}

pub fn encode(text: &str) -> Vec<u8> {
    let inverse = &table().inverse;
    text.chars()
        .map(|c| {
            inverse.get(&c).copied().unwrap_or_else(|| {
                trace!("Unmappable character U+{:04X} in EBCDIC, writing sentinel", c as u32);
                SENTINEL
            })
        })
        .collect()
}

/// Bytes without a mapping decode to U+FFFD.
pub fn decode(bytes: &[u8]) -> String {
    let forward = &table().forward;
    bytes
        .iter()
        .map(|&b| forward[b as usize].unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

/// The character mapped to `code`, if any.
pub fn lookup(code: u8) -> Option<char> {
    table().forward[code as usize]
}
