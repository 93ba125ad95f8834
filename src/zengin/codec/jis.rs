//! Shift_JIS conversion.

use encoding_rs::{EncoderResult, SHIFT_JIS};
use log::trace;

/// Substituted for characters Shift_JIS cannot represent.
///
/// `_` is not allowed in Zengin character fields, so the validator flags it.
pub const SENTINEL: u8 = b'_';

pub fn encode(text: &str) -> Vec<u8> {
    let mut encoder = SHIFT_JIS.new_encoder();
    let mut out = Vec::with_capacity(text.len());
    let mut buf = [0u8; 256];
    let mut src = text;
    loop {
        let (result, read, written) =
            encoder.encode_from_utf8_without_replacement(src, &mut buf, true);
        out.extend_from_slice(&buf[..written]);
        src = &src[read..];
        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => {}
            EncoderResult::Unmappable(c) => {
                trace!("Unmappable character U+{:04X} in JIS, writing sentinel", c as u32);
                out.push(SENTINEL);
            }
        }
    }
    out
}

/// Malformed sequences decode to U+FFFD.
pub fn decode(bytes: &[u8]) -> String {
    let (text, had_errors) = SHIFT_JIS.decode_without_bom_handling(bytes);
    if had_errors {
        trace!("Malformed JIS sequence in {} bytes, replaced", bytes.len());
    }
    text.into_owned()
}
