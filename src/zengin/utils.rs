//! Low-level helpers shared by the framing layers.

pub const CR: u8 = 0x0D;
pub const LF: u8 = 0x0A;

/// Length of the line break starting at `index`: 2 for CRLF, 1 for a lone
/// CR or LF, 0 otherwise.
pub fn line_break_len(input: &[u8], index: usize) -> usize {
    match input.get(index..) {
        Some([CR, LF, ..]) => 2,
        Some([CR | LF, ..]) => 1,
        _ => 0,
    }
}
