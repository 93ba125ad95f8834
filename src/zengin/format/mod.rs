//! Record format layer: bytes to rows and back.
//!
//! # Module Organization
//!
//! - [`decoder`]: frames the byte stream into records and decodes fields
//! - [`encoder`]: pads, truncates and serializes fields into records
//!
//! ```text
//! ┌──────────────────────┐
//! │ 1 Header   120 bytes │ ← CRLF, CR, LF or nothing
//! │ 2 Data     120 bytes │
//! │ ...                  │
//! │ 8 Trailer  120 bytes │
//! │ 9 End      120 bytes │
//! └──────────────────────┘
//! ```

pub mod decoder;
pub mod encoder;
