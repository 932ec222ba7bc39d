//! Wire format serializer for http/1 response message.
//!
//! [ResponseEncoder] assembles the textual form of a response (status line,
//! headers, blank line, body) into one contiguous owned buffer and keeps
//! offset based records of every field written so far. Accessors resolve the
//! records against the buffer and hand out borrowed views instead of copies.
//!
//! The encoder is a mechanical assembler. It does not parse, does not apply
//! transfer codings and does not validate header grammar. Transport concerns
//! like actually sending the buffer belong to the caller.

#![forbid(unsafe_code)]

mod encode;
mod status;

pub use self::encode::{ResponseEncoder, CONTINUE};
pub use self::status::reason_phrase;

/// re-export bytes crate as module.
pub mod bytes {
    pub use bytes::*;
}
