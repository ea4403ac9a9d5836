//! Decoder and encoder for CUE disc-image sheets.
//!
//! The core is line-oriented: [`decode`] reads a `.cue` file (UTF-8 or legacy
//! GBK) into a [`Sheet`], and [`encode`] serializes a [`Sheet`] back into the
//! canonical textual form. Two in-place file passes are built on the same
//! plumbing: [`fix_encoding`] normalizes a GBK file to UTF-8, and
//! [`normalize_lines`] runs caller-supplied rewrite rules over every line.

pub mod codec;
pub mod error;
pub mod normalize;
pub mod sheet;
mod util;
pub mod writer;

pub use crate::codec::fix_encoding;
pub use crate::error::{CueError, CueResult};
pub use crate::normalize::{normalize_lines, LineRule};
pub use crate::sheet::decoder::{decode, decode_str};
pub use crate::sheet::encoder::encode;
pub use crate::sheet::models::{Comment, CueFile, Header, Index, Track};
pub use crate::sheet::Sheet;
pub use crate::writer::{EncodingWriter, StringWrite};
