//! # shoco-rs - Short-String Compression
//!
//! A compressor for short strings such as identifiers, header names and
//! labels, driven by a precomputed model of likely character successions.
//!
//! Runs of characters the model links together are packed into code units:
//! 2 characters in 1 byte, 4 in 2 bytes or 8 in 4 bytes. Anything else is
//! written verbatim. NUL and characters U+0080..=U+00FF get an escape byte in
//! front of their code point, and characters above U+00FF are written behind
//! a wide escape. Every string round-trips exactly.
//!
//! ## Example
//!
//! ```
//! use shoco_rs::{default_model, Codec};
//!
//! let codec = Codec::new(default_model());
//! let packed = codec.encode("the-content-length");
//! assert!(packed.len() < "the-content-length".len());
//!
//! let unpacked = codec.decode(&packed).unwrap();
//! assert_eq!(unpacked, "the-content-length");
//! ```
//!
//! ## Models
//!
//! [`default_model`] is a compiled-in English model. Custom models are
//! described by a [`ModelSpec`], either written by hand or produced by
//! [`train`], and loaded with [`TableModel::new`]. Any type implementing
//! [`Model`] can drive a [`Codec`].
//!
//! ## Wire format
//!
//! | first byte  | unit                                  |
//! |-------------|---------------------------------------|
//! | `0xxxxxxx`  | literal byte (`0x00` escapes the next) |
//! | `10xxxxxx`  | 2 characters in 1 byte                |
//! | `110xxxxx`  | 4 characters in 2 bytes               |
//! | `1110xxxx`  | 8 characters in 4 bytes               |
//! | `11110000`  | one character above U+00FF, 3-byte code point follows |

mod codec;
mod decoder;
mod default_model;
mod encoder;
mod error;
mod model;
mod pack;
mod train;

#[cfg(test)]
mod tests;

pub use codec::{compress, decode, decompress, encode, Codec, CompressionStats};
pub use default_model::{default_model, english_spec};
pub use error::{DecodeError, ModelError};
pub use model::{Model, ModelSpec, TableModel, MAX_CHARS, MAX_SUCCESSORS};
pub use train::{train, TrainingConfig};
