//! Error types for model construction and decoding.
//!
//! Encoding has no failure path: every byte and character is representable
//! either packed or as an (escaped) literal.

use thiserror::Error;

/// Malformed compressed input.
///
/// Every variant carries the byte offset of the unit that could not be
/// decoded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// A packed unit declares more bytes than remain in the input
    #[error("truncated unit at offset {offset}: needs {needed} bytes, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// Header with four or more leading one-bits that is not the wide escape
    #[error("invalid header byte {byte:#04x} at offset {offset}")]
    InvalidHeader { offset: usize, byte: u8 },

    /// Escape sentinel as the final byte of the input
    #[error("sentinel at offset {offset} is not followed by a literal")]
    DanglingSentinel { offset: usize },

    /// Leading-character id not defined by the model
    #[error("unknown character id {id} in unit at offset {offset}")]
    UnknownCharId { offset: usize, id: u8 },

    /// Successor rank not tabulated for the preceding character
    #[error("no successor of rank {rank} after {preceding:#04x} in unit at offset {offset}")]
    UnknownSuccessor {
        offset: usize,
        preceding: u8,
        rank: u8,
    },

    /// Wide escape holding a surrogate or a value past U+10FFFF
    #[error("invalid code point {code:#x} at offset {offset}")]
    InvalidCodePoint { offset: usize, code: u32 },

    /// Wide escape in a stream decoded as bytes
    #[error("character above U+00FF at offset {offset} cannot be decoded as a byte")]
    UnexpectedWideChar { offset: usize },
}

/// Errors raised while validating or training a model.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("model has {count} characters, at most {max} are addressable")]
    TooManyChars { count: usize, max: usize },

    #[error("character {chr:?} has {count} successors, at most {max} are addressable")]
    TooManySuccessors { chr: char, count: usize, max: usize },

    #[error("model character {0:?} is not a non-NUL ASCII character")]
    NonAsciiChar(char),

    #[error("character {0:?} appears more than once in the model")]
    DuplicateChar(char),

    #[error("model has {chars} characters but {successors} successor lists")]
    LengthMismatch { chars: usize, successors: usize },

    #[error("successor {successor:?} of {chr:?} is not a model character")]
    UnknownSuccessor { chr: char, successor: char },

    #[error("successor {successor:?} listed twice for {chr:?}")]
    DuplicateSuccessor { chr: char, successor: char },

    #[error("invalid training configuration: {0}")]
    InvalidConfig(String),
}
