use crate::default_model::default_model;
use crate::error::DecodeError;
use crate::model::{Model, TableModel};

/// Escape byte written before a literal that would otherwise read as a
/// pack header or as the escape itself. The next byte is the literal's code
/// point, so it covers U+0000 and U+0080..=U+00FF.
pub(crate) const SENTINEL: u8 = 0x00;

/// Escape for characters above U+00FF: followed by the code point as three
/// big-endian bytes. No pack uses a header with four leading one-bits.
pub(crate) const WIDE_ESCAPE: u8 = 0xf0;

/// Short-string compressor bound to one model.
///
/// The model is only read, so a `Codec` over a shared reference can be
/// used from any number of threads at once.
#[derive(Debug, Clone)]
pub struct Codec<M = &'static TableModel> {
    pub(crate) model: M,
}

impl<M: Model> Codec<M> {
    /// Creates a codec that encodes and decodes with `model`.
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Returns the model this codec was built with.
    pub fn model(&self) -> &M {
        &self.model
    }
}

impl Default for Codec<&'static TableModel> {
    fn default() -> Self {
        Self::new(default_model())
    }
}

/// Statistics about one compression call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompressionStats {
    /// Number of input units: bytes for `compress`, characters for `encode`
    pub input_len: usize,
    /// Number of bytes written
    pub output_bytes: usize,
    /// Units emitted per pack, narrowest first
    pub packed_units: [usize; 3],
    /// Literals written as a single byte
    pub literals: usize,
    /// Literals written behind the sentinel
    pub escaped_literals: usize,
    /// Characters above U+00FF written behind the wide escape
    pub wide_literals: usize,
}

impl CompressionStats {
    /// Returns the output size as a percentage of the input size.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_len == 0 {
            0.0
        } else {
            (self.output_bytes as f64 / self.input_len as f64) * 100.0
        }
    }

    /// Total number of packed units.
    pub fn total_packed_units(&self) -> usize {
        self.packed_units.iter().sum()
    }
}

/// Compresses `input` with the compiled-in model.
pub fn compress(input: &[u8]) -> Vec<u8> {
    Codec::new(default_model()).compress(input)
}

/// Decompresses `input` with the compiled-in model.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    Codec::new(default_model()).decompress(input)
}

/// Compresses a string with the compiled-in model.
pub fn encode(input: &str) -> Vec<u8> {
    Codec::new(default_model()).encode(input)
}

/// Decompresses into a string with the compiled-in model.
pub fn decode(input: &[u8]) -> Result<String, DecodeError> {
    Codec::new(default_model()).decode(input)
}
