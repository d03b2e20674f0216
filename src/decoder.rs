use crate::codec::{Codec, SENTINEL, WIDE_ESCAPE};
use crate::error::DecodeError;
use crate::model::Model;
use crate::pack::{Header, Pack, PACKS};
use tracing::debug;

/// Destination of decoded units.
trait Output {
    /// Appends a character whose code point fits in a byte.
    fn push_byte(&mut self, byte: u8);

    /// Appends a character above U+00FF from the wide escape at `offset`.
    fn push_wide(&mut self, code: u32, offset: usize) -> Result<(), DecodeError>;
}

impl Output for Vec<u8> {
    fn push_byte(&mut self, byte: u8) {
        self.push(byte);
    }

    fn push_wide(&mut self, _code: u32, offset: usize) -> Result<(), DecodeError> {
        Err(DecodeError::UnexpectedWideChar { offset })
    }
}

impl Output for String {
    fn push_byte(&mut self, byte: u8) {
        self.push(char::from(byte));
    }

    fn push_wide(&mut self, code: u32, offset: usize) -> Result<(), DecodeError> {
        let chr = char::from_u32(code).ok_or(DecodeError::InvalidCodePoint { offset, code })?;
        self.push(chr);
        Ok(())
    }
}

impl<M: Model> Codec<M> {
    /// Decompresses `input` into the original bytes.
    ///
    /// Truncated units, unknown headers and ids the model does not define
    /// are reported as errors; no partial output is returned. Wide-character
    /// escapes only come from [`Codec::encode`] and are rejected here.
    pub fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, DecodeError> {
        let mut out = Vec::with_capacity(input.len() * 2);
        self.decode_into(input, &mut out)?;
        Ok(out)
    }

    /// Decompresses `input` into the original characters.
    ///
    /// Escaped bytes map to the code point of the same value, so `[0x00, 0xe9]`
    /// decodes to `"é"`.
    pub fn decode(&self, input: &[u8]) -> Result<String, DecodeError> {
        let mut out = String::with_capacity(input.len() * 2);
        self.decode_into(input, &mut out)?;
        Ok(out)
    }

    fn decode_into<O: Output>(&self, input: &[u8], out: &mut O) -> Result<(), DecodeError> {
        self.decode_units(input, out).inspect_err(|err| {
            debug!(%err, input_bytes = input.len(), "decompression failed");
        })
    }

    fn decode_units<O: Output>(&self, input: &[u8], out: &mut O) -> Result<(), DecodeError> {
        let mut pos = 0;

        while pos < input.len() {
            let byte = input[pos];
            match Header::of(byte) {
                Header::Literal if byte == SENTINEL => {
                    let &chr = input
                        .get(pos + 1)
                        .ok_or(DecodeError::DanglingSentinel { offset: pos })?;
                    out.push_byte(chr);
                    pos += 2;
                }
                Header::Literal => {
                    out.push_byte(byte);
                    pos += 1;
                }
                Header::Packed(p) => {
                    let pack = &PACKS[p];
                    self.unpack(pack, input, pos, out)?;
                    pos += pack.packed_bytes;
                }
                Header::Invalid if byte == WIDE_ESCAPE => {
                    let unit = input.get(pos..pos + 4).ok_or(DecodeError::Truncated {
                        offset: pos,
                        needed: 4,
                        available: input.len() - pos,
                    })?;
                    let code = u32::from_be_bytes([0, unit[1], unit[2], unit[3]]);
                    out.push_wide(code, pos)?;
                    pos += 4;
                }
                Header::Invalid => {
                    return Err(DecodeError::InvalidHeader { offset: pos, byte });
                }
            }
        }

        Ok(())
    }

    /// Expands the packed unit at `offset`.
    fn unpack<O: Output>(
        &self,
        pack: &Pack,
        input: &[u8],
        offset: usize,
        out: &mut O,
    ) -> Result<(), DecodeError> {
        let unit = input
            .get(offset..offset + pack.packed_bytes)
            .ok_or(DecodeError::Truncated {
                offset,
                needed: pack.packed_bytes,
                available: input.len() - offset,
            })?;
        let code = pack.word_of(unit);

        let id = pack.field(code, 0);
        let mut last = self
            .model
            .char_for_id(id)
            .ok_or(DecodeError::UnknownCharId { offset, id })?;
        out.push_byte(last);

        for i in 1..pack.unpacked_chars {
            let rank = pack.field(code, i);
            let preceding = last;
            last = self
                .model
                .char_for_successor(preceding, rank)
                .ok_or(DecodeError::UnknownSuccessor {
                    offset,
                    preceding,
                    rank,
                })?;
            out.push_byte(last);
        }

        Ok(())
    }
}
