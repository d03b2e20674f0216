use crate::codec::{Codec, CompressionStats, SENTINEL, WIDE_ESCAPE};
use crate::model::Model;
use crate::pack::{best_pack, MAX_SUCCESSOR_N, PACKS};
use tracing::debug;

impl<M: Model> Codec<M> {
    /// Compresses `input`.
    ///
    /// Never fails: bytes the model cannot pack are written as literals.
    pub fn compress(&self, input: &[u8]) -> Vec<u8> {
        self.compress_with_stats(input).0
    }

    /// Compresses the characters of `input`.
    ///
    /// Unpacked characters up to U+00FF take one byte, or two behind the
    /// sentinel; characters above U+00FF take four behind the wide escape.
    pub fn encode(&self, input: &str) -> Vec<u8> {
        self.encode_with_stats(input).0
    }

    /// Compresses `input` and reports what was emitted.
    ///
    /// Greedy single pass: at each position the longest chain of ranked
    /// successors is measured, then the widest pack that covers no more than
    /// that chain and fits every field is written. Only the characters of
    /// that pack are consumed.
    pub fn compress_with_stats(&self, input: &[u8]) -> (Vec<u8>, CompressionStats) {
        self.compress_units(input)
    }

    /// Compresses the characters of `input` and reports what was emitted.
    pub fn encode_with_stats(&self, input: &str) -> (Vec<u8>, CompressionStats) {
        let chars: Vec<char> = input.chars().collect();
        self.compress_units(&chars)
    }

    fn compress_units<T: Copy + Into<u32>>(&self, input: &[T]) -> (Vec<u8>, CompressionStats) {
        let mut out = Vec::with_capacity(input.len());
        let mut stats = CompressionStats {
            input_len: input.len(),
            ..Default::default()
        };
        let mut fields = [0u8; MAX_SUCCESSOR_N + 1];
        let mut pos = 0;

        while pos < input.len() {
            let code = input[pos].into();

            let Some(leading) = self.known_id(code) else {
                push_literal(code, &mut out, &mut stats);
                pos += 1;
                continue;
            };

            fields[0] = leading;
            let n = self.chain(&input[pos..], &mut fields);

            let pack_n = if n < 2 { None } else { best_pack(&fields, n) };
            match pack_n {
                Some(p) => {
                    let pack = &PACKS[p];
                    pack.pack(&fields, &mut out);
                    stats.packed_units[p] += 1;
                    pos += pack.unpacked_chars;
                }
                None => {
                    push_literal(code, &mut out, &mut stats);
                    pos += 1;
                }
            }
        }

        stats.output_bytes = out.len();
        debug!(
            input_len = stats.input_len,
            output_bytes = stats.output_bytes,
            packed = stats.total_packed_units(),
            literals = stats.literals + stats.escaped_literals + stats.wide_literals,
            "compressed"
        );

        (out, stats)
    }

    /// Model id of a code point; anything outside a byte is unknown.
    fn known_id(&self, code: u32) -> Option<u8> {
        u8::try_from(code).ok().and_then(|byte| self.model.char_id(byte))
    }

    /// Measures the successor chain starting at `rest[0]`, whose id is
    /// already in `fields[0]`, recording each successor rank.
    ///
    /// Returns the number of characters in the chain, at most
    /// `MAX_SUCCESSOR_N + 1`.
    fn chain<T: Copy + Into<u32>>(
        &self,
        rest: &[T],
        fields: &mut [u8; MAX_SUCCESSOR_N + 1],
    ) -> usize {
        let mut last = fields[0];
        let mut n = 1;

        while n <= MAX_SUCCESSOR_N && n < rest.len() {
            let Some(id) = self.known_id(rest[n].into()) else {
                break;
            };
            let Some(rank) = self.model.successor_id(last, id) else {
                break;
            };
            fields[n] = rank;
            last = id;
            n += 1;
        }

        n
    }
}

fn push_literal(code: u32, out: &mut Vec<u8>, stats: &mut CompressionStats) {
    match code {
        0x01..=0x7f => {
            out.push(code as u8);
            stats.literals += 1;
        }
        0x00 | 0x80..=0xff => {
            out.extend_from_slice(&[SENTINEL, code as u8]);
            stats.escaped_literals += 1;
        }
        _ => {
            let [_, hi, mid, lo] = code.to_be_bytes();
            out.extend_from_slice(&[WIDE_ESCAPE, hi, mid, lo]);
            stats.wide_literals += 1;
        }
    }
}
