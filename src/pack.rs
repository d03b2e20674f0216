/// Longest successor chain followed after the leading character.
pub(crate) const MAX_SUCCESSOR_N: usize = 7;

/// One of the three fixed bit layouts a code unit can take.
///
/// Field 0 is the leading character's id, fields `1..unpacked_chars` are
/// successor ranks. Offsets are shifts within a 32-bit word whose top
/// `packed_bytes` bytes are emitted big-endian.
#[derive(Debug)]
pub(crate) struct Pack {
    /// Header bits pre-shifted into the top of the word
    pub word: u32,
    pub packed_bytes: usize,
    pub unpacked_chars: usize,
    pub offsets: [u32; MAX_SUCCESSOR_N + 1],
    pub masks: [u32; MAX_SUCCESSOR_N + 1],
    pub header_mask: u8,
    pub header: u8,
}

pub(crate) const PACKS: [Pack; 3] = [
    Pack {
        word: 0x8000_0000,
        packed_bytes: 1,
        unpacked_chars: 2,
        offsets: [26, 24, 24, 24, 24, 24, 24, 24],
        masks: [15, 3, 0, 0, 0, 0, 0, 0],
        header_mask: 0xc0,
        header: 0x80,
    },
    Pack {
        word: 0xc000_0000,
        packed_bytes: 2,
        unpacked_chars: 4,
        offsets: [25, 22, 19, 16, 16, 16, 16, 16],
        masks: [15, 7, 7, 7, 0, 0, 0, 0],
        header_mask: 0xe0,
        header: 0xc0,
    },
    Pack {
        word: 0xe000_0000,
        packed_bytes: 4,
        unpacked_chars: 8,
        offsets: [23, 19, 15, 11, 8, 5, 2, 0],
        masks: [31, 15, 15, 15, 7, 7, 7, 3],
        header_mask: 0xf0,
        header: 0xe0,
    },
];

/// What the first byte of a unit announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Header {
    Literal,
    Packed(usize),
    Invalid,
}

impl Header {
    /// Classifies a unit by the unary prefix of its first byte.
    ///
    /// Checks at most three header masks, so a run of one-bits longer than
    /// any pack's prefix is rejected rather than scanned.
    pub(crate) fn of(byte: u8) -> Self {
        if byte & 0x80 == 0 {
            return Header::Literal;
        }
        PACKS
            .iter()
            .position(|pack| byte & pack.header_mask == pack.header)
            .map_or(Header::Invalid, Header::Packed)
    }
}

impl Pack {
    /// Returns true if every field value fits under this pack's masks.
    pub(crate) fn fits(&self, fields: &[u8]) -> bool {
        fields
            .iter()
            .zip(self.masks.iter())
            .take(self.unpacked_chars)
            .all(|(&field, &mask)| u32::from(field) <= mask)
    }

    /// Packs `fields` into this layout's big-endian bytes.
    pub(crate) fn pack(&self, fields: &[u8], out: &mut Vec<u8>) {
        let mut code = self.word;
        for i in 0..self.unpacked_chars {
            code |= u32::from(fields[i]) << self.offsets[i];
        }
        out.extend_from_slice(&code.to_be_bytes()[..self.packed_bytes]);
    }

    /// Assembles the unit starting at `bytes[0]` into a word.
    ///
    /// `bytes` must hold at least `packed_bytes` bytes.
    pub(crate) fn word_of(&self, bytes: &[u8]) -> u32 {
        let mut buf = [0u8; 4];
        buf[..self.packed_bytes].copy_from_slice(&bytes[..self.packed_bytes]);
        u32::from_be_bytes(buf)
    }

    /// Extracts field `i` from an assembled word.
    pub(crate) fn field(&self, code: u32, i: usize) -> u8 {
        ((code >> self.offsets[i]) & self.masks[i]) as u8
    }
}

/// Index of the widest pack that covers at most `n` characters and whose
/// masks accept every field.
pub(crate) fn best_pack(fields: &[u8], n: usize) -> Option<usize> {
    PACKS
        .iter()
        .rposition(|pack| n >= pack.unpacked_chars && pack.fits(fields))
}
