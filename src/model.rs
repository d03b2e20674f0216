use crate::error::ModelError;
use serde::{Deserialize, Serialize};

/// Most characters a model can know; the widest leading-id field is 5 bits.
pub const MAX_CHARS: usize = 32;

/// Most successors a character can rank; the widest rank field is 4 bits.
pub const MAX_SUCCESSORS: usize = 16;

/// Read-only statistical table consulted by the codec.
///
/// Lookups report "not found" as `None`. Implementations must not change
/// their answers after construction, since encoded data depends on them.
pub trait Model {
    /// Id of a known character.
    fn char_id(&self, byte: u8) -> Option<u8>;

    /// Rank of `following_id` among the successors of `leading_id`.
    fn successor_id(&self, leading_id: u8, following_id: u8) -> Option<u8>;

    /// Inverse of [`Model::char_id`].
    fn char_for_id(&self, id: u8) -> Option<u8>;

    /// Character with the given successor rank after `preceding`.
    fn char_for_successor(&self, preceding: u8, rank: u8) -> Option<u8>;
}

impl<M: Model + ?Sized> Model for &M {
    fn char_id(&self, byte: u8) -> Option<u8> {
        (**self).char_id(byte)
    }

    fn successor_id(&self, leading_id: u8, following_id: u8) -> Option<u8> {
        (**self).successor_id(leading_id, following_id)
    }

    fn char_for_id(&self, id: u8) -> Option<u8> {
        (**self).char_for_id(id)
    }

    fn char_for_successor(&self, preceding: u8, rank: u8) -> Option<u8> {
        (**self).char_for_successor(preceding, rank)
    }
}

/// Serializable description of a model.
///
/// `chars` lists known characters in id order; `successors[i]` lists the
/// successors of `chars[i]` in rank order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModelSpec {
    pub chars: String,
    pub successors: Vec<String>,
}

/// Dense-table [`Model`] built from a validated [`ModelSpec`].
#[derive(Debug, Clone)]
pub struct TableModel {
    spec: ModelSpec,
    ids_by_chr: [Option<u8>; 128],
    chrs_by_id: Vec<u8>,
    /// `successor_ids[leading][following]`
    successor_ids: Vec<[Option<u8>; MAX_CHARS]>,
    /// `successors_by_id[leading][rank]`
    successors_by_id: Vec<Vec<u8>>,
}

impl TableModel {
    /// Validates `spec` and builds its lookup tables.
    pub fn new(spec: ModelSpec) -> Result<Self, ModelError> {
        validate(&spec)?;
        Ok(Self::build(spec))
    }

    /// Builds tables from a spec that already passed [`validate`].
    pub(crate) fn build(spec: ModelSpec) -> Self {
        let chrs_by_id: Vec<u8> = spec.chars.bytes().collect();

        let mut ids_by_chr = [None; 128];
        for (id, &chr) in chrs_by_id.iter().enumerate() {
            ids_by_chr[usize::from(chr)] = Some(id as u8);
        }

        let successors_by_id: Vec<Vec<u8>> =
            spec.successors.iter().map(|s| s.bytes().collect()).collect();

        let mut successor_ids = vec![[None; MAX_CHARS]; chrs_by_id.len()];
        for (leading, successors) in successors_by_id.iter().enumerate() {
            for (rank, &chr) in successors.iter().enumerate() {
                if let Some(following) = ids_by_chr[usize::from(chr)] {
                    successor_ids[leading][usize::from(following)] = Some(rank as u8);
                }
            }
        }

        Self {
            spec,
            ids_by_chr,
            chrs_by_id,
            successor_ids,
            successors_by_id,
        }
    }

    /// The spec this model was built from.
    pub fn spec(&self) -> &ModelSpec {
        &self.spec
    }

    /// Number of known characters.
    pub fn len(&self) -> usize {
        self.chrs_by_id.len()
    }

    /// Returns true if the model knows no characters.
    pub fn is_empty(&self) -> bool {
        self.chrs_by_id.is_empty()
    }
}

impl Model for TableModel {
    fn char_id(&self, byte: u8) -> Option<u8> {
        self.ids_by_chr.get(usize::from(byte)).copied().flatten()
    }

    fn successor_id(&self, leading_id: u8, following_id: u8) -> Option<u8> {
        self.successor_ids
            .get(usize::from(leading_id))?
            .get(usize::from(following_id))
            .copied()
            .flatten()
    }

    fn char_for_id(&self, id: u8) -> Option<u8> {
        self.chrs_by_id.get(usize::from(id)).copied()
    }

    fn char_for_successor(&self, preceding: u8, rank: u8) -> Option<u8> {
        let id = self.char_id(preceding)?;
        self.successors_by_id
            .get(usize::from(id))?
            .get(usize::from(rank))
            .copied()
    }
}

impl TryFrom<ModelSpec> for TableModel {
    type Error = ModelError;

    fn try_from(spec: ModelSpec) -> Result<Self, Self::Error> {
        Self::new(spec)
    }
}

pub(crate) fn validate(spec: &ModelSpec) -> Result<(), ModelError> {
    let count = spec.chars.chars().count();
    if count > MAX_CHARS {
        return Err(ModelError::TooManyChars {
            count,
            max: MAX_CHARS,
        });
    }
    if spec.successors.len() != count {
        return Err(ModelError::LengthMismatch {
            chars: count,
            successors: spec.successors.len(),
        });
    }

    let mut known = [false; 128];
    for chr in spec.chars.chars() {
        if !chr.is_ascii() || chr == '\0' {
            return Err(ModelError::NonAsciiChar(chr));
        }
        if known[chr as usize] {
            return Err(ModelError::DuplicateChar(chr));
        }
        known[chr as usize] = true;
    }

    for (chr, successors) in spec.chars.chars().zip(&spec.successors) {
        let count = successors.chars().count();
        if count > MAX_SUCCESSORS {
            return Err(ModelError::TooManySuccessors {
                chr,
                count,
                max: MAX_SUCCESSORS,
            });
        }
        let mut seen = [false; 128];
        for successor in successors.chars() {
            if !successor.is_ascii() || !known[successor as usize] {
                return Err(ModelError::UnknownSuccessor { chr, successor });
            }
            if seen[successor as usize] {
                return Err(ModelError::DuplicateSuccessor { chr, successor });
            }
            seen[successor as usize] = true;
        }
    }

    Ok(())
}
