//! Builds a [`ModelSpec`] from example text.
//!
//! Characters are ranked by how often they occur, and each character's
//! successors by how often they follow it. Only non-NUL ASCII is counted;
//! everything else is left to the literal path.

use crate::error::ModelError;
use crate::model::{ModelSpec, MAX_CHARS, MAX_SUCCESSORS};
use ahash::AHashMap as HashMap;
use std::cmp::Reverse;
use tracing::debug;

/// Limits for a trained model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingConfig {
    /// Number of characters to keep, at most [`MAX_CHARS`]
    pub max_chars: usize,
    /// Successors to rank per character, at most [`MAX_SUCCESSORS`]
    pub max_successors: usize,
    /// Treat whitespace as a word boundary instead of a character
    pub split_words: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            max_chars: MAX_CHARS,
            max_successors: MAX_SUCCESSORS,
            split_words: true,
        }
    }
}

impl TrainingConfig {
    /// Sets how many characters the model keeps.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Sets how many successors are ranked per character.
    pub fn with_max_successors(mut self, max_successors: usize) -> Self {
        self.max_successors = max_successors;
        self
    }

    /// Sets whether whitespace separates words during counting.
    pub fn with_split_words(mut self, split_words: bool) -> Self {
        self.split_words = split_words;
        self
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.max_chars > MAX_CHARS {
            return Err(ModelError::InvalidConfig(format!(
                "max_chars {} exceeds {}",
                self.max_chars, MAX_CHARS
            )));
        }
        if self.max_successors > MAX_SUCCESSORS {
            return Err(ModelError::InvalidConfig(format!(
                "max_successors {} exceeds {}",
                self.max_successors, MAX_SUCCESSORS
            )));
        }
        Ok(())
    }
}

/// Frequency counts gathered from a corpus.
#[derive(Debug, Default)]
struct Counts {
    chars: HashMap<u8, usize>,
    bigrams: HashMap<(u8, u8), usize>,
}

impl Counts {
    fn add_run(&mut self, run: &[u8]) {
        let mut prev = None;
        for &byte in run {
            if byte == 0 || !byte.is_ascii() {
                prev = None;
                continue;
            }
            *self.chars.entry(byte).or_insert(0) += 1;
            if let Some(p) = prev {
                *self.bigrams.entry((p, byte)).or_insert(0) += 1;
            }
            prev = Some(byte);
        }
    }
}

/// Most frequent entries first, ties broken by byte value.
fn top<K: Copy + Ord>(counts: impl Iterator<Item = (K, usize)>, limit: usize) -> Vec<K> {
    let mut ranked: Vec<(K, usize)> = counts.filter(|&(_, count)| count > 0).collect();
    ranked.sort_by_key(|&(key, count)| (Reverse(count), key));
    ranked.into_iter().take(limit).map(|(key, _)| key).collect()
}

/// Trains a model on `corpus`.
///
/// The result always passes [`TableModel::new`](crate::TableModel::new).
/// An empty corpus yields an empty model, under which everything is a
/// literal.
pub fn train<'a, I>(corpus: I, config: &TrainingConfig) -> Result<ModelSpec, ModelError>
where
    I: IntoIterator<Item = &'a str>,
{
    config.validate()?;

    let mut counts = Counts::default();
    for text in corpus {
        if config.split_words {
            for word in text.split_ascii_whitespace() {
                counts.add_run(word.as_bytes());
            }
        } else {
            counts.add_run(text.as_bytes());
        }
    }

    let chars = top(counts.chars.iter().map(|(&c, &n)| (c, n)), config.max_chars);

    let mut known = [false; 128];
    for &c in &chars {
        known[usize::from(c)] = true;
    }

    let successors: Vec<String> = chars
        .iter()
        .map(|&leading| {
            let following = counts
                .bigrams
                .iter()
                .filter(|&(&(p, f), _)| p == leading && known[usize::from(f)])
                .map(|(&(_, f), &n)| (f, n));
            top(following, config.max_successors)
                .into_iter()
                .map(char::from)
                .collect()
        })
        .collect();

    let spec = ModelSpec {
        chars: chars.iter().map(|&c| char::from(c)).collect(),
        successors,
    };

    debug!(
        chars = spec.chars.len(),
        bigrams = counts.bigrams.len(),
        model = %spec.chars,
        "trained model"
    );

    Ok(spec)
}
