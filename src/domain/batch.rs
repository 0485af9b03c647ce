// ============================================================
// Layer 3 — Sentences, Methods and Training Batches
// ============================================================
// A corpus is a list of sentences; a sentence is a list of
// vocabulary ids. The sampler turns sentences into training
// pairs in one of three ways:
//
//   skip_gram : center word        → one surrounding word
//   cbow      : surrounding words  → center word
//   doc2vec   : left window + doc  → next word
//
// Labels are always stored as one-element rows so that every
// method hands the trainer a [batch_size, 1] label column.
//
// Reference: Mikolov et al. (2013) word2vec
//            Le & Mikolov (2014) Paragraph Vectors

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::error::SamplerError;

/// A vocabulary index. Id 0 is the rare/unknown word.
pub type TokenId = usize;

/// One integer-encoded sentence.
pub type Sentence = Vec<TokenId>;

/// All sentences; the position of a sentence is its document id.
pub type Corpus = Vec<Sentence>;

// ─── Method ───────────────────────────────────────────────────────────────────
/// How windows are turned into (input, label) pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    #[serde(rename = "skip_gram")]
    SkipGram,
    #[serde(rename = "cbow")]
    Cbow,
    #[serde(rename = "doc2vec")]
    Doc2Vec,
}

impl Method {
    /// The literal selector used on the command line and in configs
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::SkipGram => "skip_gram",
            Method::Cbow     => "cbow",
            Method::Doc2Vec  => "doc2vec",
        }
    }

    /// Number of ids in every input row produced by this method.
    pub fn input_width(&self, window_size: usize) -> usize {
        match self {
            Method::SkipGram => 1,
            Method::Cbow     => window_size.saturating_mul(2),
            Method::Doc2Vec  => window_size.saturating_add(1),
        }
    }

    /// Whether a sentence of `len` tokens yields at least one pair.
    pub fn can_pair(&self, len: usize, window_size: usize) -> bool {
        match self {
            // some window must hold the center plus one neighbour
            Method::SkipGram => window_size > 0 && len >= 2,
            // a full-width window needs window_size tokens on both sides
            Method::Cbow     => window_size.checked_mul(2).is_some_and(|w| len > w),
            Method::Doc2Vec  => len > window_size,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = SamplerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skip_gram" => Ok(Method::SkipGram),
            "cbow"      => Ok(Method::Cbow),
            "doc2vec"   => Ok(Method::Doc2Vec),
            other       => Err(SamplerError::UnsupportedMethod(other.to_string())),
        }
    }
}

// ─── TrainingPair ─────────────────────────────────────────────────────────────
/// A single (input row, label) entry of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPair {
    pub input: Vec<TokenId>,
    pub label: TokenId,
}

impl TrainingPair {
    pub fn new(input: Vec<TokenId>, label: TokenId) -> Self {
        Self { input, label }
    }
}

// ─── TrainingBatch ────────────────────────────────────────────────────────────
/// A sampled batch: `inputs[i]` is paired with `labels[i]`.
///
/// Input row shapes by method:
///   skip_gram → `[center]`
///   cbow      → `2 * window_size` surrounding ids
///   doc2vec   → `window_size` ids followed by the document id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingBatch {
    pub method:      Method,
    pub window_size: usize,
    pub inputs:      Vec<Vec<TokenId>>,
    pub labels:      Vec<[TokenId; 1]>,
}

impl TrainingBatch {
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Width of every input row for this batch's method.
    pub fn input_width(&self) -> usize {
        self.method.input_width(self.window_size)
    }

    /// Iterate over the batch as owned pairs (consumed by the burn batcher).
    pub fn pairs(&self) -> impl Iterator<Item = TrainingPair> + '_ {
        self.inputs
            .iter()
            .zip(&self.labels)
            .map(|(input, [label])| TrainingPair::new(input.clone(), *label))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_methods() {
        assert_eq!("skip_gram".parse::<Method>(), Ok(Method::SkipGram));
        assert_eq!("cbow".parse::<Method>(), Ok(Method::Cbow));
        assert_eq!("doc2vec".parse::<Method>(), Ok(Method::Doc2Vec));
    }

    #[test]
    fn test_unknown_method_is_rejected() {
        assert_eq!(
            "unknown".parse::<Method>(),
            Err(SamplerError::UnsupportedMethod("unknown".to_string()))
        );
    }

    #[test]
    fn test_display_matches_selector() {
        for m in [Method::SkipGram, Method::Cbow, Method::Doc2Vec] {
            assert_eq!(m.to_string().parse::<Method>(), Ok(m));
        }
    }

    #[test]
    fn test_serde_uses_selector_names() {
        let json = serde_json::to_string(&Method::Doc2Vec).unwrap();
        assert_eq!(json, "\"doc2vec\"");
    }

    #[test]
    fn test_can_pair_thresholds() {
        assert!(!Method::SkipGram.can_pair(1, 2));
        assert!(Method::SkipGram.can_pair(2, 2));
        assert!(!Method::SkipGram.can_pair(10, 0));

        assert!(!Method::Cbow.can_pair(4, 2));
        assert!(Method::Cbow.can_pair(5, 2));

        assert!(!Method::Doc2Vec.can_pair(3, 3));
        assert!(Method::Doc2Vec.can_pair(4, 3));

        let huge = usize::MAX / 2 + 1;
        assert!(!Method::Cbow.can_pair(usize::MAX, huge));
        assert!(!Method::Doc2Vec.can_pair(3, usize::MAX));
        assert_eq!(Method::Cbow.input_width(huge), usize::MAX);
        assert_eq!(Method::Doc2Vec.input_width(usize::MAX), usize::MAX);
    }

    #[test]
    fn test_pairs_zip_inputs_and_labels() {
        let batch = TrainingBatch {
            method:      Method::Cbow,
            window_size: 1,
            inputs:      vec![vec![1, 3], vec![2, 4]],
            labels:      vec![[2], [3]],
        };
        let pairs: Vec<_> = batch.pairs().collect();
        assert_eq!(pairs[0], TrainingPair::new(vec![1, 3], 2));
        assert_eq!(pairs[1], TrainingPair::new(vec![2, 4], 3));
        assert_eq!(batch.input_width(), 2);
    }
}
