// ============================================================
// Layer 4 — Vocabulary Builder and Encoder
// ============================================================
// Maps words to integer ids so sentences can be fed to the
// sampler.
//
//   id 0        → RARE (any word outside the vocabulary)
//   id 1..N-1   → the N-1 most frequent words, most frequent
//                 first; ties keep first-occurrence order
//
// Example, vocabulary_size = 3:
//   corpus  ["a b a", "c b a"]
//   counts  a:3  b:2  c:1
//   ids     RARE:0  a:1  b:2        (c falls back to 0)
//   encoded [[1, 2, 1], [0, 2, 1]]
//
// Reference: Rust Book §8 (Hash Maps)

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::batch::{Corpus, Sentence, TokenId};

/// Display name of the reserved id 0.
pub const RARE_TOKEN: &str = "RARE";

/// Id every out-of-vocabulary word is mapped to.
pub const RARE_ID: TokenId = 0;

/// Word ↔ id mapping. Serialised as the list of words ordered by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    /// `words[id]` is the word with that id; `words[0]` is RARE
    words: Vec<String>,
    /// Lookup for ids ≥ 1
    index: HashMap<String, TokenId>,
}

impl Vocabulary {
    /// Build from words ordered by id, sentinel first.
    pub fn from_words(words: Vec<String>) -> Self {
        let index = words
            .iter()
            .enumerate()
            .skip(1)
            .map(|(id, w)| (w.clone(), id))
            .collect();
        Self { words, index }
    }

    /// Number of ids, sentinel included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Id of `word`, or `RARE_ID` when it is not in the vocabulary.
    pub fn id_of(&self, word: &str) -> TokenId {
        self.index.get(word).copied().unwrap_or(RARE_ID)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Reverse lookup, e.g. for printing nearest words.
    pub fn word_of(&self, id: TokenId) -> Option<&str> {
        self.words.get(id).map(String::as_str)
    }

    /// Words ordered by id, sentinel first.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Encode one whitespace-tokenised string.
    pub fn encode(&self, sentence: &str) -> Sentence {
        sentence.split_whitespace().map(|w| self.id_of(w)).collect()
    }

    /// Turn id sequences back into words (unknown ids are skipped).
    pub fn decode(&self, ids: &[TokenId]) -> Vec<&str> {
        ids.iter().filter_map(|&id| self.word_of(id)).collect()
    }
}

impl From<Vec<String>> for Vocabulary {
    fn from(words: Vec<String>) -> Self {
        Self::from_words(words)
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(v: Vocabulary) -> Self {
        v.words
    }
}

/// Count words across `sentences` and keep the
/// `vocabulary_size - 1` most frequent ones behind the RARE id.
pub fn build_dictionary<S: AsRef<str>>(sentences: &[S], vocabulary_size: usize) -> Vocabulary {
    // word → (count, first position seen)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    let mut total = 0usize;

    for sentence in sentences {
        for word in sentence.as_ref().split_whitespace() {
            let seen  = counts.len();
            let entry = counts.entry(word).or_insert((0, seen));
            entry.0 += 1;
            total   += 1;
        }
    }

    let mut ranked: Vec<(&str, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
    ranked.truncate(vocabulary_size.saturating_sub(1));

    let words: Vec<String> = std::iter::once(RARE_TOKEN.to_string())
        .chain(ranked.into_iter().map(|(w, _)| w.to_string()))
        .collect();

    tracing::debug!(
        "Vocabulary: {} words counted, {} ids assigned",
        total,
        words.len()
    );

    Vocabulary::from_words(words)
}

/// Encode every sentence, substituting `RARE_ID` for unknown words.
pub fn text_to_numbers<S: AsRef<str>>(sentences: &[S], vocabulary: &Vocabulary) -> Corpus {
    sentences
        .iter()
        .map(|s| vocabulary.encode(s.as_ref()))
        .collect()
}
