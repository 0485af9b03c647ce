// ============================================================
// Layer 6 — Vocabulary Store
// ============================================================
// Persists the word ↔ id mapping so batches sampled later map
// to the same embedding rows as the ones used in training.
//
// File layout:
//   <dir>/vocab.json   JSON array of words ordered by id,
//                      "RARE" first
//
// Reference: serde_json documentation

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::data::vocabulary::{build_dictionary, Vocabulary};

pub struct VocabularyStore {
    dir: PathBuf,
}

impl VocabularyStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join("vocab.json")
    }

    /// Load the saved vocabulary, or build one from `texts` and save it.
    pub fn load_or_build(&self, texts: &[String], vocab_size: usize) -> Result<Vocabulary> {
        if self.path().exists() {
            tracing::info!("Loading existing vocabulary from '{}'", self.path().display());
            let vocab = self.load()?;
            if let Some(reason) = mismatch(&vocab, texts, vocab_size) {
                tracing::warn!(
                    "Vocabulary in '{}' does not match the current corpus ({}); delete it to rebuild",
                    self.path().display(),
                    reason
                );
            }
            Ok(vocab)
        } else {
            tracing::info!("Building new vocabulary (vocab_size={})", vocab_size);
            let vocab = build_dictionary(texts, vocab_size);
            self.save(&vocab)?;
            Ok(vocab)
        }
    }

    pub fn load(&self) -> Result<Vocabulary> {
        let path = self.path();
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read vocabulary from '{}'", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Invalid vocabulary file '{}'", path.display()))
    }

    pub fn save(&self, vocab: &Vocabulary) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;

        let path = self.path();
        fs::write(&path, serde_json::to_string_pretty(vocab)?)
            .with_context(|| format!("Cannot write vocabulary to '{}'", path.display()))?;

        tracing::info!("Vocabulary of {} ids saved to '{}'", vocab.len(), path.display());
        Ok(())
    }
}

/// Why a stored vocabulary no longer fits `texts`, if it doesn't.
fn mismatch(stored: &Vocabulary, texts: &[String], vocab_size: usize) -> Option<String> {
    if stored.len() > vocab_size {
        return Some(format!("{} ids, vocab_size is {}", stored.len(), vocab_size));
    }
    let fresh = build_dictionary(texts, vocab_size);
    if fresh.words() == stored.words() {
        return None;
    }
    // skip the RARE sentinel
    let current = &fresh.words()[1..];
    let missing = current.iter().filter(|w| !stored.contains(w)).count();
    Some(format!("{} of {} current words are unknown to it", missing, current.len()))
}
