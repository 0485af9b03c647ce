// ============================================================
// Layer 2 — Corpus Selection
// ============================================================
// Shared first steps of the `vocab` and `batch` workflows:
//
//   Step 1: Pick a loader for the requested corpus
//   Step 2: Load texts and targets
//   Step 3: Clean whitespace/control characters
//   Step 4: Normalise (English or Korean rules) with stopwords
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use anyhow::Result;
use std::{collections::HashSet, path::PathBuf};

use crate::data::{
    loader::{load_stopwords, MovieReviewLoader, QaPairLoader, QuestionLoader},
    preprocessor::{normalize_korean_text, normalize_text, Preprocessor},
};
use crate::domain::traits::{LabeledTexts, TextSource};

/// Which corpus a command reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// English sentence-polarity reviews (directory input)
    Movie,
    /// Korean customer-service questions (JSON-lines input)
    Questions,
    /// Korean question + answer documents (JSON-lines input)
    Pairs,
}

/// Where and how to read a corpus.
#[derive(Debug, Clone)]
pub struct CorpusSelection {
    pub kind:      SourceKind,
    pub input:     PathBuf,
    pub stopwords: Option<PathBuf>,
}

impl CorpusSelection {
    fn source(&self) -> Box<dyn TextSource> {
        match self.kind {
            SourceKind::Movie     => Box::new(MovieReviewLoader::new(&self.input)),
            SourceKind::Questions => Box::new(QuestionLoader::new(&self.input)),
            SourceKind::Pairs     => Box::new(QaPairLoader::new(&self.input)),
        }
    }

    /// Load, clean and normalise the corpus.
    pub fn load_normalized(&self) -> Result<LabeledTexts> {
        let raw = self.source().load_texts()?;

        let stops: HashSet<String> = match &self.stopwords {
            Some(path) => load_stopwords(path)?,
            None       => HashSet::new(),
        };

        let prep = Preprocessor::new();
        let cleaned: Vec<String> = raw.texts.iter().map(|t| prep.clean(t)).collect();

        let texts = match self.kind {
            SourceKind::Movie => normalize_text(&cleaned, &stops),
            SourceKind::Questions | SourceKind::Pairs => normalize_korean_text(&cleaned, &stops),
        };

        tracing::info!(
            "Normalised {} texts ({} stopwords)",
            texts.len(),
            stops.len()
        );
        Ok(LabeledTexts::new(texts, raw.targets))
    }
}
