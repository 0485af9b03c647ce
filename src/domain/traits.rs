// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer only knows about TextSource; it does
// not care whether texts come from the movie-review files or
// from the preprocessed Korean Q&A dump.
//
// Implementations:
//   - MovieReviewLoader → rt-polarity.pos / rt-polarity.neg
//   - QuestionLoader    → deduplicated questions, doc-id targets
//   - QaPairLoader      → question + answer per row, doc-id targets
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Texts paired index-by-index with an integer target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledTexts {
    pub texts:   Vec<String>,
    pub targets: Vec<usize>,
}

impl LabeledTexts {
    pub fn new(texts: Vec<String>, targets: Vec<usize>) -> Self {
        debug_assert_eq!(texts.len(), targets.len());
        Self { texts, targets }
    }

    /// Targets are the text's own position (used as a document id).
    pub fn indexed(texts: Vec<String>) -> Self {
        let targets = (0..texts.len()).collect();
        Self { texts, targets }
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

// ─── TextSource ───────────────────────────────────────────────────────────────
/// Any component that can produce a labelled text corpus.
pub trait TextSource {
    /// Load all texts with their targets.
    fn load_texts(&self) -> Result<LabeledTexts>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_targets() {
        let lt = LabeledTexts::indexed(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(lt.targets, vec![0, 1, 2]);
        assert_eq!(lt.len(), 3);
    }
}
