// ============================================================
// Layer 2 — VocabUseCase
// ============================================================
// Builds the vocabulary for a corpus and writes it to disk:
//
//   Step 1: Load config.json        (Layer 6 - infra)
//   Step 2: Load + normalise corpus (Layer 4 - data)
//   Step 3: Rank words by frequency (Layer 4 - data)
//   Step 4: Save vocab.json         (Layer 6 - infra)
//
// Always rebuilds; `batch` reuses whatever this wrote.

use anyhow::Result;
use std::path::PathBuf;

use crate::application::corpus::CorpusSelection;
use crate::data::vocabulary::{build_dictionary, Vocabulary};
use crate::infra::{config::EmbeddingConfig, vocab_store::VocabularyStore};

#[derive(Debug, Clone)]
pub struct VocabConfig {
    pub corpus:      CorpusSelection,
    pub config_path: PathBuf,
    pub out_dir:     PathBuf,
}

pub struct VocabUseCase {
    config: VocabConfig,
}

impl VocabUseCase {
    pub fn new(config: VocabConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<Vocabulary> {
        let cfg = EmbeddingConfig::load(&self.config.config_path)?;

        let texts = self.config.corpus.load_normalized()?;
        let vocab = build_dictionary(&texts.texts, cfg.vocab_size);

        VocabularyStore::new(&self.config.out_dir).save(&vocab)?;
        Ok(vocab)
    }
}
