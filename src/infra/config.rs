// ============================================================
// Layer 6 — Embedding Config
// ============================================================
// Training hyperparameters live in a JSON file shared with
// the trainer:
//
//   {
//     "batch_size": 500,
//     "vocab_size": 7500,
//     "iterations": 100000,
//     "lr": 0.001,
//     "word_emb_size": 200,
//     "doc_emb_size": 100,
//     "window_size": 3,
//     "save_embeddings_every": 5000,
//     "print_valid_every": 5000,
//     "print_loss_every": 100
//   }
//
// Two values are derived rather than stored:
//   concatenated_size = word_emb_size + doc_emb_size
//   num_sampled       = batch_size / 2   (negative samples)
//
// Reference: serde_json documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::domain::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    pub batch_size:            usize,
    pub vocab_size:            usize,
    pub iterations:            usize,
    pub lr:                    f64,
    pub word_emb_size:         usize,
    pub doc_emb_size:          usize,
    pub window_size:           usize,
    pub save_embeddings_every: usize,
    pub print_valid_every:     usize,
    pub print_loss_every:      usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            batch_size:            500,
            vocab_size:            7500,
            iterations:            100_000,
            lr:                    0.001,
            word_emb_size:         200,
            doc_emb_size:          100,
            window_size:           3,
            save_embeddings_every: 5000,
            print_valid_every:     5000,
            print_loss_every:      100,
        }
    }
}

impl EmbeddingConfig {
    /// Read and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

        let cfg: Self = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config in '{}'", path.display()))?;
        cfg.validate()?;

        tracing::debug!("Loaded config from '{}': {:?}", path.display(), cfg);
        Ok(cfg)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::NotPositive("batch_size"));
        }
        if self.vocab_size == 0 {
            return Err(ConfigError::NotPositive("vocab_size"));
        }
        Ok(())
    }

    /// Width of a word embedding concatenated with a doc embedding.
    pub fn concatenated_size(&self) -> usize {
        self.word_emb_size + self.doc_emb_size
    }

    /// Negative examples drawn per batch.
    pub fn num_sampled(&self) -> usize {
        self.batch_size / 2
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_sizes() {
        let cfg = EmbeddingConfig { batch_size: 9, ..Default::default() };
        assert_eq!(cfg.concatenated_size(), 300);
        assert_eq!(cfg.num_sampled(), 4);
    }

    #[test]
    fn test_save_then_load() {
        let tmp  = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        let cfg  = EmbeddingConfig { window_size: 5, ..Default::default() };
        cfg.save(&path).unwrap();
        assert_eq!(EmbeddingConfig::load(&path).unwrap(), cfg);
    }

    #[test]
    fn test_missing_key_is_error() {
        let tmp  = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, r#"{"batch_size": 10}"#).unwrap();
        assert!(EmbeddingConfig::load(&path).is_err());
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let cfg = EmbeddingConfig { batch_size: 0, ..Default::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::NotPositive("batch_size")));
    }
}
