// ============================================================
// Layer 2 — BatchUseCase
// ============================================================
// Samples one training batch end to end:
//
//   Step 1: Resolve the method selector      (Layer 3 - domain)
//   Step 2: Load config.json                 (Layer 6 - infra)
//   Step 3: Load + normalise corpus          (Layer 4 - data)
//   Step 4: Load or build vocabulary         (Layer 6 - infra)
//   Step 5: Encode sentences to ids          (Layer 4 - data)
//   Step 6: Sample (input, label) pairs      (Layer 4 - data)
//   Step 7: Stack into burn tensors          (Layer 4 - data)
//
// The method string is parsed before any file is touched.
//
// Reference: rand crate documentation (SeedableRng)

use anyhow::{Context, Result};
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;

use crate::application::corpus::CorpusSelection;
use crate::data::{
    batcher::{DefaultBackend, WindowBatch, WindowBatcher},
    sampler::{WindowSampler, DEFAULT_MAX_ROUNDS},
    vocabulary::text_to_numbers,
};
use crate::domain::batch::{Method, TrainingBatch};
use crate::infra::{config::EmbeddingConfig, vocab_store::VocabularyStore};

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub corpus:      CorpusSelection,
    pub config_path: PathBuf,
    pub vocab_dir:   PathBuf,
    /// Literal selector: skip_gram, cbow or doc2vec
    pub method:      String,
    /// Overrides config.json when set
    pub batch_size:  Option<usize>,
    /// Overrides config.json when set
    pub window_size: Option<usize>,
    pub seed:        Option<u64>,
    pub max_rounds:  usize,
}

impl BatchConfig {
    pub fn new(corpus: CorpusSelection, config_path: PathBuf, vocab_dir: PathBuf, method: String) -> Self {
        Self {
            corpus,
            config_path,
            vocab_dir,
            method,
            batch_size:  None,
            window_size: None,
            seed:        None,
            max_rounds:  DEFAULT_MAX_ROUNDS,
        }
    }
}

pub struct BatchUseCase {
    config: BatchConfig,
}

impl BatchUseCase {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<TrainingBatch> {
        let c = &self.config;

        // ── Steps 1-2: Method selector, then config ───────────────────────────
        let method: Method = c.method.parse()?;
        let mut cfg = EmbeddingConfig::load(&c.config_path)?;
        if let Some(batch_size) = c.batch_size {
            cfg.batch_size = batch_size;
        }
        if let Some(window_size) = c.window_size {
            cfg.window_size = window_size;
        }
        cfg.validate()?;

        // ── Steps 3-5: Corpus → vocabulary → ids ──────────────────────────────
        let texts  = c.corpus.load_normalized()?;
        let vocab  = VocabularyStore::new(&c.vocab_dir).load_or_build(&texts.texts, cfg.vocab_size)?;
        let corpus = text_to_numbers(&texts.texts, &vocab);
        tracing::info!("Encoded {} sentences with {} vocabulary ids", corpus.len(), vocab.len());

        // ── Step 6: Sample ────────────────────────────────────────────────────
        let mut rng = match c.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        let sampler = WindowSampler::new(cfg.batch_size, cfg.window_size, method)
            .with_max_rounds(c.max_rounds);
        let batch = sampler
            .sample(&corpus, &mut rng)
            .with_context(|| format!("Cannot sample a {method} batch"))?;

        // ── Step 7: Tensor view ───────────────────────────────────────────────
        let tensors: WindowBatch<DefaultBackend> =
            WindowBatcher::new().batch_sampled(&batch, &Default::default());
        tracing::info!(
            "Batch ready: inputs {:?}, labels {:?}",
            tensors.inputs.dims(),
            tensors.labels.dims()
        );

        Ok(batch)
    }
}
