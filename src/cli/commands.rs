// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `vocab`, `batch` and
// `prepare-qa`, and all their flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::application::{
    batch_use_case::BatchConfig,
    corpus::{CorpusSelection, SourceKind},
    prepare_use_case::PrepareConfig,
    vocab_use_case::VocabConfig,
};
use crate::data::sampler::DEFAULT_MAX_ROUNDS;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the vocabulary for a corpus and save it as vocab.json
    Vocab(VocabArgs),

    /// Sample one training batch and print it as JSON
    Batch(BatchArgs),

    /// Clean and filter the raw customer-service TSV dump
    PrepareQa(PrepareArgs),
}

/// Corpus to read.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SourceArg {
    /// Movie reviews; --input is the directory holding rt-polaritydata/
    Movie,
    /// Korean Q&A questions; --input is a JSON-lines file
    Questions,
    /// Korean question + answer documents; --input is a JSON-lines file
    Pairs,
}

impl From<SourceArg> for SourceKind {
    fn from(s: SourceArg) -> Self {
        match s {
            SourceArg::Movie     => SourceKind::Movie,
            SourceArg::Questions => SourceKind::Questions,
            SourceArg::Pairs     => SourceKind::Pairs,
        }
    }
}

/// Flags shared by every command that reads a corpus.
#[derive(Args, Debug)]
pub struct CorpusArgs {
    #[arg(long, value_enum, default_value_t = SourceArg::Movie)]
    pub source: SourceArg,

    /// Corpus location (directory for movie, file for questions/pairs)
    #[arg(long, default_value = "temp")]
    pub input: PathBuf,

    /// Optional stopword list, one word per line
    #[arg(long)]
    pub stopwords: Option<PathBuf>,

    /// Training config (batch_size, vocab_size, window_size, ...)
    #[arg(long, default_value = "config.json")]
    pub config: PathBuf,
}

impl From<&CorpusArgs> for CorpusSelection {
    fn from(a: &CorpusArgs) -> Self {
        CorpusSelection {
            kind:      a.source.into(),
            input:     a.input.clone(),
            stopwords: a.stopwords.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct VocabArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Directory to write vocab.json into
    #[arg(long, default_value = "vocab")]
    pub out: PathBuf,
}

impl From<VocabArgs> for VocabConfig {
    fn from(a: VocabArgs) -> Self {
        VocabConfig {
            corpus:      (&a.corpus).into(),
            config_path: a.corpus.config,
            out_dir:     a.out,
        }
    }
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Directory holding vocab.json (built there if missing)
    #[arg(long, default_value = "vocab")]
    pub vocab_dir: PathBuf,

    /// Pairing method: skip_gram, cbow or doc2vec
    #[arg(long, default_value = "skip_gram")]
    pub method: String,

    /// Override batch_size from the config file
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Override window_size from the config file
    #[arg(long)]
    pub window_size: Option<usize>,

    /// Seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Give up after this many sampling rounds
    #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS)]
    pub max_rounds: usize,
}

impl From<BatchArgs> for BatchConfig {
    fn from(a: BatchArgs) -> Self {
        BatchConfig {
            corpus:      (&a.corpus).into(),
            config_path: a.corpus.config,
            vocab_dir:   a.vocab_dir,
            method:      a.method,
            batch_size:  a.batch_size,
            window_size: a.window_size,
            seed:        a.seed,
            max_rounds:  a.max_rounds,
        }
    }
}

#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Raw tab-separated dump (10 columns, header row first)
    #[arg(long)]
    pub input: PathBuf,

    /// Output JSON-lines file
    #[arg(long, default_value = "qa_clean.jsonl")]
    pub out: PathBuf,
}

impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepareConfig { input: a.input, out: a.out }
    }
}
