// ============================================================
// Layer 3 — Domain Errors
// ============================================================
// Library-level failures get a typed enum via thiserror so
// callers can match on them. The application layer wraps
// these into anyhow errors with extra context.
//
// Reference: Rust Book §9 (Recoverable Errors with Result)

use thiserror::Error;

use crate::domain::batch::Method;

/// Everything that can go wrong while sampling a training batch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SamplerError {
    /// The method selector was not one of `skip_gram`, `cbow`, `doc2vec`
    #[error("method '{0}' is not supported (expected skip_gram, cbow or doc2vec)")]
    UnsupportedMethod(String),

    #[error("cannot sample from an empty corpus")]
    EmptyCorpus,

    /// No sentence in the corpus yields even one pair, so the
    /// sampling loop could never fill the batch.
    #[error("no sentence in the corpus can produce a {method} pair with window_size={window_size}")]
    NoUsableSentence {
        method:      Method,
        window_size: usize,
    },

    #[error("batch still incomplete after {rounds} sampling rounds ({filled}/{batch_size} pairs)")]
    Exhausted {
        rounds:     usize,
        filled:     usize,
        batch_size: usize,
    },
}

/// Invalid values in the training configuration file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("'{0}' must be greater than zero")]
    NotPositive(&'static str),
}
