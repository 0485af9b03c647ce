// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing the core
// concepts of the system:
//
//   - sentences of token ids and the corpus they form
//   - the three pairing methods (skip-gram, CBOW, doc2vec)
//   - sampled training batches
//   - cleaned rows of the Korean Q&A dump
//
// Rules for this layer:
//   - NO burn types
//   - NO file I/O
//   - Only plain data, enums, errors and traits
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

/// Sentences, corpus, pairing method and sampled batches
pub mod batch;

/// Typed errors raised by the sampler and config validation
pub mod error;

/// One cleaned row of the customer-service Q&A dump
pub mod qa_record;

/// Core abstractions (traits) that the data layer implements
pub mod traits;
