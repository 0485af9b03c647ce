// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from raw corpus files to tensor-ready batches.
//
//   raw files (rt-polarity / Q&A dump / JSON lines)
//       │
//       ▼
//   loader         → reads files into labelled texts
//       │
//       ▼
//   korean         → filters and cleans Q&A rows
//   preprocessor   → normalises case, punctuation, digits, stopwords
//       │
//       ▼
//   vocabulary     → word ↔ id mapping, sentence encoding
//       │
//       ▼
//   sampler        → windowed (input, label) pairs per step
//       │
//       ▼
//   batcher        → burn Int tensors [N, W] and [N, 1]
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §13 (Iterators and Closures)

/// Reads movie reviews, Q&A JSON lines and the raw TSV dump
pub mod loader;

/// Whitespace hygiene and English/Korean normalisation
pub mod preprocessor;

/// Row filters and regex cleaners for the Korean Q&A corpus
pub mod korean;

/// Frequency-ranked vocabulary and sentence encoder
pub mod vocabulary;

/// Windowed skip-gram / CBOW / doc2vec batch sampler
pub mod sampler;

/// Implements Burn's Batcher trait for sampled pairs
pub mod batcher;
