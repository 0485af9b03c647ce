// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// File-backed state shared between commands:
//
//   config.rs      — EmbeddingConfig read from config.json,
//                    with the derived embedding sizes
//
//   vocab_store.rs — Vocabulary persistence; builds and saves
//                    vocab.json on first use, reloads it after
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Training hyperparameters from config.json
pub mod config;

/// Vocabulary saving and loading
pub mod vocab_store;
