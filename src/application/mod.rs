// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers for each command. No text
// rules, sampling logic or printing lives here, only the
// order in which the data and infra layers are called.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Corpus selection and normalisation shared by the use cases
pub mod corpus;

// Build and save the vocabulary
pub mod vocab_use_case;

// Sample one training batch
pub mod batch_use_case;

// Clean and filter the raw Q&A dump
pub mod prepare_use_case;
