// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands off to Layer 2.
//
//   1. `vocab`      — build and save the vocabulary
//   2. `batch`      — sample one batch and print it
//   3. `prepare-qa` — clean the raw Q&A dump
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{BatchArgs, Commands, PrepareArgs, VocabArgs};

#[derive(Parser, Debug)]
#[command(
    name = "embed-prep",
    version,
    about = "Prepare corpora and sample skip-gram / CBOW / doc2vec training batches."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Vocab(args)     => run_vocab(args),
            Commands::Batch(args)     => run_batch(args),
            Commands::PrepareQa(args) => run_prepare(args),
        }
    }
}

fn run_vocab(args: VocabArgs) -> Result<()> {
    use crate::application::vocab_use_case::VocabUseCase;

    tracing::info!("Building vocabulary from '{}'", args.corpus.input.display());
    let out   = args.out.clone();
    let vocab = VocabUseCase::new(args.into()).execute()?;

    println!("Vocabulary of {} ids written to {}", vocab.len(), out.display());
    Ok(())
}

fn run_batch(args: BatchArgs) -> Result<()> {
    use crate::application::batch_use_case::BatchUseCase;

    let batch = BatchUseCase::new(args.into()).execute()?;
    println!("{}", serde_json::to_string_pretty(&batch)?);
    Ok(())
}

fn run_prepare(args: PrepareArgs) -> Result<()> {
    use crate::application::prepare_use_case::PrepareQaUseCase;

    let out    = args.out.clone();
    let report = PrepareQaUseCase::new(args.into()).execute()?;

    println!(
        "{} rows kept, {} dropped, {} rejected → {}",
        report.kept,
        report.dropped,
        report.rejected,
        out.display()
    );
    Ok(())
}
