// ============================================================
// Layer 2 — PrepareQaUseCase
// ============================================================
// Turns the raw customer-service dump into clean JSON lines:
//
//   Step 1: Read the TSV dump            (Layer 4 - data)
//   Step 2: Classify each row            (drop / reject / keep)
//   Step 3: Strip emoticons + boilerplate
//   Step 4: Write kept rows as JSON lines
//
// Rows are classified on the raw answer, before boilerplate is
// removed. The output is the input of the external POS tagger
// whose results feed QuestionLoader.

use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use crate::data::{
    korean::{clean_answer, clean_question, filter_row, RowVerdict},
    loader::QaDumpLoader,
};

#[derive(Debug, Clone)]
pub struct PrepareConfig {
    pub input: PathBuf,
    pub out:   PathBuf,
}

/// Row counts per verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrepareReport {
    pub kept:     usize,
    pub dropped:  usize,
    pub rejected: usize,
}

pub struct PrepareQaUseCase {
    config: PrepareConfig,
}

impl PrepareQaUseCase {
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<PrepareReport> {
        let records = QaDumpLoader::new(&self.config.input).load_records()?;

        let file = File::create(&self.config.out)
            .with_context(|| format!("Cannot create '{}'", self.config.out.display()))?;
        let mut out    = BufWriter::new(file);
        let mut report = PrepareReport::default();

        for mut record in records {
            match filter_row(record.question.as_deref(), &record.answer) {
                RowVerdict::Drop => {
                    report.dropped += 1;
                    continue;
                }
                RowVerdict::Reject => {
                    report.rejected += 1;
                    continue;
                }
                RowVerdict::Keep => {}
            }

            record.question = record.question.as_deref().map(clean_question);
            record.answer   = clean_answer(&record.answer).trim().to_string();

            serde_json::to_writer(&mut out, &record)?;
            writeln!(out)?;
            report.kept += 1;
        }
        out.flush()?;

        tracing::info!(
            "Prepared '{}': {} kept, {} dropped, {} rejected",
            self.config.out.display(),
            report.kept,
            report.dropped,
            report.rejected
        );
        Ok(report)
    }
}
