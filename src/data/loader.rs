// ============================================================
// Layer 4 — Corpus Loaders
// ============================================================
// Reads the two corpora from local files.
//
//   MovieReviewLoader  rt-polaritydata/rt-polarity.{pos,neg}
//                      latin-1 text, one review per line
//   QuestionLoader     JSON lines of POS-filtered Q/A pairs,
//                      questions only, deduplicated
//   QaPairLoader       same JSON lines, questions and answers
//   QaDumpLoader       the raw tab-separated customer-service
//                      dump (10 columns, first row is a header)
//
// Malformed lines are logged and skipped; a missing file is an
// error.
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use crate::data::korean::{extract_body, extract_field, HeaderField};
use crate::domain::qa_record::{PosTextPair, QaRecord};
use crate::domain::traits::{LabeledTexts, TextSource};

// ─── Movie reviews ────────────────────────────────────────────────────────────

/// Loads the sentence polarity corpus from an extracted archive.
pub struct MovieReviewLoader {
    /// Directory containing `rt-polaritydata/`
    dir: PathBuf,
}

impl MovieReviewLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn data_dir(&self) -> PathBuf {
        self.dir.join("rt-polaritydata")
    }
}

impl TextSource for MovieReviewLoader {
    /// Positive reviews first (target 1), then negative (target 0).
    fn load_texts(&self) -> Result<LabeledTexts> {
        let data_dir = self.data_dir();
        if !data_dir.exists() {
            anyhow::bail!(
                "'{}' not found; download rt-polaritydata.tar.gz and extract it into '{}'",
                data_dir.display(),
                self.dir.display()
            );
        }

        let pos = read_latin1_lines(&data_dir.join("rt-polarity.pos"))?;
        let neg = read_latin1_lines(&data_dir.join("rt-polarity.neg"))?;

        tracing::info!("Loaded {} positive and {} negative reviews", pos.len(), neg.len());

        let targets = std::iter::repeat(1)
            .take(pos.len())
            .chain(std::iter::repeat(0).take(neg.len()))
            .collect();
        let texts = pos.into_iter().chain(neg).collect();

        Ok(LabeledTexts::new(texts, targets))
    }
}

/// Decode latin-1, keep only ASCII characters and strip line ends.
fn read_latin1_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    // latin-1 maps bytes 1:1 to code points; non-ASCII ones are dropped
    let text: String = bytes
        .iter()
        .filter(|b| b.is_ascii())
        .map(|&b| char::from(b))
        .collect();

    Ok(text.lines().map(|l| l.trim_end().to_string()).collect())
}

// ─── Preprocessed Q&A (JSON lines) ────────────────────────────────────────────

/// Parse every well-formed line of a JSON-lines file.
fn read_pos_pairs(path: &Path) -> Result<Vec<PosTextPair>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    let mut pairs = Vec::new();
    for (lineno, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<PosTextPair>(line) {
            Ok(p) => pairs.push(p),
            Err(e) => {
                tracing::warn!("Skipping {}:{}: {}", path.display(), lineno + 1, e);
            }
        }
    }
    Ok(pairs)
}

/// Unique questions; the target of each is its own index (doc id).
pub struct QuestionLoader {
    path: PathBuf,
}

impl QuestionLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TextSource for QuestionLoader {
    fn load_texts(&self) -> Result<LabeledTexts> {
        let pairs = read_pos_pairs(&self.path)?;

        let mut seen  = HashSet::new();
        let texts: Vec<String> = pairs
            .iter()
            .map(PosTextPair::question_text)
            .filter(|q| seen.insert(q.clone()))
            .collect();

        tracing::info!(
            "Loaded {} unique questions out of {} rows",
            texts.len(),
            pairs.len()
        );
        Ok(LabeledTexts::indexed(texts))
    }
}

/// Questions and answers aligned by row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QaTexts {
    pub questions: Vec<String>,
    pub answers:   Vec<String>,
    pub targets:   Vec<usize>,
}

pub struct QaPairLoader {
    path: PathBuf,
}

impl QaPairLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load_pairs(&self) -> Result<QaTexts> {
        let pairs = read_pos_pairs(&self.path)?;

        let questions: Vec<String> = pairs.iter().map(PosTextPair::question_text).collect();
        let answers:   Vec<String> = pairs.iter().map(PosTextPair::answer_text).collect();
        let targets = (0..questions.len()).collect();

        tracing::info!("Loaded {} question/answer pairs", questions.len());
        Ok(QaTexts { questions, answers, targets })
    }
}

impl TextSource for QaPairLoader {
    /// One document per row: the question followed by its answer.
    fn load_texts(&self) -> Result<LabeledTexts> {
        let qa = self.load_pairs()?;
        let texts = qa
            .questions
            .iter()
            .zip(&qa.answers)
            .map(|(q, a)| format!("{q} {a}").trim().to_string())
            .collect();
        Ok(LabeledTexts::new(texts, qa.targets))
    }
}

// ─── Raw customer-service dump (TSV) ──────────────────────────────────────────

/// Number of columns in the raw dump:
/// req_date, cate1, cate2, cate3, prd_cd, prd_nm,
/// answer_date, answer_time, question, answer
const DUMP_COLUMNS: usize = 10;

pub struct QaDumpLoader {
    path: PathBuf,
}

impl QaDumpLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load_records(&self) -> Result<Vec<QaRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .quoting(false)
            .flexible(true)
            .from_path(&self.path)
            .with_context(|| format!("Cannot open '{}'", self.path.display()))?;

        let mut records = Vec::new();
        for (i, row) in reader.records().enumerate() {
            let row = match row {
                Ok(r) => r,
                Err(e) => {
                    tracing::warn!("Skipping row {}: {}", i + 1, e);
                    continue;
                }
            };
            if row.len() != DUMP_COLUMNS {
                tracing::warn!(
                    "Skipping row {}: expected {} columns, found {}",
                    i + 1,
                    DUMP_COLUMNS,
                    row.len()
                );
                continue;
            }
            records.push(parse_dump_row(&row));
        }

        tracing::info!("Loaded {} rows from '{}'", records.len(), self.path.display());
        Ok(records)
    }
}

/// Drop the first and last character (the dump wraps values).
fn unwrap_value(s: &str) -> String {
    let mut chars = s.chars();
    chars.next();
    chars.next_back();
    chars.as_str().to_string()
}

fn parse_dump_row(row: &csv::StringRecord) -> QaRecord {
    let col = |i: usize| row.get(i).unwrap_or_default();

    let raw_question = unwrap_value(col(8));

    QaRecord {
        cate0:       extract_field(HeaderField::InquiryType, &raw_question),
        cate1:       unwrap_value(col(1)),
        cate2:       unwrap_value(col(2)),
        cate3:       unwrap_value(col(3)),
        prd_cd:      col(4).to_string(),
        prd_nm:      col(5).to_string(),
        order_state: extract_field(HeaderField::OrderState, &raw_question),
        question:    extract_body(&raw_question),
        answer:      unwrap_value(col(9)),
    }
}

// ─── Stopwords ────────────────────────────────────────────────────────────────

/// One stopword per line; blank lines and `#` comments are ignored.
pub fn load_stopwords(path: &Path) -> Result<HashSet<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read stopwords from '{}'", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect())
}
