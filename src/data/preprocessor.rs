// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Two kinds of cleaning happen before tokenisation:
//
//   Preprocessor::clean
//     file-level hygiene: odd Unicode whitespace, control
//     characters, repeated spaces and blank lines
//
//   normalize_text / normalize_korean_text
//     corpus-level normalisation, applied in order:
//       1. lower case              (English only)
//       2. drop ASCII punctuation
//       3. drop ASCII digits
//       4. drop stopwords
//       5. collapse whitespace to single spaces
//
// The Korean variant skips step 1; mixed-script text such as
// "GS SHOP" keeps its case.
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

use std::collections::HashSet;

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Clean raw file text: normalise whitespace variants, drop
    /// control characters and collapse runs of spaces/blank lines.
    pub fn clean(&self, text: &str) -> String {

        // ── Step 1: Normalise individual characters ───────────────────────────
        let step1: String = text
            .chars()
            .map(|c| match c {
                '\t' | '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => ' ',
                '\r' => '\n',
                c if c.is_control() && c != '\n' => ' ',
                c => c,
            })
            .collect();

        // ── Step 2: Collapse spaces and trim each line ───────────────────────
        let step2: String = step1
            .lines()
            .map(|line| line.split(' ').filter(|w| !w.is_empty()).collect::<Vec<_>>().join(" "))
            .collect::<Vec<_>>()
            .join("\n");

        // ── Step 3: At most one blank line in a row ───────────────────────────
        let mut result        = String::with_capacity(step2.len());
        let mut newline_count = 0usize;

        for c in step2.chars() {
            if c == '\n' {
                newline_count += 1;
                if newline_count <= 2 {
                    result.push(c);
                }
            } else {
                newline_count = 0;
                result.push(c);
            }
        }

        result.trim().to_string()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalise English texts (movie reviews).
pub fn normalize_text<S: AsRef<str>>(texts: &[S], stops: &HashSet<String>) -> Vec<String> {
    texts
        .iter()
        .map(|t| normalize_one(&t.as_ref().to_lowercase(), stops))
        .collect()
}

/// Normalise Korean texts: same as [`normalize_text`] without lowercasing.
pub fn normalize_korean_text<S: AsRef<str>>(texts: &[S], stops: &HashSet<String>) -> Vec<String> {
    texts
        .iter()
        .map(|t| normalize_one(t.as_ref(), stops))
        .collect()
}

fn normalize_one(text: &str, stops: &HashSet<String>) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| !c.is_ascii_punctuation() && !c.is_ascii_digit())
        .collect();

    stripped
        .split_whitespace()
        .filter(|w| !stops.contains(*w))
        .collect::<Vec<_>>()
        .join(" ")
}
