// ============================================================
// Layer 4 — Windowed Batch Sampler
// ============================================================
// Turns an integer-encoded corpus into (input, label) pairs
// for one training step.
//
// Each sampling round:
//   1. pick a random sentence (with replacement)
//   2. slide a window of ±window_size over every position,
//      clipped at the sentence edges (no padding)
//   3. turn the windows into pairs according to the method
//   4. append at most batch_size of them to the accumulators
// Rounds repeat until the batch is full, then both
// accumulators are cut to exactly batch_size.
//
// Example, sentence [1, 2, 3], window_size = 1:
//   windows        [1,2]   [1,2,3]   [2,3]
//   center index     0        1        1
//   skip_gram  (1→2) (2→1) (2→3) (3→2)
//   cbow       ([1,3] → 2)            only full-width windows
//   doc2vec    ([1,doc] → 2) ([2,doc] → 3)
//
// The last round is cut without regard to which sentence the
// extra pairs came from, so the tail of a batch leans towards
// the final sentence drawn.
//
// Termination: the corpus is checked up front for at least one
// sentence that can produce a pair. The loop itself is capped
// at `max_rounds` rounds.
//
// Reference: rand crate documentation (Rng::gen_range)
//            Rust Book §8 (Slices), §13 (Iterators)

use rand::Rng;

use crate::domain::batch::{Method, Sentence, TokenId, TrainingBatch, TrainingPair};
use crate::domain::error::SamplerError;

/// Upper bound on sampling rounds for one batch.
pub const DEFAULT_MAX_ROUNDS: usize = 100_000;

/// Samples fixed-size training batches from an encoded corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSampler {
    batch_size:  usize,
    window_size: usize,
    method:      Method,
    max_rounds:  usize,
}

impl WindowSampler {
    pub fn new(batch_size: usize, window_size: usize, method: Method) -> Self {
        Self {
            batch_size,
            window_size,
            method,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    /// Override the cap on sampling rounds.
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Draw one batch of exactly `batch_size` pairs.
    ///
    /// # Errors
    /// * `EmptyCorpus` if `corpus` has no sentences
    /// * `NoUsableSentence` if no sentence can yield a pair
    /// * `Exhausted` if `max_rounds` rounds did not fill the batch
    pub fn sample<R: Rng + ?Sized>(
        &self,
        corpus: &[Sentence],
        rng:    &mut R,
    ) -> Result<TrainingBatch, SamplerError> {
        if corpus.is_empty() {
            return Err(SamplerError::EmptyCorpus);
        }
        if !corpus.iter().any(|s| self.method.can_pair(s.len(), self.window_size)) {
            return Err(SamplerError::NoUsableSentence {
                method:      self.method,
                window_size: self.window_size,
            });
        }

        let mut inputs: Vec<Vec<TokenId>> = Vec::with_capacity(self.batch_size);
        let mut labels: Vec<[TokenId; 1]> = Vec::with_capacity(self.batch_size);
        let mut rounds = 0usize;

        while inputs.len() < self.batch_size {
            if rounds == self.max_rounds {
                return Err(SamplerError::Exhausted {
                    rounds,
                    filled:     inputs.len(),
                    batch_size: self.batch_size,
                });
            }
            rounds += 1;

            let doc_id   = rng.gen_range(0..corpus.len());
            let mut pairs = sentence_pairs(&corpus[doc_id], doc_id, self.window_size, self.method);
            pairs.truncate(self.batch_size);

            for pair in pairs {
                inputs.push(pair.input);
                labels.push([pair.label]);
            }
        }

        inputs.truncate(self.batch_size);
        labels.truncate(self.batch_size);

        tracing::debug!(
            "Sampled {} {} pairs in {} rounds (window_size={})",
            inputs.len(),
            self.method,
            rounds,
            self.window_size,
        );

        Ok(TrainingBatch {
            method: self.method,
            window_size: self.window_size,
            inputs,
            labels,
        })
    }
}

/// Sample one batch with the default round cap.
pub fn generate_batch<R: Rng + ?Sized>(
    corpus:      &[Sentence],
    batch_size:  usize,
    window_size: usize,
    method:      Method,
    rng:         &mut R,
) -> Result<TrainingBatch, SamplerError> {
    WindowSampler::new(batch_size, window_size, method).sample(corpus, rng)
}

/// Like [`generate_batch`] but takes the method as its literal
/// selector (`"skip_gram"`, `"cbow"` or `"doc2vec"`).
pub fn generate_batch_str<R: Rng + ?Sized>(
    corpus:      &[Sentence],
    batch_size:  usize,
    window_size: usize,
    method:      &str,
    rng:         &mut R,
) -> Result<TrainingBatch, SamplerError> {
    let method: Method = method.parse()?;
    generate_batch(corpus, batch_size, window_size, method, rng)
}

// ─── Window construction ──────────────────────────────────────────────────────

/// Every clipped window of a sentence together with the index
/// of its center token inside the window.
fn windows(sentence: &[TokenId], window_size: usize) -> impl Iterator<Item = (&[TokenId], usize)> {
    (0..sentence.len()).map(move |pos| {
        let start = pos.saturating_sub(window_size);
        let end   = pos.saturating_add(window_size).saturating_add(1).min(sentence.len());
        (&sentence[start..end], pos.min(window_size))
    })
}

/// All pairs one sentence yields, in window order.
/// `doc_id` is the sentence's index in the corpus.
pub fn sentence_pairs(
    sentence:    &[TokenId],
    doc_id:      usize,
    window_size: usize,
    method:      Method,
) -> Vec<TrainingPair> {
    match method {
        Method::SkipGram => windows(sentence, window_size)
            .flat_map(|(window, center)| {
                let target = window[center];
                window
                    .iter()
                    .enumerate()
                    .filter(move |(j, _)| *j != center)
                    .map(move |(_, &other)| TrainingPair::new(vec![target], other))
            })
            .collect(),

        Method::Cbow => windows(sentence, window_size)
            .filter_map(|(window, center)| {
                let context: Vec<TokenId> = window[..center]
                    .iter()
                    .chain(&window[center + 1..])
                    .copied()
                    .collect();
                (window_size.checked_mul(2) == Some(context.len()))
                    .then(|| TrainingPair::new(context, window[center]))
            })
            .collect(),

        // left context only; the document id rides along as the last input id
        Method::Doc2Vec => (0..sentence.len().saturating_sub(window_size))
            .map(|i| {
                let mut input = sentence[i..i + window_size].to_vec();
                input.push(doc_id);
                TrainingPair::new(input, sentence[i + window_size])
            })
            .collect(),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashMap;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    /// Corpus whose ids are all distinct, plus id → (sentence, position).
    fn distinct_corpus() -> (Vec<Sentence>, HashMap<TokenId, (usize, usize)>) {
        let corpus: Vec<Sentence> = vec![
            (100..112).collect(),
            (200..205).collect(),
            (300..302).collect(),
            (400..409).collect(),
        ];
        let mut pos = HashMap::new();
        for (s, sentence) in corpus.iter().enumerate() {
            for (p, &tok) in sentence.iter().enumerate() {
                pos.insert(tok, (s, p));
            }
        }
        (corpus, pos)
    }

    #[test]
    fn test_skip_gram_pairs_of_short_sentence() {
        let pairs = sentence_pairs(&[1, 2, 3], 0, 1, Method::SkipGram);
        let flat: Vec<(TokenId, TokenId)> = pairs.iter().map(|p| (p.input[0], p.label)).collect();
        assert_eq!(flat, vec![(1, 2), (2, 1), (2, 3), (3, 2)]);
    }

    #[test]
    fn test_cbow_keeps_only_full_windows() {
        let pairs = sentence_pairs(&[1, 2, 3, 4, 5], 0, 1, Method::Cbow);
        assert_eq!(
            pairs,
            vec![
                TrainingPair::new(vec![1, 3], 2),
                TrainingPair::new(vec![2, 4], 3),
                TrainingPair::new(vec![3, 5], 4),
            ]
        );
    }

    #[test]
    fn test_doc2vec_appends_document_id() {
        let pairs = sentence_pairs(&[10, 20, 30, 40], 5, 2, Method::Doc2Vec);
        assert_eq!(
            pairs,
            vec![
                TrainingPair::new(vec![10, 20, 5], 30),
                TrainingPair::new(vec![20, 30, 5], 40),
            ]
        );
    }

    #[test]
    fn test_doc2vec_short_sentence_yields_nothing() {
        assert!(sentence_pairs(&[1, 2], 0, 2, Method::Doc2Vec).is_empty());
        assert!(sentence_pairs(&[1, 2], 0, 3, Method::Doc2Vec).is_empty());
    }

    #[test]
    fn test_cbow_example_batch() {
        let corpus = vec![vec![1, 2, 3, 4, 5]];
        let batch  = generate_batch(&corpus, 4, 1, Method::Cbow, &mut rng()).unwrap();

        assert_eq!(batch.inputs.len(), 4);
        assert_eq!(batch.labels.len(), 4);
        let valid = [(vec![1, 3], 2), (vec![2, 4], 3), (vec![3, 5], 4)];
        for pair in batch.pairs() {
            assert!(valid.contains(&(pair.input.clone(), pair.label)), "{pair:?}");
        }
    }

    #[test]
    fn test_doc2vec_example_batch() {
        let corpus = vec![vec![10, 20, 30]];
        let batch  = generate_batch(&corpus, 3, 1, Method::Doc2Vec, &mut rng()).unwrap();

        // window_size=1: ([10, 0] → 20) and ([20, 0] → 30)
        for pair in batch.pairs() {
            assert_eq!(pair.input.len(), 2);
            assert_eq!(pair.input[1], 0);
        }

        let batch = generate_batch(&corpus, 3, 2, Method::Doc2Vec, &mut rng()).unwrap();
        for pair in batch.pairs() {
            assert_eq!(pair, TrainingPair::new(vec![10, 20, 0], 30));
        }
    }

    #[test]
    fn test_exact_batch_size_for_every_method() {
        let (corpus, _) = distinct_corpus();
        for method in [Method::SkipGram, Method::Cbow, Method::Doc2Vec] {
            for batch_size in [1, 3, 16, 100] {
                let batch = generate_batch(&corpus, batch_size, 2, method, &mut rng()).unwrap();
                assert_eq!(batch.inputs.len(), batch_size);
                assert_eq!(batch.labels.len(), batch_size);
                assert!(batch.inputs.iter().all(|i| i.len() == method.input_width(2)));
            }
        }
    }

    #[test]
    fn test_skip_gram_pairs_stay_inside_window() {
        let (corpus, pos) = distinct_corpus();
        let window_size   = 2;
        let batch = generate_batch(&corpus, 200, window_size, Method::SkipGram, &mut rng()).unwrap();

        for pair in batch.pairs() {
            let (s_center, p_center) = pos[&pair.input[0]];
            let (s_other, p_other)   = pos[&pair.label];
            assert_eq!(s_center, s_other);
            assert_ne!(p_center, p_other);
            assert!(p_center.abs_diff(p_other) <= window_size);
        }
    }

    #[test]
    fn test_cbow_inputs_are_full_width_and_exclude_label() {
        let (corpus, pos) = distinct_corpus();
        let window_size   = 2;
        let batch = generate_batch(&corpus, 200, window_size, Method::Cbow, &mut rng()).unwrap();

        for pair in batch.pairs() {
            assert_eq!(pair.input.len(), 2 * window_size);
            assert!(!pair.input.contains(&pair.label));

            let (s, p) = pos[&pair.label];
            let expected: Vec<TokenId> = corpus[s][p - window_size..p]
                .iter()
                .chain(&corpus[s][p + 1..=p + window_size])
                .copied()
                .collect();
            assert_eq!(pair.input, expected);
        }
    }

    #[test]
    fn test_doc2vec_inputs_carry_doc_id_and_next_word() {
        let (corpus, pos) = distinct_corpus();
        let window_size   = 3;
        let batch = generate_batch(&corpus, 200, window_size, Method::Doc2Vec, &mut rng()).unwrap();

        for pair in batch.pairs() {
            assert_eq!(pair.input.len(), window_size + 1);
            let doc_id = *pair.input.last().unwrap();
            let (s, p) = pos[&pair.label];
            assert_eq!(doc_id, s);
            assert!(p >= window_size);
            assert_eq!(&pair.input[..window_size], &corpus[s][p - window_size..p]);
        }
    }

    #[test]
    fn test_unsupported_method_selector() {
        let corpus = vec![vec![1, 2, 3]];
        let err = generate_batch_str(&corpus, 4, 1, "unknown", &mut rng()).unwrap_err();
        assert_eq!(err, SamplerError::UnsupportedMethod("unknown".into()));
    }

    #[test]
    fn test_selector_string_dispatches() {
        let corpus = vec![vec![1, 2, 3, 4, 5]];
        let batch  = generate_batch_str(&corpus, 4, 1, "cbow", &mut rng()).unwrap();
        assert_eq!(batch.method, Method::Cbow);
        assert_eq!(batch.len(), 4);
    }

    #[test]
    fn test_empty_corpus_fails_fast() {
        let corpus: Vec<Sentence> = Vec::new();
        let err = generate_batch(&corpus, 4, 1, Method::SkipGram, &mut rng()).unwrap_err();
        assert_eq!(err, SamplerError::EmptyCorpus);
    }

    #[test]
    fn test_too_short_sentences_fail_fast() {
        let corpus = vec![vec![1, 2], vec![3], vec![]];
        let err = generate_batch(&corpus, 4, 2, Method::Doc2Vec, &mut rng()).unwrap_err();
        assert_eq!(
            err,
            SamplerError::NoUsableSentence { method: Method::Doc2Vec, window_size: 2 }
        );

        let err = generate_batch(&corpus, 4, 1, Method::Cbow, &mut rng()).unwrap_err();
        assert!(matches!(err, SamplerError::NoUsableSentence { .. }));
    }

    #[test]
    fn test_short_sentences_are_skipped_when_one_is_usable() {
        let corpus = vec![vec![7], vec![1, 2, 3], vec![8, 9]];
        let batch  = generate_batch(&corpus, 10, 2, Method::Doc2Vec, &mut rng()).unwrap();
        for pair in batch.pairs() {
            assert_eq!(pair, TrainingPair::new(vec![1, 2, 1], 3));
        }
    }

    #[test]
    fn test_round_cap_reports_progress() {
        // one pair per round, three rounds allowed
        let sampler = WindowSampler::new(10, 1, Method::Cbow).with_max_rounds(3);
        let err = sampler.sample(&[vec![1, 2, 3]], &mut rng()).unwrap_err();
        assert_eq!(err, SamplerError::Exhausted { rounds: 3, filled: 3, batch_size: 10 });
    }

    #[test]
    fn test_round_pairs_are_cut_to_batch_size() {
        let corpus = vec![vec![1, 2, 3]];
        let batch  = generate_batch(&corpus, 2, 1, Method::SkipGram, &mut rng()).unwrap();
        assert_eq!(batch.inputs, vec![vec![1], vec![2]]);
        assert_eq!(batch.labels, vec![[2], [1]]);
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let (corpus, _) = distinct_corpus();
        let a = generate_batch(&corpus, 32, 2, Method::SkipGram, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = generate_batch(&corpus, 32, 2, Method::SkipGram, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_window_cbow_uses_empty_context() {
        let batch = generate_batch(&[vec![4, 5]], 2, 0, Method::Cbow, &mut rng()).unwrap();
        assert!(batch.inputs.iter().all(|i| i.is_empty()));
        assert_eq!(batch.labels, vec![[4], [5]]);
    }

    #[test]
    fn test_oversized_window_is_reported_not_overflowed() {
        let huge   = usize::MAX / 2 + 1;
        let corpus = vec![vec![1, 2, 3]];
        for method in [Method::Cbow, Method::Doc2Vec] {
            let err = generate_batch(&corpus, 2, huge, method, &mut rng()).unwrap_err();
            assert_eq!(err, SamplerError::NoUsableSentence { method, window_size: huge });
        }
        assert!(sentence_pairs(&[1], 0, huge, Method::Cbow).is_empty());

        // skip-gram windows clip to the sentence
        let batch = generate_batch(&corpus, 6, usize::MAX, Method::SkipGram, &mut rng()).unwrap();
        assert_eq!(batch.len(), 6);
    }
}
