// ============================================================
// Layer 4 — Window Batcher
// ============================================================
// Implements Burn's Batcher trait to stack TrainingPairs into
// Int tensors an embedding model can consume.
//
// How batching works here:
//   Input:  N pairs, each input row of width W
//   Output: inputs [N, W] and labels [N, 1]
//
//   Rows are flattened into one Vec and reshaped:
//   [p1_0, p1_1, ..., p1_W, p2_0, ..., pN_W] → [N, W]
//
// Every row produced by one sampler call has the same width
// (1 for skip_gram, 2·window for cbow, window+1 for doc2vec),
// so no padding is needed.
//
// Reference: Burn Book §4 (Batcher)
//            Rust Book §8 (Vectors)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
    tensor::TensorData,
};

use crate::domain::batch::{TrainingBatch, TrainingPair};

/// CPU backend used when batches are built outside a trainer.
pub type DefaultBackend = burn::backend::NdArray;

// ─── WindowBatch ──────────────────────────────────────────────────────────────
/// A sampled batch on a device.
#[derive(Debug, Clone)]
pub struct WindowBatch<B: Backend> {
    /// Context/center ids — shape: [batch_size, input_width]
    pub inputs: Tensor<B, 2, Int>,

    /// Target ids as a column — shape: [batch_size, 1]
    pub labels: Tensor<B, 2, Int>,
}

// ─── WindowBatcher ────────────────────────────────────────────────────────────
#[derive(Clone, Debug, Default)]
pub struct WindowBatcher;

impl WindowBatcher {
    pub fn new() -> Self {
        Self
    }

    /// Convenience wrapper for a whole sampled batch.
    pub fn batch_sampled<B: Backend>(
        &self,
        batch:  &TrainingBatch,
        device: &B::Device,
    ) -> WindowBatch<B> {
        self.stack(batch.pairs().collect(), batch.input_width(), device)
    }

    fn stack<B: Backend>(
        &self,
        items:  Vec<TrainingPair>,
        width:  usize,
        device: &B::Device,
    ) -> WindowBatch<B> {
        let n = items.len();

        let input_flat: Vec<i64> = items
            .iter()
            .flat_map(|p| p.input.iter().map(|&id| id as i64))
            .collect();

        let label_flat: Vec<i64> = items.iter().map(|p| p.label as i64).collect();

        let inputs = TensorData::new(input_flat, [n, width]).convert::<B::IntElem>();
        let labels = TensorData::new(label_flat, [n, 1]).convert::<B::IntElem>();

        WindowBatch {
            inputs: Tensor::from_data(inputs, device),
            labels: Tensor::from_data(labels, device),
        }
    }
}

// ─── Burn Batcher Trait Implementation ────────────────────────────────────────
impl<B: Backend> Batcher<B, TrainingPair, WindowBatch<B>> for WindowBatcher {
    /// Row width is taken from the first pair; all pairs from one
    /// sampler call share it.
    fn batch(&self, items: Vec<TrainingPair>, device: &B::Device) -> WindowBatch<B> {
        let width = items.first().map(|p| p.input.len()).unwrap_or(0);
        debug_assert!(items.iter().all(|p| p.input.len() == width));
        self.stack(items, width, device)
    }
}
