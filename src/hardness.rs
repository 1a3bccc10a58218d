// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Texture-based hardness classification.
//!
//! A "hard" block is one with enough local texture that the boundary fix
//! needs extra strength. [`NonZeroCount`] is a coarse placeholder policy, not
//! a perceptual model: it counts non-zero coefficients. Any other scalar
//! texture metric can be plugged in through [`HardnessClassifier`] as long as
//! it yields one boolean per block.

use crate::block::Block;

/// Default non-zero count above which a block is hard (20 of 64).
pub const DEFAULT_HARDNESS_THRESHOLD: u32 = 20;

/// Classifies a block as hard (high texture) or easy.
pub trait HardnessClassifier {
    /// Scalar texture score for the block.
    fn texture_score(&self, block: &Block) -> u32;

    /// `true` if the block should receive increased correction strength.
    fn is_hard(&self, block: &Block) -> bool;
}

/// Hard iff the number of non-zero coefficients (DC included) exceeds
/// `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonZeroCount {
    pub threshold: u32,
}

impl NonZeroCount {
    pub const fn new(threshold: u32) -> Self {
        Self { threshold }
    }
}

impl Default for NonZeroCount {
    fn default() -> Self {
        Self::new(DEFAULT_HARDNESS_THRESHOLD)
    }
}

impl HardnessClassifier for NonZeroCount {
    fn texture_score(&self, block: &Block) -> u32 {
        block.count_nonzero()
    }

    fn is_hard(&self, block: &Block) -> bool {
        self.texture_score(block) > self.threshold
    }
}

/// Classify with the default placeholder policy.
pub fn is_hard(block: &Block) -> bool {
    NonZeroCount::default().is_hard(block)
}
