// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Per-block overflow estimates.
//!
//! Overflow is measured on decoded pixels, outside this crate. The corrector
//! only consumes the two magnitudes, one per region, through
//! [`OverflowEstimate`]; grid drivers pull them from an [`OverflowEstimator`].

use crate::block::Block;
use crate::error::{is_non_negative, CorrectionError, OverflowField, Result};

/// Pixel-domain overflow magnitudes for one block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverflowEstimate {
    /// Overflow measured over the inner region.
    pub inner: f64,
    /// Overflow measured over the boundary ring.
    pub boundary: f64,
}

impl OverflowEstimate {
    pub const fn new(inner: f64, boundary: f64) -> Self {
        Self { inner, boundary }
    }

    /// # Errors
    /// [`CorrectionError::Input`] if either value is negative or NaN.
    pub fn validate(&self) -> Result<()> {
        if !is_non_negative(self.inner) {
            return Err(CorrectionError::Input { field: OverflowField::Inner, value: self.inner });
        }
        if !is_non_negative(self.boundary) {
            return Err(CorrectionError::Input { field: OverflowField::Boundary, value: self.boundary });
        }
        Ok(())
    }
}

/// Source of overflow estimates for the blocks of a grid.
///
/// Implemented for closures `Fn(br, bc, &Block) -> OverflowEstimate` and for
/// [`OverflowEstimate`] itself (same estimate for every block).
pub trait OverflowEstimator {
    fn estimate(&self, br: usize, bc: usize, block: &Block) -> OverflowEstimate;
}

impl<F> OverflowEstimator for F
where
    F: Fn(usize, usize, &Block) -> OverflowEstimate,
{
    fn estimate(&self, br: usize, bc: usize, block: &Block) -> OverflowEstimate {
        self(br, bc, block)
    }
}

impl OverflowEstimator for OverflowEstimate {
    fn estimate(&self, _br: usize, _bc: usize, _block: &Block) -> OverflowEstimate {
        *self
    }
}
