// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Grid-level driver: runs the corrector over every block of a component.
//!
//! Blocks are independent, so with the `parallel` feature they are corrected
//! concurrently. Results are always returned in block-raster order.

use crate::block::Block;
use crate::corrector::{BlockOverflowCorrector, Correction};
use crate::error::{CorrectionError, Result};
use crate::estimate::{OverflowEstimate, OverflowEstimator};
use crate::grid::BlockGrid;
use crate::hardness::HardnessClassifier;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Corrections for every block of a grid, with summary counters.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCorrection {
    pub blocks_wide: usize,
    pub blocks_tall: usize,
    /// One entry per block, block-raster order.
    pub corrections: Vec<Correction>,
    /// Blocks whose inner fix was triggered.
    pub inner_triggered: usize,
    /// Blocks classified hard.
    pub hard_blocks: usize,
    /// Blocks whose boundary was processed.
    pub boundary_processed: usize,
    /// Sum of eligible boundary positions over all blocks.
    pub corrected_positions: usize,
}

impl GridCorrection {
    fn from_corrections(blocks_wide: usize, blocks_tall: usize, corrections: Vec<Correction>) -> Self {
        let mut out = Self {
            blocks_wide,
            blocks_tall,
            corrections: Vec::new(),
            inner_triggered: 0,
            hard_blocks: 0,
            boundary_processed: 0,
            corrected_positions: 0,
        };
        for c in &corrections {
            out.inner_triggered += c.inner_triggered as usize;
            out.hard_blocks += c.is_hard as usize;
            out.boundary_processed += c.boundary_processed as usize;
            out.corrected_positions += c.corrected_positions.len();
        }
        out.corrections = corrections;
        out
    }

    /// Correction for block (br, bc).
    pub fn get(&self, br: usize, bc: usize) -> &Correction {
        &self.corrections[br * self.blocks_wide + bc]
    }

    /// Reassemble the output blocks into a grid.
    pub fn to_grid(&self) -> BlockGrid {
        let mut grid = BlockGrid::new(self.blocks_wide, self.blocks_tall);
        for (k, c) in self.corrections.iter().enumerate() {
            grid.set_block(k / self.blocks_wide, k % self.blocks_wide, &c.block);
        }
        grid
    }
}

/// Correct every block of `grid`, asking `estimator` for each block's overflow.
///
/// # Errors
/// [`CorrectionError::Input`] if any block's estimate is invalid. No partial
/// result is returned.
pub fn correct_grid<C, E>(
    corrector: &BlockOverflowCorrector<C>,
    grid: &BlockGrid,
    estimator: &E,
) -> Result<GridCorrection>
where
    C: HardnessClassifier + Sync,
    E: OverflowEstimator + Sync,
{
    let bw = grid.blocks_wide();
    let correct_one = |k: usize| -> Result<Correction> {
        let (br, bc) = (k / bw, k % bw);
        let block = grid.block(br, bc);
        let overflow = estimator.estimate(br, bc, &block);
        corrector.correct(&block, overflow)
    };
    run(grid, correct_one)
}

/// Correct every block of `grid` with precomputed estimates, one per block
/// in block-raster order.
///
/// # Errors
/// [`CorrectionError::GridShape`] if `estimates.len()` differs from the
/// block count, otherwise as [`correct_grid`].
pub fn correct_grid_with<C>(
    corrector: &BlockOverflowCorrector<C>,
    grid: &BlockGrid,
    estimates: &[OverflowEstimate],
) -> Result<GridCorrection>
where
    C: HardnessClassifier + Sync,
{
    if estimates.len() != grid.total_blocks() {
        return Err(CorrectionError::GridShape {
            expected: grid.total_blocks(),
            actual: estimates.len(),
        });
    }
    let bw = grid.blocks_wide();
    let correct_one = |k: usize| -> Result<Correction> {
        let block: Block = grid.block(k / bw, k % bw);
        corrector.correct(&block, estimates[k])
    };
    run(grid, correct_one)
}

fn run<F>(grid: &BlockGrid, correct_one: F) -> Result<GridCorrection>
where
    F: Fn(usize) -> Result<Correction> + Sync + Send,
{
    let n = grid.total_blocks();

    #[cfg(feature = "parallel")]
    let corrections: Result<Vec<Correction>> = (0..n).into_par_iter().map(correct_one).collect();
    #[cfg(not(feature = "parallel"))]
    let corrections: Result<Vec<Correction>> = (0..n).map(correct_one).collect();

    let out = GridCorrection::from_corrections(grid.blocks_wide(), grid.blocks_tall(), corrections?);
    log::debug!(
        "corrected {n} blocks: {} inner, {} hard, {} boundary ({} positions)",
        out.inner_triggered, out.hard_blocks, out.boundary_processed, out.corrected_positions
    );
    Ok(out)
}
