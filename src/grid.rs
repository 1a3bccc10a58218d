// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Block-raster storage for the coefficient blocks of one image component.

use crate::block::{Block, BLOCK_DIM, BLOCK_LEN};

/// Grid of 8×8 coefficient blocks for one image component.
///
/// Coefficients are stored in block-raster order. Within each block,
/// the 64 coefficients are in natural (row-major) order.
#[derive(Debug, Clone)]
pub struct BlockGrid {
    /// Number of 8×8 blocks horizontally.
    blocks_wide: usize,
    /// Number of 8×8 blocks vertically.
    blocks_tall: usize,
    /// Flat storage: blocks_tall * blocks_wide * 64 coefficients.
    coeffs: Vec<i32>,
}

impl BlockGrid {
    /// Create a new grid initialized to zero.
    pub fn new(blocks_wide: usize, blocks_tall: usize) -> Self {
        Self {
            blocks_wide,
            blocks_tall,
            coeffs: vec![0i32; blocks_wide * blocks_tall * BLOCK_LEN],
        }
    }

    pub fn blocks_wide(&self) -> usize {
        self.blocks_wide
    }

    pub fn blocks_tall(&self) -> usize {
        self.blocks_tall
    }

    /// Total number of blocks.
    pub fn total_blocks(&self) -> usize {
        self.blocks_wide * self.blocks_tall
    }

    /// Get a coefficient value.
    /// - `br`, `bc`: block row and column (0-based)
    /// - `i`, `j`: frequency row and column within the block (0–7)
    pub fn get(&self, br: usize, bc: usize, i: usize, j: usize) -> i32 {
        self.coeffs[self.index(br, bc, i, j)]
    }

    /// Set a coefficient value.
    pub fn set(&mut self, br: usize, bc: usize, i: usize, j: usize, val: i32) {
        let idx = self.index(br, bc, i, j);
        self.coeffs[idx] = val;
    }

    /// Copy of the block at (br, bc).
    pub fn block(&self, br: usize, bc: usize) -> Block {
        let start = (br * self.blocks_wide + bc) * BLOCK_LEN;
        let mut coeffs = [0i32; BLOCK_LEN];
        coeffs.copy_from_slice(&self.coeffs[start..start + BLOCK_LEN]);
        Block::new(coeffs)
    }

    /// Overwrite the block at (br, bc).
    pub fn set_block(&mut self, br: usize, bc: usize, block: &Block) {
        let start = (br * self.blocks_wide + bc) * BLOCK_LEN;
        self.coeffs[start..start + BLOCK_LEN].copy_from_slice(block.coeffs());
    }

    /// Iterate `(br, bc, block)` in block-raster order.
    pub fn blocks(&self) -> impl Iterator<Item = (usize, usize, Block)> + '_ {
        let bw = self.blocks_wide.max(1);
        (0..self.total_blocks()).map(move |k| (k / bw, k % bw, self.block(k / bw, k % bw)))
    }

    /// Raw read-only access to all coefficients.
    pub fn coeffs(&self) -> &[i32] {
        &self.coeffs
    }

    fn index(&self, br: usize, bc: usize, i: usize, j: usize) -> usize {
        debug_assert!(br < self.blocks_tall, "block row {br} >= {}", self.blocks_tall);
        debug_assert!(bc < self.blocks_wide, "block col {bc} >= {}", self.blocks_wide);
        debug_assert!(i < BLOCK_DIM && j < BLOCK_DIM);
        (br * self.blocks_wide + bc) * BLOCK_LEN + i * BLOCK_DIM + j
    }
}
