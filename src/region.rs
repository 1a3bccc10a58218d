// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Fixed block geometry: inner/boundary regions and exempt corners.
//!
//! The inner region is the central 6×6 square (rows and columns 1..=6). The
//! boundary region is the outermost ring, its complement. Three boundary
//! corners, all except DC at (0, 0), are exempt from boundary correction so
//! the pixel correlation across neighbouring blocks survives.

use crate::block::{Position, BLOCK_DIM, BLOCK_LEN};

/// First row/column of the inner region.
const INNER_START: usize = 1;
/// Last row/column of the inner region (inclusive).
const INNER_END: usize = BLOCK_DIM - 2;

/// Number of positions in the inner region (6 × 6).
pub const INNER_COUNT: usize = 36;
/// Number of positions in the boundary region (64 − 36).
pub const BOUNDARY_COUNT: usize = BLOCK_LEN - INNER_COUNT;

/// Non-DC corners of a block, in raster order.
pub const CORNERS: [Position; 3] = [
    Position { row: 0, col: 7 },
    Position { row: 7, col: 0 },
    Position { row: 7, col: 7 },
];

/// Inner/boundary partition of the 64 block positions.
///
/// `inner[idx]` is `true` for inner positions; every other position is
/// boundary, so the two regions cover the block exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionMask {
    inner: [bool; BLOCK_LEN],
}

impl RegionMask {
    /// Build the fixed 6×6-inner mask.
    pub fn new() -> Self {
        let mut inner = [false; BLOCK_LEN];
        for i in INNER_START..=INNER_END {
            for j in INNER_START..=INNER_END {
                inner[i * BLOCK_DIM + j] = true;
            }
        }
        Self { inner }
    }

    pub fn is_inner(&self, pos: Position) -> bool {
        self.inner[pos.index()]
    }

    pub fn is_boundary(&self, pos: Position) -> bool {
        !self.inner[pos.index()]
    }

    /// Inner positions in raster order.
    pub fn inner_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&p| self.is_inner(p))
    }

    /// Boundary positions in raster order.
    pub fn boundary_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&p| self.is_boundary(p))
    }
}

impl Default for RegionMask {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed set of corner positions exempt from boundary correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerSet {
    corners: [Position; 3],
}

impl CornerSet {
    pub const fn new() -> Self {
        Self { corners: CORNERS }
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.corners.contains(&pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.corners.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.corners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }
}

impl Default for CornerSet {
    fn default() -> Self {
        Self::new()
    }
}
