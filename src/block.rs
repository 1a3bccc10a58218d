// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Single 8×8 coefficient block and coefficient positions.
//!
//! Coefficients are stored in natural (row-major) order, i.e.
//! index = row * 8 + col. Position (0, 0) is the DC coefficient.

use crate::error::{CorrectionError, Result};

/// Block side length.
pub const BLOCK_DIM: usize = 8;

/// Number of coefficients in a block.
pub const BLOCK_LEN: usize = BLOCK_DIM * BLOCK_DIM;

/// Frequency position (row, col) within a block, both in `0..8`.
///
/// Ordered row-major, so sorted positions follow raster order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < BLOCK_DIM && col < BLOCK_DIM);
        Self { row, col }
    }

    /// Natural-order index (row * 8 + col).
    pub const fn index(self) -> usize {
        self.row * BLOCK_DIM + self.col
    }

    /// Inverse of [`Position::index`].
    pub const fn from_index(idx: usize) -> Self {
        Self { row: idx / BLOCK_DIM, col: idx % BLOCK_DIM }
    }

    /// All 64 positions in raster order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BLOCK_LEN).map(Position::from_index)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// One 8×8 block of signed transform coefficients.
///
/// The fixed-size storage makes a non-8×8 `Block` unrepresentable; the
/// fallible constructors are where shape errors are raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    coeffs: [i32; BLOCK_LEN],
}

impl Default for Block {
    fn default() -> Self {
        Self::zeros()
    }
}

impl Block {
    /// All-zero block.
    pub const fn zeros() -> Self {
        Self { coeffs: [0; BLOCK_LEN] }
    }

    pub const fn new(coeffs: [i32; BLOCK_LEN]) -> Self {
        Self { coeffs }
    }

    /// Build a block from a flat natural-order slice.
    ///
    /// # Errors
    /// [`CorrectionError::Shape`] if `coeffs.len() != 64`.
    pub fn from_slice(coeffs: &[i32]) -> Result<Self> {
        let arr: [i32; BLOCK_LEN] = coeffs
            .try_into()
            .map_err(|_| CorrectionError::Shape { len: coeffs.len() })?;
        Ok(Self { coeffs: arr })
    }

    /// Build a block from 8 rows of 8 coefficients.
    ///
    /// # Errors
    /// [`CorrectionError::ShapeRows`] if there are not exactly 8 rows, or any
    /// row is not exactly 8 wide.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self> {
        if rows.len() != BLOCK_DIM {
            let cols = rows.first().map_or(0, |r| r.as_ref().len());
            return Err(CorrectionError::ShapeRows { rows: rows.len(), cols });
        }
        let mut coeffs = [0i32; BLOCK_LEN];
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != BLOCK_DIM {
                return Err(CorrectionError::ShapeRows { rows: rows.len(), cols: row.len() });
            }
            coeffs[i * BLOCK_DIM..(i + 1) * BLOCK_DIM].copy_from_slice(row);
        }
        Ok(Self { coeffs })
    }

    /// Get the coefficient at frequency position (i, j).
    pub fn get(&self, i: usize, j: usize) -> i32 {
        debug_assert!(i < BLOCK_DIM && j < BLOCK_DIM);
        self.coeffs[i * BLOCK_DIM + j]
    }

    /// Set the coefficient at frequency position (i, j).
    pub fn set(&mut self, i: usize, j: usize, val: i32) {
        debug_assert!(i < BLOCK_DIM && j < BLOCK_DIM);
        self.coeffs[i * BLOCK_DIM + j] = val;
    }

    pub fn at(&self, pos: Position) -> i32 {
        self.coeffs[pos.index()]
    }

    /// Raw read-only access in natural order.
    pub fn coeffs(&self) -> &[i32; BLOCK_LEN] {
        &self.coeffs
    }

    /// Number of non-zero coefficients, DC included.
    pub fn count_nonzero(&self) -> u32 {
        self.coeffs.iter().filter(|&&c| c != 0).count() as u32
    }
}

impl From<[i32; BLOCK_LEN]> for Block {
    fn from(coeffs: [i32; BLOCK_LEN]) -> Self {
        Self::new(coeffs)
    }
}

impl From<[[i32; BLOCK_DIM]; BLOCK_DIM]> for Block {
    fn from(rows: [[i32; BLOCK_DIM]; BLOCK_DIM]) -> Self {
        let mut coeffs = [0i32; BLOCK_LEN];
        for (i, row) in rows.iter().enumerate() {
            coeffs[i * BLOCK_DIM..(i + 1) * BLOCK_DIM].copy_from_slice(row);
        }
        Self { coeffs }
    }
}

impl TryFrom<&[i32]> for Block {
    type Error = CorrectionError;

    fn try_from(coeffs: &[i32]) -> Result<Self> {
        Self::from_slice(coeffs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_get_set() {
        let mut blk = Block::zeros();
        assert_eq!(blk.get(0, 0), 0);

        blk.set(3, 4, 42);
        assert_eq!(blk.get(3, 4), 42);
        assert_eq!(blk.coeffs()[3 * 8 + 4], 42);
        assert_eq!(blk.at(Position::new(3, 4)), 42);

        // Other positions unchanged
        assert_eq!(blk.get(3, 3), 0);
        assert_eq!(blk.get(4, 3), 0);
    }

    #[test]
    fn from_slice_checks_length() {
        assert!(Block::from_slice(&[1; 64]).is_ok());
        assert_eq!(Block::from_slice(&[1; 63]), Err(CorrectionError::Shape { len: 63 }));
        assert_eq!(Block::from_slice(&[]), Err(CorrectionError::Shape { len: 0 }));
        assert_eq!(Block::try_from(&[0i32; 65][..]), Err(CorrectionError::Shape { len: 65 }));
    }

    #[test]
    fn from_rows_checks_shape() {
        let good = vec![vec![1i32; 8]; 8];
        let blk = Block::from_rows(&good).unwrap();
        assert_eq!(blk.count_nonzero(), 64);

        let short = vec![vec![1i32; 8]; 7];
        assert_eq!(Block::from_rows(&short), Err(CorrectionError::ShapeRows { rows: 7, cols: 8 }));

        let mut ragged = vec![vec![1i32; 8]; 8];
        ragged[5].pop();
        assert_eq!(Block::from_rows(&ragged), Err(CorrectionError::ShapeRows { rows: 8, cols: 7 }));

        let empty: Vec<Vec<i32>> = Vec::new();
        assert_eq!(Block::from_rows(&empty), Err(CorrectionError::ShapeRows { rows: 0, cols: 0 }));
    }

    #[test]
    fn from_rows_is_row_major() {
        let mut rows = [[0i32; 8]; 8];
        rows[7][0] = -5;
        rows[0][7] = 9;
        let blk = Block::from(rows);
        assert_eq!(blk.get(7, 0), -5);
        assert_eq!(blk.get(0, 7), 9);
        assert_eq!(blk.coeffs()[56], -5);
        assert_eq!(blk.coeffs()[7], 9);
    }

    #[test]
    fn position_index_roundtrip_and_order() {
        for (idx, pos) in Position::all().enumerate() {
            assert_eq!(pos.index(), idx);
            assert_eq!(Position::from_index(idx), pos);
        }
        assert!(Position::new(0, 7) < Position::new(1, 0));
    }

    #[test]
    fn count_nonzero_includes_dc_and_negatives() {
        let mut blk = Block::zeros();
        blk.set(0, 0, 100);
        blk.set(2, 2, -1);
        blk.set(7, 7, 3);
        assert_eq!(blk.count_nonzero(), 3);
    }
}
