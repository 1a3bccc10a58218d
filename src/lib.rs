// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! # phasm-overflow
//!
//! Per-block overflow correction decisions for reversible data embedding in
//! the DCT domain. Embedding into quantized coefficients can push decoded
//! pixels outside the representable range; this crate decides, for each 8×8
//! block, whether and where that overflow should be corrected:
//!
//! - **Inner region** (central 6×6): fixed whenever its overflow exceeds `O1`.
//! - **Boundary ring**: fixed only while its overflow stays below `O2`, with
//!   the three non-DC corners always exempt to keep cross-block correlation.
//! - **Strength**: textured ("hard") blocks get a raised correction strength.
//!
//! Overflow measurement and the numeric pixel fix live outside this crate:
//! callers supply an [`OverflowEstimate`] per block and apply the returned
//! [`Correction`] in their reconstruction step.
//!
//! # Quick start
//!
//! ```rust
//! use phasm_overflow::{Block, BlockOverflowCorrector, CorrectorConfig, OverflowEstimate};
//!
//! let corrector = BlockOverflowCorrector::new(CorrectorConfig::reference()).unwrap();
//! let block = Block::zeros();
//! let out = corrector.correct(&block, OverflowEstimate::new(3.0, 10.0)).unwrap();
//! assert!(out.inner_triggered);
//! assert_eq!(out.corrected_positions.len(), 25);
//! ```

pub mod batch;
pub mod block;
pub mod config;
pub mod corrector;
pub mod error;
pub mod estimate;
pub mod grid;
pub mod hardness;
pub mod region;
pub mod strength;

pub use batch::{correct_grid, correct_grid_with, GridCorrection};
pub use block::{Block, Position, BLOCK_DIM, BLOCK_LEN};
pub use config::CorrectorConfig;
pub use corrector::{correct, BlockOverflowCorrector, Correction};
pub use error::{ConfigParam, CorrectionError, OverflowField, Result};
pub use estimate::{OverflowEstimate, OverflowEstimator};
pub use grid::BlockGrid;
pub use hardness::{is_hard, HardnessClassifier, NonZeroCount, DEFAULT_HARDNESS_THRESHOLD};
pub use region::{CornerSet, RegionMask, CORNERS};
pub use strength::{effective_strength, DEFAULT_HARDNESS_INCREMENT};
