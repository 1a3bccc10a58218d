// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Per-block overflow correction decisions.
//!
//! For each block the corrector decides, in order:
//!
//! 1. **Inner**: inner overflow above `O1` requires the inner fix. There is no
//!    texture gating here.
//! 2. **Strength**: hard (textured) blocks get `base_strength + increment`.
//! 3. **Boundary**: boundary overflow strictly below `O2` makes every boundary
//!    position eligible except the three non-DC corners, which are always
//!    exempt. At or above `O2` the boundary is skipped entirely.
//!
//! The numeric pixel fix is applied by a later reconstruction step, driven by
//! [`Correction::corrected_positions`] and [`Correction::effective_strength`].
//! The returned block is an independent copy of the input.

use std::collections::BTreeSet;

use crate::block::{Block, Position};
use crate::config::CorrectorConfig;
use crate::error::Result;
use crate::estimate::OverflowEstimate;
use crate::hardness::{HardnessClassifier, NonZeroCount};
use crate::region::{CornerSet, RegionMask};
use crate::strength::effective_strength;

/// Decisions made for one block.
#[derive(Debug, Clone, PartialEq)]
pub struct Correction {
    /// Output block. Currently identical to the input.
    pub block: Block,
    /// Inner overflow exceeded `O1`.
    pub inner_triggered: bool,
    pub is_hard: bool,
    /// Strength the reconstruction step should use.
    pub effective_strength: f64,
    /// Boundary overflow was below `O2`.
    pub boundary_processed: bool,
    /// Boundary positions eligible for correction. Empty when the boundary
    /// was skipped.
    pub corrected_positions: BTreeSet<Position>,
    /// Corners exempt from boundary correction. Always the full corner set.
    pub exempted_corners: BTreeSet<Position>,
}

impl Correction {
    /// Alias for [`Correction::corrected_positions`].
    pub fn eligible_positions(&self) -> &BTreeSet<Position> {
        &self.corrected_positions
    }

    /// Nothing for the reconstruction step to do.
    pub fn is_noop(&self) -> bool {
        !self.inner_triggered && !self.boundary_processed
    }
}

/// Overflow corrector holding validated configuration and fixed geometry.
///
/// Stateless between calls: `correct` depends only on its arguments and the
/// immutable fields, so one corrector can be shared across threads.
#[derive(Debug, Clone)]
pub struct BlockOverflowCorrector<C = NonZeroCount> {
    config: CorrectorConfig,
    mask: RegionMask,
    corners: CornerSet,
    classifier: C,
}

impl BlockOverflowCorrector<NonZeroCount> {
    /// Corrector with the default non-zero-count hardness policy.
    ///
    /// # Errors
    /// [`crate::CorrectionError::Configuration`] if any parameter is negative.
    pub fn new(config: CorrectorConfig) -> Result<Self> {
        Self::with_classifier(config, NonZeroCount::default())
    }
}

impl<C: HardnessClassifier> BlockOverflowCorrector<C> {
    /// Corrector with a custom hardness classifier.
    pub fn with_classifier(config: CorrectorConfig, classifier: C) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            mask: RegionMask::new(),
            corners: CornerSet::new(),
            classifier,
        })
    }

    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    pub fn mask(&self) -> &RegionMask {
        &self.mask
    }

    pub fn corners(&self) -> &CornerSet {
        &self.corners
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Decide how to correct one block.
    ///
    /// # Errors
    /// [`crate::CorrectionError::Input`] if either overflow value is negative.
    pub fn correct(&self, block: &Block, overflow: OverflowEstimate) -> Result<Correction> {
        overflow.validate()?;

        let corrected = *block;
        let cfg = &self.config;

        let inner_triggered = overflow.inner > cfg.inner_tolerance;
        if inner_triggered {
            log::debug!(
                "inner overflow {} > {}: inner fix required",
                overflow.inner, cfg.inner_tolerance
            );
        }

        let is_hard = self.classifier.is_hard(block);
        let strength = effective_strength(cfg.base_strength, is_hard, cfg.hardness_increment);
        if is_hard {
            log::debug!(
                "hard block (texture score {}): strength raised to {strength}",
                self.classifier.texture_score(block)
            );
        }

        let exempted_corners: BTreeSet<Position> = self.corners.iter().collect();
        let boundary_processed = overflow.boundary < cfg.boundary_tolerance;
        let corrected_positions = if boundary_processed {
            log::debug!(
                "boundary overflow {} < {}: processing boundary",
                overflow.boundary, cfg.boundary_tolerance
            );
            self.mask
                .boundary_positions()
                .filter(|&pos| {
                    let exempt = self.corners.contains(pos);
                    if exempt {
                        log::trace!("corner ({}, {}) exempt", pos.row, pos.col);
                    }
                    !exempt
                })
                .collect()
        } else {
            log::debug!(
                "boundary overflow {} >= {}: boundary skipped",
                overflow.boundary, cfg.boundary_tolerance
            );
            BTreeSet::new()
        };

        Ok(Correction {
            block: corrected,
            inner_triggered,
            is_hard,
            effective_strength: strength,
            boundary_processed,
            corrected_positions,
            exempted_corners,
        })
    }

    /// [`BlockOverflowCorrector::correct`] on a flat natural-order slice.
    ///
    /// # Errors
    /// [`crate::CorrectionError::Shape`] if the slice does not hold 64 values,
    /// then the errors of `correct`.
    pub fn correct_slice(&self, coeffs: &[i32], overflow: OverflowEstimate) -> Result<Correction> {
        let block = Block::from_slice(coeffs)?;
        self.correct(&block, overflow)
    }
}

/// One-shot correction with the default hardness policy.
///
/// Validates `config`, then `overflow`, before any decision is made.
pub fn correct(block: &Block, overflow: OverflowEstimate, config: &CorrectorConfig) -> Result<Correction> {
    BlockOverflowCorrector::new(*config)?.correct(block, overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigParam, CorrectionError, OverflowField};

    fn block_with_nonzeros(n: usize) -> Block {
        let mut coeffs = [0i32; 64];
        for c in coeffs.iter_mut().take(n) {
            *c = 5;
        }
        Block::new(coeffs)
    }

    fn reference() -> BlockOverflowCorrector {
        BlockOverflowCorrector::new(CorrectorConfig::reference()).unwrap()
    }

    #[test]
    fn reference_scenario_boundary_processed() {
        let blk = block_with_nonzeros(25);
        let out = reference().correct(&blk, OverflowEstimate::new(3.0, 10.0)).unwrap();

        assert!(out.inner_triggered);
        assert!(out.is_hard);
        assert_eq!(out.effective_strength, 10.0);
        assert!(out.boundary_processed);
        assert_eq!(out.corrected_positions.len(), 25);
        assert_eq!(out.exempted_corners.len(), 3);
        assert_eq!(out.block, blk);
    }

    #[test]
    fn reference_scenario_boundary_skipped() {
        let blk = block_with_nonzeros(25);
        let out = reference().correct(&blk, OverflowEstimate::new(3.0, 20.0)).unwrap();

        assert!(!out.boundary_processed);
        assert!(out.corrected_positions.is_empty());
        assert_eq!(out.exempted_corners.len(), 3);
    }

    #[test]
    fn boundary_gate_is_strict() {
        // overflow == O2 skips the boundary.
        let out = reference().correct(&Block::zeros(), OverflowEstimate::new(0.0, 18.0)).unwrap();
        assert!(!out.boundary_processed);

        let out = reference().correct(&Block::zeros(), OverflowEstimate::new(0.0, 17.999)).unwrap();
        assert!(out.boundary_processed);
    }

    #[test]
    fn inner_gate_is_strict() {
        let c = BlockOverflowCorrector::new(CorrectorConfig::new(2.0, 18.0, 8.0)).unwrap();
        assert!(!c.correct(&Block::zeros(), OverflowEstimate::new(2.0, 0.0)).unwrap().inner_triggered);
        assert!(c.correct(&Block::zeros(), OverflowEstimate::new(2.5, 0.0)).unwrap().inner_triggered);
    }

    #[test]
    fn corrected_positions_never_include_corners_or_inner() {
        let c = reference();
        let out = c.correct(&Block::zeros(), OverflowEstimate::new(0.0, 0.0)).unwrap();
        for pos in &out.corrected_positions {
            assert!(c.mask().is_boundary(*pos));
            assert!(!c.corners().contains(*pos));
        }
        assert!(out.corrected_positions.contains(&Position::new(0, 0)));
    }

    #[test]
    fn easy_block_keeps_base_strength() {
        let out = reference().correct(&block_with_nonzeros(20), OverflowEstimate::new(0.0, 0.0)).unwrap();
        assert!(!out.is_hard);
        assert_eq!(out.effective_strength, 8.0);
        assert!(!out.inner_triggered);
        assert!(!out.is_noop());
    }

    #[test]
    fn noop_when_nothing_triggers() {
        let out = reference().correct(&Block::zeros(), OverflowEstimate::new(0.0, 30.0)).unwrap();
        assert!(out.is_noop());
    }

    #[test]
    fn negative_overflow_rejected() {
        let c = reference();
        assert_eq!(
            c.correct(&Block::zeros(), OverflowEstimate::new(-1.0, 0.0)),
            Err(CorrectionError::Input { field: OverflowField::Inner, value: -1.0 })
        );
        assert!(matches!(
            c.correct(&Block::zeros(), OverflowEstimate::new(0.0, -1.0)),
            Err(CorrectionError::Input { field: OverflowField::Boundary, .. })
        ));
    }

    #[test]
    fn invalid_config_rejected_before_overflow() {
        let cfg = CorrectorConfig::new(0.0, -1.0, 8.0);
        match correct(&Block::zeros(), OverflowEstimate::new(-5.0, -5.0), &cfg) {
            Err(CorrectionError::Configuration { param: ConfigParam::BoundaryTolerance, .. }) => {}
            other => panic!("expected Configuration error, got {other:?}"),
        }
    }

    #[test]
    fn correct_slice_checks_shape() {
        let c = reference();
        assert_eq!(
            c.correct_slice(&[0; 60], OverflowEstimate::new(0.0, 0.0)),
            Err(CorrectionError::Shape { len: 60 })
        );
        assert!(c.correct_slice(&[0; 64], OverflowEstimate::new(0.0, 0.0)).is_ok());
    }

    #[test]
    fn custom_classifier_is_used() {
        struct AlwaysHard;
        impl HardnessClassifier for AlwaysHard {
            fn texture_score(&self, _block: &Block) -> u32 {
                u32::MAX
            }
            fn is_hard(&self, _block: &Block) -> bool {
                true
            }
        }
        let c = BlockOverflowCorrector::with_classifier(
            CorrectorConfig::reference().with_hardness_increment(3.0),
            AlwaysHard,
        )
        .unwrap();
        let out = c.correct(&Block::zeros(), OverflowEstimate::new(0.0, 0.0)).unwrap();
        assert!(out.is_hard);
        assert_eq!(out.effective_strength, 11.0);
    }
}
