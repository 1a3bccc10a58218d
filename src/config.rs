// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Corrector configuration.

use crate::error::{is_non_negative, ConfigParam, CorrectionError, Result};
use crate::strength::DEFAULT_HARDNESS_INCREMENT;

/// Reference inner tolerance `O1`: any inner overflow triggers a fix.
pub const REFERENCE_INNER_TOLERANCE: f64 = 0.0;

/// Reference boundary tolerance `O2`. Boundary overflow at or above this is
/// left alone to avoid damaging block structure.
pub const REFERENCE_BOUNDARY_TOLERANCE: f64 = 18.0;

/// Reference nominal correction strength.
pub const REFERENCE_BASE_STRENGTH: f64 = 8.0;

/// Adaptive parameters, fixed for the lifetime of a corrector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectorConfig {
    /// `O1`: inner overflow strictly above this triggers the inner fix.
    pub inner_tolerance: f64,
    /// `O2`: boundary overflow strictly below this allows the boundary fix.
    pub boundary_tolerance: f64,
    /// Nominal correction strength.
    pub base_strength: f64,
    /// Added to `base_strength` for hard blocks.
    pub hardness_increment: f64,
}

impl CorrectorConfig {
    /// Config with the default hardness increment. Not validated; see
    /// [`CorrectorConfig::validate`].
    pub fn new(inner_tolerance: f64, boundary_tolerance: f64, base_strength: f64) -> Self {
        Self {
            inner_tolerance,
            boundary_tolerance,
            base_strength,
            hardness_increment: DEFAULT_HARDNESS_INCREMENT,
        }
    }

    /// `O1 = 0`, `O2 = 18`, base strength 8, increment 2.
    pub fn reference() -> Self {
        Self::new(REFERENCE_INNER_TOLERANCE, REFERENCE_BOUNDARY_TOLERANCE, REFERENCE_BASE_STRENGTH)
    }

    pub fn with_hardness_increment(mut self, increment: f64) -> Self {
        self.hardness_increment = increment;
        self
    }

    /// Check that every parameter is non-negative.
    ///
    /// # Errors
    /// [`CorrectionError::Configuration`] naming the first offending
    /// parameter, in the order `O1`, `O2`, base strength, increment.
    pub fn validate(&self) -> Result<()> {
        let params = [
            (ConfigParam::InnerTolerance, self.inner_tolerance),
            (ConfigParam::BoundaryTolerance, self.boundary_tolerance),
            (ConfigParam::BaseStrength, self.base_strength),
            (ConfigParam::HardnessIncrement, self.hardness_increment),
        ];
        for (param, value) in params {
            if !is_non_negative(value) {
                return Err(CorrectionError::Configuration { param, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_values() {
        let c = CorrectorConfig::reference();
        assert_eq!(c.inner_tolerance, 0.0);
        assert_eq!(c.boundary_tolerance, 18.0);
        assert_eq!(c.base_strength, 8.0);
        assert_eq!(c.hardness_increment, 2.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn each_negative_param_is_rejected() {
        let cases = [
            (CorrectorConfig::new(-1.0, 18.0, 8.0), ConfigParam::InnerTolerance),
            (CorrectorConfig::new(0.0, -18.0, 8.0), ConfigParam::BoundaryTolerance),
            (CorrectorConfig::new(0.0, 18.0, -0.1), ConfigParam::BaseStrength),
            (CorrectorConfig::reference().with_hardness_increment(-2.0), ConfigParam::HardnessIncrement),
        ];
        for (cfg, expected) in cases {
            match cfg.validate() {
                Err(CorrectionError::Configuration { param, .. }) => assert_eq!(param, expected),
                other => panic!("expected Configuration({expected:?}), got {other:?}"),
            }
        }
    }

    #[test]
    fn nan_is_rejected() {
        let cfg = CorrectorConfig::new(f64::NAN, 18.0, 8.0);
        assert!(matches!(
            cfg.validate(),
            Err(CorrectionError::Configuration { param: ConfigParam::InnerTolerance, .. })
        ));
    }

    #[test]
    fn zero_is_valid() {
        assert!(CorrectorConfig::new(0.0, 0.0, 0.0).with_hardness_increment(0.0).validate().is_ok());
    }
}
