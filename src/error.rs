// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for overflow correction.
//!
//! [`CorrectionError`] covers every failure mode of the corrector. All of them
//! are detected before any decision logic runs, so a failed call never leaves
//! a partially built result behind.

use core::fmt;

/// Configuration parameter that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigParam {
    /// `O1`, the inner-region overflow tolerance.
    InnerTolerance,
    /// `O2`, the boundary-region overflow tolerance.
    BoundaryTolerance,
    /// Nominal correction strength.
    BaseStrength,
    /// Strength increment applied to hard blocks.
    HardnessIncrement,
}

impl fmt::Display for ConfigParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InnerTolerance => write!(f, "inner tolerance (O1)"),
            Self::BoundaryTolerance => write!(f, "boundary tolerance (O2)"),
            Self::BaseStrength => write!(f, "base strength"),
            Self::HardnessIncrement => write!(f, "hardness increment"),
        }
    }
}

/// Overflow estimate field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowField {
    Inner,
    Boundary,
}

impl fmt::Display for OverflowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inner => write!(f, "inner overflow"),
            Self::Boundary => write!(f, "boundary overflow"),
        }
    }
}

/// Errors that can occur while correcting a block or a grid of blocks.
#[derive(Debug, Clone, PartialEq)]
pub enum CorrectionError {
    /// A configuration parameter is negative (or NaN).
    Configuration { param: ConfigParam, value: f64 },
    /// A flat coefficient slice does not hold exactly 64 values.
    Shape { len: usize },
    /// Row-major input is not 8 rows of 8 columns.
    /// `cols` is the length of the first offending row (or 0 if there are no rows).
    ShapeRows { rows: usize, cols: usize },
    /// An overflow estimate is negative (or NaN).
    Input { field: OverflowField, value: f64 },
    /// Number of overflow estimates does not match the number of blocks.
    GridShape { expected: usize, actual: usize },
}

impl fmt::Display for CorrectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { param, value } => {
                write!(f, "invalid configuration: {param} must be >= 0, got {value}")
            }
            Self::Shape { len } => write!(f, "block must hold 64 coefficients, got {len}"),
            Self::ShapeRows { rows, cols } => {
                write!(f, "block must be 8x8, got {rows} rows (row width {cols})")
            }
            Self::Input { field, value } => {
                write!(f, "invalid overflow estimate: {field} must be >= 0, got {value}")
            }
            Self::GridShape { expected, actual } => {
                write!(f, "expected {expected} overflow estimates, got {actual}")
            }
        }
    }
}

impl std::error::Error for CorrectionError {}

pub type Result<T> = std::result::Result<T, CorrectionError>;

/// `true` unless `value` is negative or NaN.
pub(crate) fn is_non_negative(value: f64) -> bool {
    value >= 0.0
}
