// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Adaptive correction strength.

/// Strength added for hard blocks unless configured otherwise.
pub const DEFAULT_HARDNESS_INCREMENT: f64 = 2.0;

/// Effective strength for a block: `base_strength + increment` for hard
/// blocks, `base_strength` otherwise.
pub fn effective_strength(base_strength: f64, is_hard: bool, increment: f64) -> f64 {
    if is_hard {
        base_strength + increment
    } else {
        base_strength
    }
}
