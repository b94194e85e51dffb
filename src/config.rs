// Copyright 2024 the Vello Authors
// SPDX-License-Identifier: Apache-2.0

//! Constants shared by the arc computations.

/// Widest angle, in degrees, covered by one approximated segment.
pub const SEGMENT_SPAN_DEG: f64 = 90.0;

/// Most segments an arc can need; a whole turn is four quarter segments.
pub const MAX_SEGMENTS: usize = 4;

/// Lower bound of a cut, as a fraction of the arc length.
///
/// Cuts closer to either end are moved onto the bound so that both
/// children keep a usable sweep.
pub const CUT_MIN_FRACTION: f64 = 0.02;

/// Upper bound of a cut, as a fraction of the arc length.
pub const CUT_MAX_FRACTION: f64 = 0.98;

/// Default distance tolerance for sampling fitted curves and lowering arcs
/// to Béziers, in drawing units.
pub const DEFAULT_TOLERANCE: f64 = 0.1;

/// Below this, lengths and angles are treated as zero.
pub const EPSILON: f64 = 1e-12;
