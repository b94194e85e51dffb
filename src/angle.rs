// Copyright 2024 the Vello Authors
// SPDX-License-Identifier: Apache-2.0

//! The one angle convention used by every arc computation.
//!
//! Angles are in degrees, counter-clockwise positive, with 0 on the +x axis.
//! Endpoint, sweep, segment and cut logic all go through these helpers so
//! that they can't drift apart.

use kurbo::{Point, Vec2};

/// Fold an angle in degrees into `[0, 360)`.
pub fn normalize_deg(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if a >= 360.0 {
        0.0
    } else {
        // fold -0.0
        a + 0.0
    }
}

/// Counter-clockwise rotation from the ray at `from` to the ray at `to`.
///
/// The result is in `(0, 360]`: a whole turn is reported as 360, never 0.
/// The only zero result is for exactly coincident input values, which
/// describes a degenerate arc.
pub fn sweep_ccw(from: f64, to: f64) -> f64 {
    if from == to {
        return 0.0;
    }
    let d = normalize_deg(to - from);
    if d == 0.0 {
        360.0
    } else {
        d
    }
}

/// Unit vector pointing along `angle`.
pub fn tangent_dir(angle: f64) -> Vec2 {
    Vec2::from_angle(angle.to_radians())
}

/// Point at distance `len` from `origin` along the ray at `angle`.
pub fn point_on_ray(origin: Point, angle: f64, len: f64) -> Point {
    origin + tangent_dir(angle) * len
}
