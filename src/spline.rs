// Copyright 2024 the Vello Authors
// SPDX-License-Identifier: Apache-2.0

//! Cubic Bézier fitting of short circular arcs.
//!
//! A circular arc of at most a quarter turn is well approximated by a single
//! cubic whose control points sit on the end tangents. The fit here derives
//! the circle from the chord and the two tangent directions, places the
//! control points at the classic `4/3 tan(θ/4)` distance, then samples the
//! cubic into points.

use kurbo::{CubicBez, ParamCurve, Point};

use crate::angle::{normalize_deg, point_on_ray};
use crate::config::{DEFAULT_TOLERANCE, EPSILON};

/// Multipliers applied to the control arm lengths.
///
/// `asm1` and `asm2` scale the first and second arm independently (for
/// asymmetric curves), `curve` scales both.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitScale {
    pub asm1: f64,
    pub asm2: f64,
    pub curve: f64,
}

impl FitScale {
    pub const UNIT: FitScale = FitScale {
        asm1: 1.0,
        asm2: 1.0,
        curve: 1.0,
    };
}

impl Default for FitScale {
    fn default() -> Self {
        FitScale::UNIT
    }
}

/// Turns two boundary points and their tangent directions into points along
/// a smooth curve between them.
///
/// `angle1` is the direction leaving `p1`; `angle2` is the direction from
/// `p4` back towards the curve (the reverse of the arriving direction).
/// Implementations return a sequence starting at `p1` and ending at `p4`.
pub trait CurveFit {
    fn fit(&self, p1: Point, p4: Point, angle1: f64, angle2: f64, scale: FitScale) -> Vec<Point>;
}

/// The cubic fit, sampled to a distance tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicArcFit {
    pub tolerance: f64,
}

impl Default for CubicArcFit {
    fn default() -> Self {
        CubicArcFit {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl CubicArcFit {
    pub fn new(tolerance: f64) -> Self {
        CubicArcFit { tolerance }
    }
}

impl CurveFit for CubicArcFit {
    fn fit(&self, p1: Point, p4: Point, angle1: f64, angle2: f64, scale: FitScale) -> Vec<Point> {
        let Some((c, theta, radius)) = fit_arc(p1, p4, angle1, angle2, scale) else {
            return vec![p1, p4];
        };
        // Same count as flattening the true arc: a chord spanning angle φ
        // deviates by about r φ² / 8.
        let n_frac = theta * (radius / (8.0 * self.tolerance)).sqrt();
        let n = if n_frac.is_finite() {
            (n_frac.ceil() as usize).max(1)
        } else {
            1
        };
        let mut points = Vec::with_capacity(n + 1);
        points.push(p1);
        for i in 1..n {
            points.push(c.eval(i as f64 / n as f64));
        }
        points.push(p4);
        points
    }
}

/// Angle in degrees of the circular arc implied by the tangent directions.
pub fn subtended_angle(angle1: f64, angle2: f64) -> f64 {
    normalize_deg(angle2 - angle1 + 180.0)
}

/// Fit a cubic to the arc from `p1` to `p4`.
///
/// Degenerate input (coincident endpoints, zero angle) gives a straight
/// cubic with control points on the endpoints.
pub fn fit_cubic(p1: Point, p4: Point, angle1: f64, angle2: f64, scale: FitScale) -> CubicBez {
    match fit_arc(p1, p4, angle1, angle2, scale) {
        Some((c, _, _)) => c,
        None => CubicBez::new(p1, p1, p4, p4),
    }
}

// Returns the cubic, the subtended angle in radians and the circle radius.
fn fit_arc(
    p1: Point,
    p4: Point,
    angle1: f64,
    angle2: f64,
    scale: FitScale,
) -> Option<(CubicBez, f64, f64)> {
    let chord = p1.distance(p4);
    let theta = subtended_angle(angle1, angle2).to_radians();
    if chord < EPSILON || theta < EPSILON {
        return None;
    }
    let radius = 0.5 * chord / (0.5 * theta).sin();
    let arm = scale.curve * radius * (4.0 / 3.0) * (0.25 * theta).tan();
    let p2 = point_on_ray(p1, angle1, arm * scale.asm1);
    let p3 = point_on_ray(p4, angle2, arm * scale.asm2);
    Some((CubicBez::new(p1, p2, p3, p4), theta, radius))
}
