// Copyright 2024 the Vello Authors
// SPDX-License-Identifier: Apache-2.0

//! Circular arcs of a pattern.
//!
//! An arc is given by a center point, a radius and a start/end angle pair,
//! swept counter-clockwise from `f1` to `f2`. Each numeric field carries the
//! formula text it was computed from; the formulas are not evaluated here.

use std::f64::consts::PI;

use arrayvec::ArrayVec;
use kurbo::{BezPath, CubicBez, Point, Rect, Vec2};
use log::{debug, trace};

use crate::angle::{normalize_deg, point_on_ray, sweep_ccw};
use crate::config::{
    CUT_MAX_FRACTION, CUT_MIN_FRACTION, DEFAULT_TOLERANCE, MAX_SEGMENTS, SEGMENT_SPAN_DEG,
};
use crate::error::{ArcError, ArcResult};
use crate::gobject::{DrawMode, GObject, ObjectInfo, ObjectKind};
use crate::point::LabeledPoint;
use crate::spline::{fit_cubic, CubicArcFit, CurveFit, FitScale};

/// Start and end angle of each approximation segment, in order.
pub type SegmentBounds = ArrayVec<(f64, f64), MAX_SEGMENTS>;

#[derive(Clone, Debug, PartialEq)]
pub struct Arc {
    info: ObjectInfo,
    center: LabeledPoint,
    radius: f64,
    formula_radius: String,
    f1: f64,
    formula_f1: String,
    f2: f64,
    formula_f2: String,
}

/// What is needed to draw an arc as a single circular sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcPath {
    /// Square of side `2 * radius` around the center.
    pub bounds: Rect,
    pub start: Point,
    /// Degrees.
    pub start_angle: f64,
    /// Degrees, counter-clockwise.
    pub sweep_angle: f64,
}

fn check_angle(angle: f64) -> ArcResult<f64> {
    if angle.is_finite() {
        Ok(angle)
    } else {
        Err(ArcError::InvalidAngle(angle))
    }
}

impl Arc {
    /// Create an arc from `f1` to `f2` (degrees) around `center`.
    ///
    /// Formulas default to the numeric values; use [`Arc::with_formulas`]
    /// to attach the expressions the values came from.
    pub fn new(center: LabeledPoint, radius: f64, f1: f64, f2: f64) -> ArcResult<Arc> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ArcError::InvalidRadius(radius));
        }
        check_angle(f1)?;
        check_angle(f2)?;
        Ok(Arc::from_parts(
            center,
            radius,
            radius.to_string(),
            (f1, f1.to_string()),
            (f2, f2.to_string()),
        ))
    }

    // Callers have already validated radius and angles.
    fn from_parts(
        center: LabeledPoint,
        radius: f64,
        formula_radius: String,
        (f1, formula_f1): (f64, String),
        (f2, formula_f2): (f64, String),
    ) -> Arc {
        let name = format!("Arc_{}", center.name());
        Arc {
            info: ObjectInfo::new(ObjectKind::Arc, name),
            center,
            radius,
            formula_radius,
            f1,
            formula_f1,
            f2,
            formula_f2,
        }
    }

    pub fn with_formulas(
        mut self,
        radius: impl Into<String>,
        f1: impl Into<String>,
        f2: impl Into<String>,
    ) -> Self {
        self.formula_radius = radius.into();
        self.formula_f1 = f1.into();
        self.formula_f2 = f2.into();
        self
    }

    pub fn with_object(mut self, id_object: u32, mode: DrawMode) -> Self {
        self.info.id_object = id_object;
        self.info.mode = mode;
        self
    }

    pub fn center(&self) -> &LabeledPoint {
        &self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn formula_radius(&self) -> &str {
        &self.formula_radius
    }

    pub fn f1(&self) -> f64 {
        self.f1
    }

    pub fn formula_f1(&self) -> &str {
        &self.formula_f1
    }

    pub fn f2(&self) -> f64 {
        self.f2
    }

    pub fn formula_f2(&self) -> &str {
        &self.formula_f2
    }

    pub fn set_f1(&mut self, f1: f64, formula: impl Into<String>) -> ArcResult<()> {
        self.f1 = check_angle(f1)?;
        self.formula_f1 = formula.into();
        Ok(())
    }

    pub fn set_f2(&mut self, f2: f64, formula: impl Into<String>) -> ArcResult<()> {
        self.f2 = check_angle(f2)?;
        self.formula_f2 = formula.into();
        Ok(())
    }

    pub fn set_id(&mut self, id: u32) {
        self.info.id = id;
    }

    /// Point of the circle at `angle` degrees.
    pub fn boundary_point(&self, angle: f64) -> Point {
        point_on_ray(self.center.to_point(), angle, self.radius)
    }

    /// Start point.
    pub fn p1(&self) -> Point {
        self.boundary_point(self.f1)
    }

    /// End point.
    pub fn p2(&self) -> Point {
        self.boundary_point(self.f2)
    }

    /// Counter-clockwise angle from `f1` to `f2` in degrees, in `(0, 360]`.
    ///
    /// Zero only when `f1` and `f2` are equal, which makes the arc degenerate.
    pub fn sweep_angle(&self) -> f64 {
        sweep_ccw(self.f1, self.f2)
    }

    pub fn length(&self) -> f64 {
        self.radius * self.sweep_angle().to_radians()
    }

    pub fn path(&self) -> ArcPath {
        let center = self.center.to_point();
        let d = 2.0 * self.radius;
        ArcPath {
            bounds: Rect::from_center_size(center, (d, d)),
            start: self.p1(),
            start_angle: self.f1,
            sweep_angle: self.sweep_angle(),
        }
    }

    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        self.path().to_bez_path(tolerance)
    }

    /// SVG path data of the arc.
    pub fn to_svg_path(&self) -> String {
        self.to_bez_path(DEFAULT_TOLERANCE).to_svg()
    }

    /// Number of segments of at most a quarter turn needed to approximate
    /// the arc.
    pub fn segment_count(&self) -> ArcResult<usize> {
        let sweep = self.sweep_angle();
        // Whole degrees decide the exact quarter cases, so 90.4 is still one
        // segment.
        let count = match sweep as i32 {
            0 => return Err(ArcError::ZeroAngle),
            90 => 1,
            180 => 2,
            270 => 3,
            360 => 4,
            _ => (sweep / SEGMENT_SPAN_DEG).floor() as usize + 1,
        };
        Ok(count)
    }

    /// Walk the arc in quarter-turn steps from `f1`.
    ///
    /// The walk has exactly `segment_count()` entries and its last range
    /// ends at `f2` itself.
    pub fn segment_bounds(&self) -> ArcResult<SegmentBounds> {
        let n = self.segment_count()?;
        let mut bounds = SegmentBounds::new();
        let mut start = self.f1;
        for i in 0..n {
            let end = if i + 1 == n {
                self.f2
            } else {
                normalize_deg(start + SEGMENT_SPAN_DEG)
            };
            bounds.push((start, end));
            start = end;
        }
        trace!("{}: segment bounds {:?}", self.name(), bounds);
        Ok(bounds)
    }

    /// Points of segment `index` (1-based) with the default cubic fit.
    pub fn segment(&self, index: usize) -> ArcResult<Vec<Point>> {
        self.segment_with(index, &CubicArcFit::default())
    }

    pub fn segment_with(&self, index: usize, fit: &impl CurveFit) -> ArcResult<Vec<Point>> {
        let (p1, p4, angle1, angle2) = self.segment_frame(index)?;
        Ok(fit.fit(p1, p4, angle1, angle2, FitScale::UNIT))
    }

    // Boundary points and tangent angles handed to the curve fit.
    fn segment_frame(&self, index: usize) -> ArcResult<(Point, Point, f64, f64)> {
        let bounds = self.segment_bounds()?;
        let Some(&(start, end)) = index.checked_sub(1).and_then(|i| bounds.get(i)) else {
            return Err(ArcError::NoSuchSegment {
                index,
                count: bounds.len(),
            });
        };
        let angle1 = normalize_deg(start + 90.0);
        let angle2 = normalize_deg(end - 90.0);
        Ok((
            self.boundary_point(start),
            self.boundary_point(end),
            angle1,
            angle2,
        ))
    }

    /// All segments' points, concatenated in order.
    pub fn points(&self) -> ArcResult<Vec<Point>> {
        self.points_with(&CubicArcFit::default())
    }

    pub fn points_with(&self, fit: &impl CurveFit) -> ArcResult<Vec<Point>> {
        let mut points = vec![];
        for i in 1..=self.segment_count()? {
            points.extend(self.segment_with(i, fit)?);
        }
        Ok(points)
    }

    /// The fitted cubic of each segment.
    pub fn to_cubics(&self) -> ArcResult<Vec<CubicBez>> {
        (1..=self.segment_count()?)
            .map(|i| -> ArcResult<CubicBez> {
                let (p1, p4, angle1, angle2) = self.segment_frame(i)?;
                Ok(fit_cubic(p1, p4, angle1, angle2, FitScale::UNIT))
            })
            .collect()
    }

    /// Split the arc `length` units along it from the start.
    ///
    /// Returns the cut point and the two arcs on either side of it. The
    /// length is clamped to between 2% and 98% of the arc so both children
    /// keep a real sweep; cutting never fails. The children keep this arc's
    /// `id_object` and mode.
    pub fn cut_arc(&self, length: f64) -> (Point, Arc, Arc) {
        let total = self.length();
        // max/min rather than clamp so a NaN length lands on the lower bound
        let len = length
            .max(total * CUT_MIN_FRACTION)
            .min(total * CUT_MAX_FRACTION);
        let delta = len * 180.0 / (PI * self.radius);
        // a zero offset keeps f1 as is; folding it would turn a degenerate
        // arc into two whole turns
        let cut = if delta == 0.0 {
            self.f1
        } else {
            normalize_deg(self.f1 + delta)
        };
        debug!(
            "{}: cut at length {len} of {total}, {delta} degrees from start",
            self.name()
        );
        let formula_cut = cut.to_string();
        let arc1 = self.child(
            (self.f1, self.formula_f1.clone()),
            (cut, formula_cut.clone()),
        );
        let arc2 = self.child((cut, formula_cut), (self.f2, self.formula_f2.clone()));
        (self.boundary_point(cut), arc1, arc2)
    }

    fn child(&self, f1: (f64, String), f2: (f64, String)) -> Arc {
        Arc::from_parts(
            self.center.clone(),
            self.radius,
            self.formula_radius.clone(),
            f1,
            f2,
        )
        .with_object(self.info.id_object, self.info.mode)
    }
}

impl GObject for Arc {
    fn info(&self) -> &ObjectInfo {
        &self.info
    }

    fn length(&self) -> f64 {
        Arc::length(self)
    }
}

impl ArcPath {
    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    pub fn radius(&self) -> f64 {
        0.5 * self.bounds.width()
    }

    pub fn to_kurbo_arc(&self) -> kurbo::Arc {
        let r = self.radius();
        kurbo::Arc {
            center: self.center(),
            radii: Vec2::new(r, r),
            start_angle: self.start_angle.to_radians(),
            sweep_angle: self.sweep_angle.to_radians(),
            x_rotation: 0.0,
        }
    }

    /// Move to the start point, then sweep the arc as cubic Béziers.
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start);
        path.extend(self.to_kurbo_arc().append_iter(tolerance));
        path
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn arc(f1: f64, f2: f64) -> Arc {
        Arc::new(LabeledPoint::new("A", 0.0, 0.0), 10.0, f1, f2).unwrap()
    }

    fn near(a: Point, b: Point, eps: f64) -> bool {
        a.distance(b) < eps
    }

    /// Records what the arc hands to the curve fit.
    struct Endpoints;

    impl CurveFit for Endpoints {
        fn fit(&self, p1: Point, p4: Point, a1: f64, a2: f64, _: FitScale) -> Vec<Point> {
            vec![p1, p4, Point::new(a1, a2)]
        }
    }

    #[test]
    fn test_rejects_bad_radius() {
        let c = LabeledPoint::new("A", 0.0, 0.0);
        assert_eq!(
            Arc::new(c.clone(), 0.0, 0.0, 90.0),
            Err(ArcError::InvalidRadius(0.0))
        );
        assert!(Arc::new(c.clone(), -1.0, 0.0, 90.0).is_err());
        assert!(Arc::new(c.clone(), f64::NAN, 0.0, 90.0).is_err());
        assert!(Arc::new(c, 1.0, f64::INFINITY, 90.0).is_err());
    }

    #[test]
    fn test_name_and_kind() {
        let a = arc(0.0, 90.0);
        assert_eq!(a.name(), "Arc_A");
        assert_eq!(a.kind(), ObjectKind::Arc);
        assert_eq!(a.mode(), DrawMode::Calculation);
        assert_eq!(a.formula_f2(), "90");
    }

    #[test]
    fn test_endpoints() {
        let a = Arc::new(LabeledPoint::new("O", 1.0, 1.0), 2.0, 0.0, 90.0).unwrap();
        assert!(near(a.p1(), Point::new(3.0, 1.0), 1e-12));
        assert!(near(a.p2(), Point::new(1.0, 3.0), 1e-12));
    }

    #[test]
    fn test_sweep() {
        assert_eq!(arc(350.0, 10.0).sweep_angle(), 20.0);
        assert_eq!(arc(0.0, 360.0).sweep_angle(), 360.0);
        assert_eq!(arc(45.0, 45.0).sweep_angle(), 0.0);
        assert!((arc(0.0, 180.0).length() - 10.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_segment_count_table() {
        let cases = [
            (90.0, 1),
            (180.0, 2),
            (270.0, 3),
            (360.0, 4),
            (100.0, 2),
            (45.0, 1),
            (359.0, 4),
            (200.0, 3),
        ];
        for (sweep, n) in cases {
            assert_eq!(arc(0.0, sweep).segment_count(), Ok(n), "sweep {sweep}");
            assert_eq!(arc(300.0, 300.0 + sweep).segment_count(), Ok(n));
        }
        assert_eq!(arc(30.0, 30.0).segment_count(), Err(ArcError::ZeroAngle));
        // below one whole degree
        assert_eq!(arc(30.0, 30.5).segment_count(), Err(ArcError::ZeroAngle));
    }

    #[test]
    fn test_segment_bounds_wrap() {
        let bounds = arc(300.0, 100.0).segment_bounds().unwrap();
        assert_eq!(bounds.as_slice(), &[(300.0, 30.0), (30.0, 100.0)]);
        let bounds = arc(0.0, 360.0).segment_bounds().unwrap();
        assert_eq!(
            bounds.as_slice(),
            &[(0.0, 90.0), (90.0, 180.0), (180.0, 270.0), (270.0, 360.0)]
        );
    }

    #[test]
    fn test_segment_tangents() {
        let a = arc(300.0, 100.0);
        let first = a.segment_with(1, &Endpoints).unwrap();
        assert_eq!(first[0], a.p1());
        assert_eq!(first[2], Point::new(30.0, 300.0));
        let last = a.segment_with(2, &Endpoints).unwrap();
        assert_eq!(last[0], first[1]);
        assert_eq!(last[1], a.p2());
        assert_eq!(last[2], Point::new(120.0, 10.0));
    }

    #[test]
    fn test_segment_out_of_range() {
        let a = arc(0.0, 100.0);
        assert_eq!(
            a.segment(3),
            Err(ArcError::NoSuchSegment { index: 3, count: 2 })
        );
        assert_eq!(
            a.segment(0),
            Err(ArcError::NoSuchSegment { index: 0, count: 2 })
        );
        assert_eq!(arc(5.0, 5.0).segment(1), Err(ArcError::ZeroAngle));
        assert_eq!(arc(5.0, 5.0).points(), Err(ArcError::ZeroAngle));
    }

    #[test]
    fn test_points_concatenate_segments() {
        let a = arc(10.0, 250.0);
        let n = a.segment_count().unwrap();
        let mut expected = vec![];
        for i in 1..=n {
            expected.extend(a.segment(i).unwrap());
        }
        assert_eq!(a.points().unwrap(), expected);
        assert_eq!(a.points().unwrap()[0], a.p1());
        assert_eq!(*a.points().unwrap().last().unwrap(), a.p2());
    }

    #[test]
    fn test_cubics_follow_circle() {
        let a = arc(-45.0, 200.0);
        let cubics = a.to_cubics().unwrap();
        assert_eq!(cubics.len(), 3);
        assert_eq!(cubics[0].p0, a.p1());
        assert_eq!(cubics[2].p3, a.p2());
        for pair in cubics.windows(2) {
            assert_eq!(pair[0].p3, pair[1].p0);
        }
    }

    #[test]
    fn test_path_descriptor() {
        let a = Arc::new(LabeledPoint::new("C", 5.0, -5.0), 2.0, 350.0, 10.0).unwrap();
        let path = a.path();
        assert_eq!(path.bounds, Rect::new(3.0, -7.0, 7.0, -3.0));
        assert_eq!(path.start, a.p1());
        assert_eq!(path.start_angle, 350.0);
        assert_eq!(path.sweep_angle, 20.0);
        assert_eq!(path.center(), Point::new(5.0, -5.0));
        assert_eq!(path.radius(), 2.0);
        let bez = a.to_bez_path(0.01);
        let last = bez.elements().last().and_then(|el| el.end_point()).unwrap();
        assert!(near(last, a.p2(), 1e-9));
        assert!(a.to_svg_path().starts_with('M'));
    }

    #[test]
    fn test_cut_half() {
        let a = arc(0.0, 180.0);
        let (p, a1, a2) = a.cut_arc(15.7);
        assert!((a1.f2() - 90.0).abs() < 0.1);
        assert!((a1.sweep_angle() - 90.0).abs() < 0.1);
        assert!((a2.sweep_angle() - 90.0).abs() < 0.1);
        assert!(near(p, Point::new(0.0, 10.0), 0.01));
        assert_eq!(a1.f1(), 0.0);
        assert_eq!(a2.f2(), 180.0);
        assert_eq!(a1.f2(), a2.f1());
        assert_eq!(a1.formula_f2(), a1.f2().to_string());
        assert_eq!(a2.formula_f1(), a1.formula_f2());
        assert_eq!(a, arc(0.0, 180.0));
    }

    #[test]
    fn test_cut_clamps() {
        let a = arc(0.0, 180.0);
        let sweep = a.sweep_angle();
        let (_, a1, a2) = a.cut_arc(0.0);
        assert!((a1.sweep_angle() - 0.02 * sweep).abs() < 1e-9);
        assert!((a2.sweep_angle() - 0.98 * sweep).abs() < 1e-9);
        let (_, a1, a2) = a.cut_arc(a.length());
        assert!((a1.sweep_angle() - 0.98 * sweep).abs() < 1e-9);
        assert!((a2.sweep_angle() - 0.02 * sweep).abs() < 1e-9);
        let (_, a1, _) = a.cut_arc(-5.0);
        assert!((a1.sweep_angle() - 0.02 * sweep).abs() < 1e-9);
        let (p, a1, a2) = a.cut_arc(f64::NAN);
        assert!(p.x.is_finite() && p.y.is_finite());
        assert!(a1.f2().is_finite() && a2.f1().is_finite());
        assert!((a1.sweep_angle() - 0.02 * sweep).abs() < 1e-9);
        assert!((a2.sweep_angle() - 0.98 * sweep).abs() < 1e-9);
    }

    #[test]
    fn test_cut_degenerate_stays_degenerate() {
        let a = arc(400.0, 400.0);
        assert_eq!(a.sweep_angle(), 0.0);
        let (p, a1, a2) = a.cut_arc(1.0);
        assert_eq!(a1.sweep_angle(), 0.0);
        assert_eq!(a2.sweep_angle(), 0.0);
        assert_eq!(a1.segment_count(), Err(ArcError::ZeroAngle));
        assert_eq!(a2.segment_count(), Err(ArcError::ZeroAngle));
        assert_eq!(p, a.p1());
    }

    #[test]
    fn test_cut_keeps_identity() {
        let mut a = arc(20.0, 300.0)
            .with_formulas("Line_A_B", "AngleLine_A_B", "20+280")
            .with_object(7, DrawMode::Modeling);
        a.set_id(12);
        let (_, a1, a2) = a.cut_arc(10.0);
        for child in [&a1, &a2] {
            assert_eq!(child.id_object(), 7);
            assert_eq!(child.mode(), DrawMode::Modeling);
            assert_eq!(child.id(), 0);
            assert_eq!(child.name(), "Arc_A");
            assert_eq!(child.formula_radius(), "Line_A_B");
            assert_eq!(child.center(), a.center());
        }
        assert_eq!(a1.formula_f1(), "AngleLine_A_B");
        assert_eq!(a2.formula_f2(), "20+280");
    }

    #[test]
    fn test_clone_independent() {
        let a = arc(0.0, 90.0).with_formulas("r", "a", "b");
        let mut b = a.clone();
        assert_eq!(a, b);
        b.set_f1(45.0, "c").unwrap();
        assert_eq!(a.f1(), 0.0);
        assert_eq!(a.formula_f1(), "a");
        assert_eq!(b.f1(), 45.0);
        assert_eq!(b.center(), a.center());
        assert!(b.set_f2(f64::NAN, "nan").is_err());
        assert_eq!(b.f2(), 90.0);
    }
}
