// Copyright 2025 the Nexus Mark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curve construction and evaluation for the mark's strokes.
//!
//! Legs are cubic Béziers whose control points are pushed sideways by the bow, so they leave
//! their base almost vertically and sweep into the apex. The crossbar is a parabolic sag between
//! the two junctions, which is exactly a quadratic Bézier and is evaluated in closed form.

use log::warn;
use peniko::kurbo::{CubicBez, ParamCurve, ParamCurveDeriv, Point, QuadBez, Vec2};

/// Fraction of the base to apex vector at which the first control point sits.
pub const CTRL1_FRACTION: f64 = 0.28;
/// Fraction of the base to apex vector at which the second control point sits.
pub const CTRL2_FRACTION: f64 = 0.70;

/// Maximum number of bisection steps taken by [`invert_y`].
pub const BISECTION_STEPS: usize = 64;
/// Distance in glyph units at which [`invert_y`] accepts a sample.
pub const BISECTION_TOLERANCE: f64 = 0.05;

/// Which leg of the glyph a curve belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left leg; bowed towards negative x.
    Left,
    /// The right leg; bowed towards positive x.
    Right,
}

impl Side {
    /// The sign applied to the bow displacement.
    pub const fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Evaluate a cubic Bézier at `t`.
#[inline]
pub fn evaluate(curve: &CubicBez, t: f64) -> Point {
    curve.eval(t)
}

/// Derive the cubic for one leg running from `base` to `apex`.
///
/// Both control points lie on the straight base to apex line (at 28% and 70%) and are then
/// displaced horizontally: the first by the full `bow`, the second by half of it. The endpoints
/// are `base` and `apex` unchanged.
pub fn leg_curve(base: Point, apex: Point, bow: f64, side: Side) -> CubicBez {
    let delta = apex - base;
    let offset = Vec2::new(side.sign() * bow, 0.0);
    CubicBez::new(
        base,
        base + delta * CTRL1_FRACTION + offset,
        base + delta * CTRL2_FRACTION + offset * 0.5,
        apex,
    )
}

/// Find the parameter at which `curve` reaches `target_y`.
///
/// The curve must be monotonic in y (see [`is_monotonic_y`]). The search bisects `[0, 1]` for at
/// most [`BISECTION_STEPS`] steps and returns early once a sample is within
/// [`BISECTION_TOLERANCE`]. If the tolerance is never reached, the midpoint of the final bracket
/// is returned.
pub fn invert_y(curve: &CubicBez, target_y: f64) -> f64 {
    // Legs run from a base low on the canvas up to the apex, so y usually falls with t.
    let descending = curve.p0.y > curve.p3.y;
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    for _ in 0..BISECTION_STEPS {
        let mid = 0.5 * (lo + hi);
        let y = evaluate(curve, mid).y;
        if (y - target_y).abs() < BISECTION_TOLERANCE {
            return mid;
        }
        if (y > target_y) == descending {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    let t = 0.5 * (lo + hi);
    let miss = (evaluate(curve, t).y - target_y).abs();
    if miss >= BISECTION_TOLERANCE {
        warn!("Bisection for y = {target_y} stopped {miss} units away from the target.");
    }
    t
}

/// Whether the y coordinate of `curve` never changes direction over `t ∈ (0, 1)`.
///
/// The y derivative is a quadratic in `t`, so its extremes on `[0, 1]` are at the endpoints or
/// at its vertex. The curve is monotonic when none of those samples disagree in sign.
pub fn is_monotonic_y(curve: &CubicBez) -> bool {
    let deriv: QuadBez = curve.deriv();
    let (d0, d1, d2) = (deriv.p0.y, deriv.p1.y, deriv.p2.y);
    let mut samples = vec![d0, d2];
    let denom = d0 - 2.0 * d1 + d2;
    if denom.abs() > f64::EPSILON {
        let vertex = (d0 - d1) / denom;
        if vertex > 0.0 && vertex < 1.0 {
            samples.push(deriv.eval(vertex).y);
        }
    }
    let eps = 1e-9;
    let rising = samples.iter().any(|&d| d > eps);
    let falling = samples.iter().any(|&d| d < -eps);
    !(rising && falling)
}

/// The arched crossbar joining the two junctions.
///
/// The arc runs horizontally from `left_x` to `right_x` at height `y`, sagging upwards (towards
/// smaller y) by `arc_height` at its midpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrossbarArc {
    /// The x coordinate of the left endpoint.
    pub left_x: f64,
    /// The x coordinate of the right endpoint.
    pub right_x: f64,
    /// The y coordinate of both endpoints.
    pub y: f64,
    /// Upward displacement of the arc's midpoint from the straight chord.
    pub arc_height: f64,
}

impl CrossbarArc {
    /// Create the crossbar between two junction x coordinates.
    pub const fn new(left_x: f64, right_x: f64, y: f64, arc_height: f64) -> Self {
        Self {
            left_x,
            right_x,
            y,
            arc_height,
        }
    }

    /// Evaluate the arc at `f ∈ [0, 1]`.
    pub fn eval(&self, f: f64) -> Point {
        Point::new(
            self.left_x + (self.right_x - self.left_x) * f,
            self.y - self.arc_height * 4.0 * f * (1.0 - f),
        )
    }

    /// The start of the arc.
    pub fn start(&self) -> Point {
        Point::new(self.left_x, self.y)
    }

    /// The end of the arc.
    pub fn end(&self) -> Point {
        Point::new(self.right_x, self.y)
    }

    /// The quadratic Bézier tracing exactly the same curve as [`CrossbarArc::eval`].
    ///
    /// A quadratic's midpoint lies halfway between its chord and its control point, so the
    /// control point is raised by twice the arc height.
    pub fn to_quad(&self) -> QuadBez {
        let mid_x = 0.5 * (self.left_x + self.right_x);
        QuadBez::new(
            self.start(),
            Point::new(mid_x, self.y - 2.0 * self.arc_height),
            self.end(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_left_leg() -> CubicBez {
        leg_curve(Point::new(112.0, 718.0), Point::new(400.0, 82.0), 12.0, Side::Left)
    }

    #[test]
    fn leg_control_points() {
        let leg = full_left_leg();
        assert_eq!(leg.p0, Point::new(112.0, 718.0));
        assert_eq!(leg.p3, Point::new(400.0, 82.0));
        // 112 + 288 * 0.28 - 12
        assert!((leg.p1.x - 180.64).abs() < 1e-9);
        assert!((leg.p1.y - (718.0 - 636.0 * 0.28)).abs() < 1e-9);
        // 112 + 288 * 0.70 - 6
        assert!((leg.p2.x - 307.6).abs() < 1e-9);
        assert!((leg.p2.y - (718.0 - 636.0 * 0.70)).abs() < 1e-9);
    }

    #[test]
    fn right_leg_bows_the_other_way() {
        let base = Point::new(688.0, 718.0);
        let apex = Point::new(400.0, 82.0);
        let straight = leg_curve(base, apex, 0.0, Side::Right);
        let bowed = leg_curve(base, apex, 12.0, Side::Right);
        assert!((bowed.p1.x - straight.p1.x - 12.0).abs() < 1e-9);
        assert!((bowed.p2.x - straight.p2.x - 6.0).abs() < 1e-9);
    }

    #[test]
    fn evaluate_endpoints() {
        let leg = full_left_leg();
        assert_eq!(evaluate(&leg, 0.0), leg.p0);
        assert_eq!(evaluate(&leg, 1.0), leg.p3);
    }

    #[test]
    fn invert_hits_target() {
        let leg = full_left_leg();
        for target in [100.0, 250.0, 432.0, 600.0, 700.0] {
            let t = invert_y(&leg, target);
            assert!((evaluate(&leg, t).y - target).abs() < 0.1, "target {target}");
        }
    }

    #[test]
    fn invert_ascending_curve() {
        let curve = CubicBez::new((0.0, 0.0), (10.0, 30.0), (20.0, 70.0), (30.0, 100.0));
        let t = invert_y(&curve, 42.0);
        assert!((evaluate(&curve, t).y - 42.0).abs() < 0.1);
    }

    #[test]
    fn invert_out_of_range_terminates() {
        let leg = full_left_leg();
        // Above the apex: the search runs out of steps and pins to the apex end.
        let t = invert_y(&leg, 10.0);
        assert!(t > 0.999);
    }

    #[test]
    fn straight_legs_are_monotonic() {
        let leg = leg_curve(Point::new(14.0, 118.0), Point::new(64.0, 10.0), 0.0, Side::Left);
        assert!(is_monotonic_y(&leg));
        assert!(is_monotonic_y(&full_left_leg()));
    }

    #[test]
    fn overshooting_curve_is_not_monotonic() {
        let curve = CubicBez::new((0.0, 100.0), (0.0, -50.0), (0.0, 150.0), (0.0, 0.0));
        assert!(!is_monotonic_y(&curve));
    }

    #[test]
    fn crossbar_closed_form_matches_quad() {
        let arc = CrossbarArc::new(230.0, 570.0, 432.0, 8.0);
        let quad = arc.to_quad();
        for i in 0..=10 {
            let f = f64::from(i) / 10.0;
            let a = arc.eval(f);
            let q = quad.eval(f);
            assert!((a - q).hypot() < 1e-9, "f = {f}");
        }
        assert!((arc.eval(0.5).y - 424.0).abs() < 1e-9);
        assert_eq!(arc.eval(0.0), arc.start());
        assert_eq!(arc.eval(1.0), arc.end());
    }

    #[test]
    fn crossbar_quad_control_point() {
        let quad = CrossbarArc::new(230.0, 570.0, 432.0, 8.0).to_quad();
        assert_eq!(quad.p0, Point::new(230.0, 432.0));
        assert_eq!(quad.p1, Point::new(400.0, 416.0));
        assert_eq!(quad.p2, Point::new(570.0, 432.0));
    }
}
