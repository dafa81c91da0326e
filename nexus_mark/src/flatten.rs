// Copyright 2025 the Nexus Mark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattening the glyph's curves into polylines in device space.

use peniko::kurbo::{Affine, BezPath, ParamCurve, Point};

use crate::curve::CrossbarArc;

/// Number of line segments each curve is split into.
///
/// Dense enough that the chord error stays below a pixel on the largest oversampled canvas.
pub const POLYLINE_SEGMENTS: usize = 300;

/// Sample `curve` at [`POLYLINE_SEGMENTS`] + 1 evenly spaced parameters and map them through
/// `transform`.
pub fn polyline(curve: &impl ParamCurve, transform: Affine) -> Vec<Point> {
    sample(|t| curve.eval(t), transform)
}

/// Like [`polyline`], but for the crossbar's closed form.
pub fn crossbar_polyline(arc: &CrossbarArc, transform: Affine) -> Vec<Point> {
    sample(|f| arc.eval(f), transform)
}

/// Join `points` into an open path of straight segments.
pub fn to_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if let Some((first, rest)) = points.split_first() {
        path.move_to(*first);
        for point in rest {
            path.line_to(*point);
        }
    }
    path
}

fn sample(eval: impl Fn(f64) -> Point, transform: Affine) -> Vec<Point> {
    (0..=POLYLINE_SEGMENTS)
        .map(|i| transform * eval(i as f64 / POLYLINE_SEGMENTS as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use peniko::kurbo::CubicBez;

    #[test]
    fn endpoints_are_exact() {
        let curve = CubicBez::new((0.0, 10.0), (1.0, 7.0), (2.0, 3.0), (3.0, 0.0));
        let line = polyline(&curve, Affine::scale(2.0));
        assert_eq!(line.len(), POLYLINE_SEGMENTS + 1);
        assert_eq!(line[0], Point::new(0.0, 20.0));
        assert_eq!(line[POLYLINE_SEGMENTS], Point::new(6.0, 0.0));
    }

    #[test]
    fn crossbar_sags_in_the_middle() {
        let arc = CrossbarArc::new(10.0, 50.0, 30.0, 4.0);
        let line = crossbar_polyline(&arc, Affine::IDENTITY);
        let mid = line[POLYLINE_SEGMENTS / 2];
        assert!((mid.x - 30.0).abs() < 1e-9);
        assert!((mid.y - 26.0).abs() < 1e-9);
    }

    #[test]
    fn path_visits_every_point() {
        let points = [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(4.0, 3.0)];
        let path = to_path(&points);
        assert_eq!(path.elements().len(), 3);
        assert_eq!(path.segments().count(), 2);
        assert!(to_path(&[]).is_empty());
    }
}
