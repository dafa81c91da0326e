// Copyright 2025 the Nexus Mark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The glyph's parameterization and the derived geometry shared by every renderer.

use log::debug;
use peniko::kurbo::{CubicBez, Point};

use crate::curve::{self, CrossbarArc, Side};
use crate::Error;

/// The complete parameterization of one glyph.
///
/// All values are in glyph units on a `canvas_size` square, origin at the top left, y down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphSpec {
    /// The shared top vertex of both legs.
    pub apex: Point,
    /// The bottom anchor of the left leg.
    pub left_base: Point,
    /// The bottom anchor of the right leg.
    pub right_base: Point,
    /// Lateral bulge applied to each leg's control points.
    pub bow: f64,
    /// Height at which the crossbar meets the legs.
    pub crossbar_y: f64,
    /// Upward sag of the crossbar's midpoint.
    pub crossbar_arc_height: f64,
    /// Stroke width of both legs.
    pub leg_stroke_width: f64,
    /// Stroke width of the crossbar.
    pub crossbar_stroke_width: f64,
    /// Radius of the node on the apex.
    pub apex_node_radius: f64,
    /// Radius of the two junction nodes.
    pub junction_node_radius: f64,
    /// The logical extent of the (square) coordinate space.
    pub canvas_size: f64,
}

impl GlyphSpec {
    /// Check the constraints [`build`] relies on.
    pub fn validate(&self) -> Result<(), Error> {
        let lengths = [
            self.leg_stroke_width,
            self.crossbar_stroke_width,
            self.apex_node_radius,
            self.junction_node_radius,
            self.canvas_size,
        ];
        if lengths.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(Error::InvalidSpec(
                "stroke widths, node radii and canvas size must be positive",
            ));
        }
        let coords = [
            self.apex.x,
            self.apex.y,
            self.left_base.x,
            self.left_base.y,
            self.right_base.x,
            self.right_base.y,
            self.bow,
            self.crossbar_y,
            self.crossbar_arc_height,
        ];
        if coords.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidSpec("coordinates must be finite"));
        }
        let lowest_base = self.left_base.y.max(self.right_base.y);
        if !(self.crossbar_y > self.apex.y && self.crossbar_y < lowest_base) {
            return Err(Error::InvalidSpec(
                "crossbar must lie strictly between the apex and the bases",
            ));
        }
        if self.left_base.y <= self.apex.y || self.right_base.y <= self.apex.y {
            return Err(Error::InvalidSpec("both bases must lie below the apex"));
        }
        Ok(())
    }
}

/// The two size classes the mark ships in.
///
/// They share the topology and differ only in their absolute constants, so both rows live in
/// one table rather than in two code paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeClass {
    /// The 800 unit logo, used for the SVG assets and the preview sheet.
    Full,
    /// The 128 unit icon, tuned with heavier strokes for small raster sizes.
    Icon,
}

impl SizeClass {
    /// The glyph parameters of this size class.
    pub const fn spec(self) -> GlyphSpec {
        match self {
            Self::Full => GlyphSpec {
                apex: Point::new(400.0, 82.0),
                left_base: Point::new(112.0, 718.0),
                right_base: Point::new(688.0, 718.0),
                bow: 12.0,
                crossbar_y: 432.0,
                crossbar_arc_height: 8.0,
                leg_stroke_width: 28.0,
                crossbar_stroke_width: 22.0,
                apex_node_radius: 26.0,
                junction_node_radius: 21.0,
                canvas_size: 800.0,
            },
            Self::Icon => GlyphSpec {
                apex: Point::new(64.0, 10.0),
                left_base: Point::new(14.0, 118.0),
                right_base: Point::new(114.0, 118.0),
                bow: 2.0,
                crossbar_y: 70.0,
                crossbar_arc_height: 2.0,
                leg_stroke_width: 6.0,
                crossbar_stroke_width: 5.0,
                apex_node_radius: 6.5,
                junction_node_radius: 5.5,
                canvas_size: 128.0,
            },
        }
    }
}

/// The geometry derived from a [`GlyphSpec`].
///
/// Both the SVG emitter and the raster pipeline draw from the same instance, so their output
/// traces identical curves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphInstance {
    /// The spec this instance was built from.
    pub spec: GlyphSpec,
    /// The left leg, from its base up to the apex.
    pub left_leg: CubicBez,
    /// The right leg, from its base up to the apex.
    pub right_leg: CubicBez,
    /// Where the left leg crosses `crossbar_y`.
    pub left_junction: Point,
    /// Where the right leg crosses `crossbar_y`.
    pub right_junction: Point,
    /// The arc joining the two junctions.
    pub crossbar: CrossbarArc,
}

impl GlyphInstance {
    /// The leg on the given side.
    pub fn leg(&self, side: Side) -> &CubicBez {
        match side {
            Side::Left => &self.left_leg,
            Side::Right => &self.right_leg,
        }
    }

    /// The junction on the given side.
    pub fn junction(&self, side: Side) -> Point {
        match side {
            Side::Left => self.left_junction,
            Side::Right => self.right_junction,
        }
    }

    /// The node centres and radii, in paint order: apex, left junction, right junction.
    pub fn nodes(&self) -> [(Point, f64); 3] {
        [
            (self.spec.apex, self.spec.apex_node_radius),
            (self.left_junction, self.spec.junction_node_radius),
            (self.right_junction, self.spec.junction_node_radius),
        ]
    }
}

/// Derive the legs, junctions and crossbar of a glyph.
pub fn build(spec: &GlyphSpec) -> Result<GlyphInstance, Error> {
    spec.validate()?;

    let leg = |side: Side| -> Result<(CubicBez, Point), Error> {
        let base = match side {
            Side::Left => spec.left_base,
            Side::Right => spec.right_base,
        };
        let curve = curve::leg_curve(base, spec.apex, spec.bow, side);
        if !curve::is_monotonic_y(&curve) {
            return Err(Error::NonMonotonicLeg(side));
        }
        let t = curve::invert_y(&curve, spec.crossbar_y);
        Ok((curve, curve::evaluate(&curve, t)))
    };
    let (left_leg, left_junction) = leg(Side::Left)?;
    let (right_leg, right_junction) = leg(Side::Right)?;

    debug!(
        "Junctions at ({:.2}, {:.2}) and ({:.2}, {:.2})",
        left_junction.x, left_junction.y, right_junction.x, right_junction.y
    );

    Ok(GlyphInstance {
        spec: *spec,
        left_leg,
        right_leg,
        left_junction,
        right_junction,
        crossbar: CrossbarArc::new(
            left_junction.x,
            right_junction.x,
            spec.crossbar_y,
            spec.crossbar_arc_height,
        ),
    })
}
