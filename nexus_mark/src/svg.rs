// Copyright 2025 the Nexus Mark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Serialize a glyph as an SVG document.

use core::fmt::{self, Write};

use peniko::kurbo::{CubicBez, Point, QuadBez};
use peniko::Color;

use crate::glyph::GlyphInstance;
use crate::scheme::{ColorScheme, StrokePaint};

/// Render `glyph` as a standalone SVG document.
///
/// Coordinates are emitted at the glyph's native canvas size. The output depends only on the
/// arguments.
pub fn to_svg(glyph: &GlyphInstance, scheme: &ColorScheme) -> String {
    let mut out = String::new();
    // Writing into a `String` can't fail.
    let _ = write_svg(&mut out, glyph, scheme);
    out
}

/// Write the SVG document for `glyph` into `w`.
pub fn write_svg(w: &mut impl Write, glyph: &GlyphInstance, scheme: &ColorScheme) -> fmt::Result {
    let spec = &glyph.spec;
    let size = Length(spec.canvas_size);
    writeln!(
        w,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}" width="{size}" height="{size}">"#
    )?;
    if let Some(background) = scheme.background {
        writeln!(
            w,
            r#"  <rect width="{size}" height="{size}" fill="{}"/>"#,
            Hex(background)
        )?;
    }
    let stroke = match scheme.stroke {
        StrokePaint::CurrentColor => "currentColor".to_string(),
        StrokePaint::Solid(color) => Hex(color).to_string(),
    };
    writeln!(
        w,
        r#"  <g stroke="{stroke}" fill="none" stroke-linecap="round" stroke-linejoin="round">"#
    )?;
    let leg_width = Length(spec.leg_stroke_width);
    for leg in [&glyph.left_leg, &glyph.right_leg] {
        writeln!(
            w,
            r#"    <path d="{}" stroke-width="{leg_width}"/>"#,
            CubicPath(leg)
        )?;
    }
    writeln!(
        w,
        r#"    <path d="{}" stroke-width="{}"/>"#,
        QuadPath(&glyph.crossbar.to_quad()),
        Length(spec.crossbar_stroke_width)
    )?;
    writeln!(w, "  </g>")?;
    for ((center, radius), color) in glyph.nodes().into_iter().zip(scheme.nodes.as_array()) {
        writeln!(
            w,
            r#"  <circle cx="{:.1}" cy="{:.1}" r="{}" fill="{}"/>"#,
            center.x,
            center.y,
            Length(radius),
            Hex(color)
        )?;
    }
    write!(w, "</svg>")
}

/// A length printed in its shortest form, so `28.0` becomes `28`.
struct Length(f64);

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A colour as `#rrggbb`, or `#rrggbbaa` if it isn't opaque.
struct Hex(Color);

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0.to_rgba8();
        write!(f, "#{:02x}{:02x}{:02x}", c.r, c.g, c.b)?;
        if c.a != 255 {
            write!(f, "{:02x}", c.a)?;
        }
        Ok(())
    }
}

struct Pt(Point);

impl fmt::Display for Pt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} {:.1}", self.0.x, self.0.y)
    }
}

struct CubicPath<'a>(&'a CubicBez);

impl fmt::Display for CubicPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0;
        write!(
            f,
            "M {} C {}, {}, {}",
            Pt(c.p0),
            Pt(c.p1),
            Pt(c.p2),
            Pt(c.p3)
        )
    }
}

struct QuadPath<'a>(&'a QuadBez);

impl fmt::Display for QuadPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let q = self.0;
        write!(f, "M {} Q {}, {}", Pt(q.p0), Pt(q.p1), Pt(q.p2))
    }
}
