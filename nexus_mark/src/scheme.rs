// Copyright 2025 the Nexus Mark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colour schemes and the named variants the mark ships in.

use peniko::color::palette::css::WHITE;
use peniko::Color;

use crate::glyph::SizeClass;

/// Violet apex node.
pub const APEX_VIOLET: Color = Color::from_rgb8(0x8b, 0x5c, 0xf6);
/// Amber left junction node.
pub const LEFT_AMBER: Color = Color::from_rgb8(0xf5, 0x9e, 0x0b);
/// Emerald right junction node.
pub const RIGHT_EMERALD: Color = Color::from_rgb8(0x10, 0xb9, 0x81);

/// Near-black stroke used on light backgrounds, and for raster output of adaptive strokes.
pub const INK: Color = Color::from_rgb8(0x1a, 0x1a, 0x1a);
/// Near-white stroke used on dark backgrounds.
pub const PAPER: Color = Color::from_rgb8(0xe8, 0xe8, 0xe8);
/// Brand blue stroke.
pub const BRAND_BLUE: Color = Color::from_rgb8(0x3b, 0x82, 0xf6);
/// Deep navy background of the brand variant.
pub const NAVY: Color = Color::from_rgb8(0x0f, 0x17, 0x2a);

/// The identity colours of the three nodes.
#[derive(Clone, Copy, Debug)]
pub struct NodePalette {
    pub apex: Color,
    pub left: Color,
    pub right: Color,
}

impl NodePalette {
    /// The colours in paint order: apex, left, right.
    pub fn as_array(&self) -> [Color; 3] {
        [self.apex, self.left, self.right]
    }
}

impl Default for NodePalette {
    fn default() -> Self {
        Self {
            apex: APEX_VIOLET,
            left: LEFT_AMBER,
            right: RIGHT_EMERALD,
        }
    }
}

/// How the strokes are painted.
#[derive(Clone, Copy, Debug)]
pub enum StrokePaint {
    /// Inherit the colour from the embedding document (`currentColor` in SVG).
    ///
    /// Raster output has no context to inherit from and uses [`INK`].
    CurrentColor,
    /// A fixed colour.
    Solid(Color),
}

impl StrokePaint {
    /// The colour to use where there is no context to inherit from.
    pub fn resolve(self) -> Color {
        match self {
            Self::CurrentColor => INK,
            Self::Solid(color) => color,
        }
    }
}

/// Stroke colour, optional background and node colours for one rendering.
#[derive(Clone, Copy, Debug)]
pub struct ColorScheme {
    pub stroke: StrokePaint,
    /// Background fill; `None` leaves the canvas transparent.
    pub background: Option<Color>,
    pub nodes: NodePalette,
}

impl ColorScheme {
    /// A scheme with a solid stroke.
    pub fn solid(stroke: Color, background: Option<Color>) -> Self {
        Self {
            stroke: StrokePaint::Solid(stroke),
            background,
            nodes: NodePalette::default(),
        }
    }
}

impl Default for ColorScheme {
    /// The context-adaptive scheme: `currentColor` strokes on a transparent canvas.
    fn default() -> Self {
        Self {
            stroke: StrokePaint::CurrentColor,
            background: None,
            nodes: NodePalette::default(),
        }
    }
}

/// A named combination of size class and colour scheme.
#[derive(Clone, Copy, Debug)]
pub struct Variant {
    /// The file stem the variant is written under.
    pub name: &'static str,
    pub size_class: SizeClass,
    pub scheme: ColorScheme,
}

/// Every vector variant, in output order.
pub fn variants() -> [Variant; 7] {
    let variant = |name, size_class, scheme| Variant {
        name,
        size_class,
        scheme,
    };
    [
        variant("nexus-a", SizeClass::Full, ColorScheme::default()),
        variant(
            "nexus-a-dark",
            SizeClass::Full,
            ColorScheme::solid(INK, Some(WHITE)),
        ),
        variant(
            "nexus-a-light",
            SizeClass::Full,
            ColorScheme::solid(PAPER, Some(INK)),
        ),
        variant(
            "nexus-a-brand",
            SizeClass::Full,
            ColorScheme::solid(BRAND_BLUE, Some(NAVY)),
        ),
        variant("nexus-a-icon", SizeClass::Icon, ColorScheme::default()),
        variant(
            "nexus-a-icon-dark",
            SizeClass::Icon,
            ColorScheme::solid(INK, Some(WHITE)),
        ),
        variant(
            "nexus-a-icon-light",
            SizeClass::Icon,
            ColorScheme::solid(PAPER, Some(INK)),
        ),
    ]
}

/// The four full-size schemes shown side by side on the preview sheet.
pub fn preview_schemes() -> [ColorScheme; 4] {
    [
        ColorScheme::solid(INK, None),
        ColorScheme::solid(INK, Some(WHITE)),
        ColorScheme::solid(PAPER, Some(INK)),
        ColorScheme::solid(BRAND_BLUE, Some(NAVY)),
    ]
}
