// Copyright 2025 the Nexus Mark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tiny bitmap font for size labels such as `16px`.
//!
//! Each sprite is 3×5 pixels packed into the low 15 bits of a `u16`, row-major, with the top
//! left pixel in bit 14.

use image::{Rgba, RgbaImage};
use peniko::Color;

pub const GLYPH_WIDTH: u32 = 3;
pub const GLYPH_HEIGHT: u32 = 5;
/// Horizontal distance between the origins of consecutive glyphs, in font pixels.
pub const ADVANCE: u32 = GLYPH_WIDTH + 1;

fn sprite(ch: char) -> Option<u16> {
    Some(match ch {
        '0' => 0b111_101_101_101_111,
        '1' => 0b010_110_010_010_111,
        '2' => 0b111_001_111_100_111,
        '3' => 0b111_001_111_001_111,
        '4' => 0b101_101_111_001_001,
        '5' => 0b111_100_111_001_111,
        '6' => 0b111_100_111_101_111,
        '7' => 0b111_001_001_001_001,
        '8' => 0b111_101_111_101_111,
        '9' => 0b111_101_111_001_111,
        'p' => 0b000_110_101_110_100,
        'x' => 0b000_000_101_010_101,
        _ => return None,
    })
}

/// The width in pixels of `text` drawn at `scale`.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        0
    } else {
        (chars * ADVANCE - 1) * scale
    }
}

/// Draw `text` with its top left corner at `(x, y)`, each font pixel `scale` pixels square.
///
/// Characters without a sprite advance the pen but draw nothing. Pixels outside `image` are
/// clipped.
pub fn draw_text(image: &mut RgbaImage, x: i64, y: i64, text: &str, color: Color, scale: u32) {
    let rgba = color.to_rgba8();
    let px = Rgba([rgba.r, rgba.g, rgba.b, rgba.a]);
    let scale = i64::from(scale);
    let (width, height) = (i64::from(image.width()), i64::from(image.height()));
    for (i, ch) in text.chars().enumerate() {
        let Some(bits) = sprite(ch) else {
            continue;
        };
        let origin_x = x + i as i64 * i64::from(ADVANCE) * scale;
        for row in 0..GLYPH_HEIGHT {
            for col in 0..GLYPH_WIDTH {
                let bit = 14 - (row * GLYPH_WIDTH + col);
                if (bits >> bit) & 1 == 0 {
                    continue;
                }
                let left = origin_x + i64::from(col) * scale;
                let top = y + i64::from(row) * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        let (px_x, px_y) = (left + dx, top + dy);
                        if (0..width).contains(&px_x) && (0..height).contains(&px_y) {
                            image.put_pixel(px_x as u32, px_y as u32, px);
                        }
                    }
                }
            }
        }
    }
}
