// Copyright 2025 the Nexus Mark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composite preview sheets built from rendered rasters.
//!
//! There are two ways an icon gets scaled here, and they must not be mixed up. The canonical
//! per-size icons come out of [`raster::render`](crate::raster::render), which downsamples with
//! Lanczos to show what the icon looks like. The size comparison sheet blows those icons back up
//! with nearest-neighbour sampling to show how coarse they really are.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use peniko::Color;

use crate::label;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Place `tiles` side by side, left to right, on an opaque white canvas.
///
/// The sheet is as tall as the tallest tile.
pub fn variant_strip(tiles: &[RgbaImage]) -> RgbaImage {
    let width = tiles.iter().map(RgbaImage::width).sum();
    let height = tiles.iter().map(RgbaImage::height).max().unwrap_or(0);
    let mut sheet = RgbaImage::from_pixel(width, height, WHITE);
    let mut x = 0_i64;
    for tile in tiles {
        imageops::overlay(&mut sheet, tile, x, 0);
        x += i64::from(tile.width());
    }
    sheet
}

/// Layout of [`size_sheet`].
#[derive(Clone, Copy, Debug)]
pub struct SizeSheetOptions {
    /// Edge length every icon is upscaled to.
    pub display: u32,
    /// Margin around and between the icons.
    pub pad: u32,
    /// Extra height below the icons for the labels.
    pub label_band: u32,
    pub label_color: Color,
    pub label_scale: u32,
}

impl Default for SizeSheetOptions {
    fn default() -> Self {
        Self {
            display: 128,
            pad: 12,
            label_band: 20,
            label_color: Color::from_rgb8(0x88, 0x88, 0x88),
            label_scale: 2,
        }
    }
}

/// Upscale `image` to `display`×`display` without any filtering.
pub fn upscale_nearest(image: &RgbaImage, display: u32) -> RgbaImage {
    imageops::resize(image, display, display, FilterType::Nearest)
}

/// Lay out `icons` in a row, each upscaled with [`upscale_nearest`] and labelled with its size.
pub fn size_sheet(icons: &[(u32, RgbaImage)], options: &SizeSheetOptions) -> RgbaImage {
    let SizeSheetOptions {
        display,
        pad,
        label_band,
        label_color,
        label_scale,
    } = *options;
    let cols = icons.len() as u32;
    let width = cols * (display + pad) + pad;
    let height = display + 2 * pad + label_band;
    let mut sheet = RgbaImage::from_pixel(width, height, WHITE);
    for (i, (size, icon)) in icons.iter().enumerate() {
        let x = pad + i as u32 * (display + pad);
        let upscaled = upscale_nearest(icon, display);
        imageops::overlay(&mut sheet, &upscaled, i64::from(x), i64::from(pad));

        let text = format!("{size}px");
        let text_width = label::text_width(&text, label_scale);
        let text_x = i64::from(x) + (i64::from(display) - i64::from(text_width)) / 2;
        let text_y = i64::from(pad + display + 4);
        label::draw_text(&mut sheet, text_x, text_y, &text, label_color, label_scale);
    }
    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn checker(size: u32) -> RgbaImage {
        RgbaImage::from_fn(size, size, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 255])
            }
        })
    }

    #[test]
    fn strip_dimensions_and_order() {
        let red = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]));
        let blue = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]));
        let strip = variant_strip(&[red, blue]);
        assert_eq!(strip.dimensions(), (8, 4));
        assert_eq!(strip.get_pixel(1, 1).0, [255, 0, 0, 255]);
        assert_eq!(strip.get_pixel(6, 1).0, [0, 0, 255, 255]);
    }

    #[test]
    fn transparent_tiles_show_white() {
        let clear = RgbaImage::new(3, 3);
        let strip = variant_strip(&[clear]);
        assert_eq!(strip.get_pixel(1, 1).0, [255, 255, 255, 255]);
    }

    #[test]
    fn nearest_upscale_never_blends() {
        let source = checker(4);
        let upscaled = upscale_nearest(&source, 32);
        assert_eq!(upscaled.dimensions(), (32, 32));
        let colors: HashSet<[u8; 4]> = upscaled.pixels().map(|px| px.0).collect();
        assert_eq!(colors.len(), 2);
        assert!(colors.contains(&[255, 0, 0, 255]));
        assert!(colors.contains(&[0, 0, 255, 255]));
    }

    #[test]
    fn size_sheet_layout() {
        let icons = vec![(16, checker(16)), (24, checker(24)), (32, checker(32))];
        let options = SizeSheetOptions::default();
        let sheet = size_sheet(&icons, &options);
        assert_eq!(sheet.dimensions(), (3 * (128 + 12) + 12, 128 + 24 + 20));
        // Margins stay white, icons start at the padding.
        assert_eq!(sheet.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_ne!(sheet.get_pixel(12, 12).0, [255, 255, 255, 255]);
        assert_ne!(sheet.get_pixel(12 + 140, 12).0, [255, 255, 255, 255]);
        // Some label pixels are grey.
        let grey = sheet
            .pixels()
            .filter(|px| px.0 == [0x88, 0x88, 0x88, 255])
            .count();
        assert!(grey > 0);
    }

    #[test]
    fn empty_sheet() {
        let sheet = size_sheet(&[], &SizeSheetOptions::default());
        assert_eq!(sheet.dimensions(), (12, 172));
    }
}
