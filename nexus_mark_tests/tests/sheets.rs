// Copyright 2025 the Nexus Mark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Preview and size comparison sheets built from real renders.

#![allow(
    clippy::missing_assert_message,
    clippy::allow_attributes_without_reason
)]

use std::collections::HashSet;

use anyhow::Result;
use nexus_mark::raster::{self, ICON_SIZES};
use nexus_mark::scheme::{preview_schemes, ColorScheme};
use nexus_mark::sheet::{self, SizeSheetOptions};
use nexus_mark::{glyph, SizeClass};

#[test]
fn preview_strip_of_every_scheme() -> Result<()> {
    let glyph = glyph::build(&SizeClass::Full.spec())?;
    let tile = 120;
    let tiles = preview_schemes()
        .iter()
        .map(|scheme| raster::render(&glyph, scheme, tile))
        .collect::<Result<Vec<_>, _>>()?;
    let strip = sheet::variant_strip(&tiles);
    assert_eq!(strip.dimensions(), (4 * tile, tile));
    // The first scheme has no background, so the strip's own white shows through.
    assert_eq!(strip.get_pixel(1, 1).0, [255, 255, 255, 255]);
    // The brand scheme paints its navy background.
    assert_eq!(strip.get_pixel(3 * tile + 1, 1).0, [0x0f, 0x17, 0x2a, 255]);
    Ok(())
}

#[test]
fn size_sheet_shows_true_pixels() -> Result<()> {
    let glyph = glyph::build(&SizeClass::Icon.spec())?;
    let icons = raster::render_sizes(&glyph, &ColorScheme::default(), &ICON_SIZES)?;
    let options = SizeSheetOptions::default();
    let sheet = sheet::size_sheet(&icons, &options);
    let cols = ICON_SIZES.len() as u32;
    assert_eq!(
        sheet.dimensions(),
        (cols * (128 + 12) + 12, 128 + 2 * 12 + 20)
    );

    // The 16px icon blown up 8x is made of solid 8x8 blocks.
    let (_, icon_16) = &icons[0];
    let upscaled = sheet::upscale_nearest(icon_16, 128);
    let source: HashSet<[u8; 4]> = icon_16.pixels().map(|px| px.0).collect();
    assert!(upscaled.pixels().all(|px| source.contains(&px.0)));
    Ok(())
}

#[test]
fn canonical_icons_are_smooth() -> Result<()> {
    // Unlike the sheet's blow-ups, the per-size icons carry anti-aliased edges.
    let glyph = glyph::build(&SizeClass::Icon.spec())?;
    let icon = raster::render(&glyph, &ColorScheme::default(), 64)?;
    let alphas: HashSet<u8> = icon.pixels().map(|px| px.0[3]).collect();
    assert!(alphas.len() > 10, "{alphas:?}");
    Ok(())
}
