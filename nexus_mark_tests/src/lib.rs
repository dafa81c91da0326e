// Copyright 2025 the Nexus Mark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nexus Mark tests.

// LINEBENDER LINT SET - lib.rs - v2
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![allow(
    missing_debug_implementations,
    unreachable_pub,
    missing_docs,
    clippy::missing_assert_message,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::allow_attributes_without_reason
)]

use std::env;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::Result;
use image::{Rgba, RgbaImage};
use nexus_mark::glyph::{self, GlyphInstance};
use nexus_mark::peniko::Color;
use nexus_mark::raster;
use nexus_mark::scheme::ColorScheme;
use nexus_mark::SizeClass;

pub struct TestParams {
    pub name: String,
    pub size_class: SizeClass,
    pub size: u32,
    pub scheme: ColorScheme,
}

impl TestParams {
    pub fn new(name: impl Into<String>, size_class: SizeClass, size: u32) -> Self {
        Self {
            name: name.into(),
            size_class,
            size,
            scheme: ColorScheme::default(),
        }
    }

    pub fn glyph(&self) -> Result<GlyphInstance> {
        Ok(glyph::build(&self.size_class.spec())?)
    }
}

/// Render the glyph described by `params`.
///
/// If `NEXUS_DEBUG_TEST` is `all` or lists this test's name, the result is also written to
/// `debug_outputs/`. Otherwise any stale debug output for the test is removed.
pub fn render_then_debug(params: &TestParams) -> Result<RgbaImage> {
    let glyph = params.glyph()?;
    let image = raster::render(&glyph, &params.scheme, params.size)?;
    let out_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("debug_outputs")
        .join(&params.name)
        .with_extension("png");
    if env_var_relates_to("NEXUS_DEBUG_TEST", &params.name) {
        write_png_to_file(&out_path, &image)?;
        let (width, height) = image.dimensions();
        println!("Wrote debug result ({width}x{height}) to {out_path:?}");
    } else {
        match std::fs::remove_file(&out_path) {
            Ok(()) => (),
            Err(e) if e.kind() == ErrorKind::NotFound => (),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(image)
}

pub fn write_png_to_file(out_path: &Path, image: &RgbaImage) -> Result<()> {
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    raster::save_png(image, out_path)?;
    Ok(())
}

fn env_var_relates_to(env_var: &'static str, name: &str) -> bool {
    if let Ok(val) = env::var(env_var) {
        if val.eq_ignore_ascii_case("all") {
            return true;
        }
        for test in val.split(',') {
            if test.trim().eq_ignore_ascii_case(name) {
                return true;
            }
        }
    }
    false
}

/// How far, per channel, a node's centre pixel may drift from the node colour at `size`.
///
/// Below 64 pixels the nodes span only a few output pixels, so Lanczos ringing and the strokes
/// around each junction bleed into the sampled pixel.
pub fn node_tolerance(size: u32) -> u8 {
    match size {
        0..=32 => 48,
        33..=48 => 24,
        _ => 4,
    }
}

/// The largest per-channel difference between a pixel and a colour.
pub fn channel_distance(pixel: &Rgba<u8>, color: Color) -> u8 {
    let expected = color.to_rgba8();
    let expected = [expected.r, expected.g, expected.b, expected.a];
    pixel
        .0
        .iter()
        .zip(expected)
        .map(|(a, b)| a.abs_diff(b))
        .max()
        .unwrap_or(0)
}
