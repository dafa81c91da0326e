// Copyright 2025 the Nexus Mark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nexus Mark builds the "Nexus A" brand mark from a handful of numeric knobs and renders it
//! both as an SVG document and as pixel-exact raster icons.
//!
//! The glyph has a single topology: two bowed leg curves rising from their base anchors to a
//! shared apex, joined by a slightly arched crossbar. Three coloured nodes sit on the apex and on
//! the two junctions where the legs cross the crossbar's height.
//!
//! ```
//! use nexus_mark::{glyph, scheme::ColorScheme, svg, SizeClass};
//!
//! let glyph = glyph::build(&SizeClass::Icon.spec()).unwrap();
//! let document = svg::to_svg(&glyph, &ColorScheme::default());
//! assert!(document.starts_with("<svg"));
//! ```
//!
//! # Features
//!
//! - `png` (enabled by default): Allow encoding rendered images as PNG.
//!   Without it, [`raster::encode_png`] and [`raster::save_png`] return
//!   [`Error::RasterBackendUnavailable`], while vector output is unaffected.
//! - `multithreading`: Render several icon sizes in parallel in [`raster::render_sizes`].
//!
//! # Contents
//!
//! - [`curve`]: Bézier evaluation, leg derivation, inversion by bisection and the crossbar arc.
//! - [`glyph`]: The parameterization ([`GlyphSpec`]) and the derived [`GlyphInstance`].
//! - [`svg`]: The vector emitter.
//! - [`raster`]: The supersampled raster pipeline.
//! - [`sheet`]: Preview and size comparison sheets.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod curve;
pub mod flatten;
pub mod glyph;
pub mod label;
pub mod raster;
pub mod scheme;
pub mod sheet;
pub mod svg;

pub use peniko;
pub use peniko::color;
pub use peniko::kurbo;

pub use glyph::{GlyphInstance, GlyphSpec, SizeClass};

use curve::Side;
use thiserror::Error;

/// Errors that can occur while building or rendering the mark.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A [`GlyphSpec`] violated one of its constraints.
    #[error("Invalid glyph spec: {0}")]
    InvalidSpec(&'static str),
    /// A leg curve is not monotonic in y, so its junction can't be found by bisection.
    #[error("The {0:?} leg is not monotonic in y")]
    NonMonotonicLeg(Side),
    /// The requested raster size is zero or exceeds [`raster::MAX_SIZE`].
    #[error("Unsupported raster size {0}")]
    InvalidSize(u32),
    /// Raster encoding was compiled out (the `png` feature is disabled).
    #[error("Raster output is unavailable: built without the `png` feature")]
    RasterBackendUnavailable,
    /// Encoding an image failed.
    #[error("Image encoding failed")]
    Image(#[from] image::ImageError),
    /// Writing an output file failed.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
