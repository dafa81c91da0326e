// Copyright 2025 the Nexus Mark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel-exact raster icons.
//!
//! Drawing a 6 unit stroke straight onto a 16 pixel canvas leaves it less than a pixel wide, and
//! it aliases into a broken, jagged line. Instead the glyph is painted on a canvas 2 or 4 times
//! larger, with strokes and nodes thickened at the smallest sizes, and then downsampled to the
//! target size with a Lanczos filter.

use std::path::Path;

use image::imageops::{self, FilterType};
pub use image::RgbaImage;
use log::debug;
use peniko::kurbo::{Affine, Cap, Circle, Join, Point, Rect, Shape, Stroke};
use vello_cpu::{Pixmap, RenderContext, RenderMode};

use crate::flatten;
use crate::glyph::GlyphInstance;
use crate::scheme::ColorScheme;
use crate::Error;

/// The icon sizes the mark ships in.
pub const ICON_SIZES: [u32; 7] = [16, 24, 32, 48, 64, 128, 256];

/// The largest supported output size.
pub const MAX_SIZE: u32 = 2048;

/// How many times larger than the target the glyph is painted.
pub fn oversample_factor(size: u32) -> u32 {
    if size <= 32 {
        4
    } else {
        2
    }
}

/// Stroke and node compensation for the thinning caused by downsampling.
pub fn stroke_boost(size: u32) -> f64 {
    if size <= 20 {
        1.5
    } else if size <= 32 {
        1.2
    } else {
        1.0
    }
}

/// The size-dependent decisions for rendering one raster.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterParams {
    /// Output width and height in pixels.
    pub size: u32,
    pub oversample: u32,
    pub boost: f64,
    /// Width and height of the oversampled canvas.
    pub canvas_px: u32,
    /// Glyph units to oversampled pixels.
    pub scale: f64,
}

impl RasterParams {
    /// The parameters for an `size`×`size` output of a glyph on a `canvas_size` square.
    pub fn new(size: u32, canvas_size: f64) -> Result<Self, Error> {
        if size == 0 || size > MAX_SIZE {
            return Err(Error::InvalidSize(size));
        }
        let oversample = oversample_factor(size);
        let canvas_px = size * oversample;
        Ok(Self {
            size,
            oversample,
            boost: stroke_boost(size),
            canvas_px,
            scale: f64::from(canvas_px) / canvas_size,
        })
    }

    /// The device width of a stroke `width` glyph units wide.
    pub fn stroke_width(&self, width: f64) -> f64 {
        (width * self.scale * self.boost).max(1.0)
    }

    /// The device radius of a node `radius` glyph units wide.
    pub fn node_radius(&self, radius: f64) -> f64 {
        (radius * self.scale * self.boost).max(1.0)
    }

    /// The transform from glyph units to the oversampled canvas.
    pub fn transform(&self) -> Affine {
        Affine::scale(self.scale)
    }

    /// The output pixel containing `point`, given in glyph units.
    pub fn output_pixel(&self, point: Point) -> (u32, u32) {
        let to_px = |v: f64| {
            let px = (v * self.scale / f64::from(self.oversample)).floor();
            px.clamp(0.0, f64::from(self.size - 1)) as u32
        };
        (to_px(point.x), to_px(point.y))
    }
}

/// Tolerance, in device pixels, used when flattening the node circles.
const CIRCLE_TOLERANCE: f64 = 0.1;

fn round_stroke(width: f64) -> Stroke {
    Stroke::new(width).with_caps(Cap::Round).with_join(Join::Round)
}

/// Paint `glyph` onto the oversampled canvas described by `params`.
///
/// Paint order is background, legs, crossbar, then the apex, left and right nodes.
pub fn paint(
    glyph: &GlyphInstance,
    scheme: &ColorScheme,
    params: &RasterParams,
) -> Result<Pixmap, Error> {
    let side = u16::try_from(params.canvas_px).map_err(|_| Error::InvalidSize(params.size))?;
    let spec = &glyph.spec;
    let transform = params.transform();
    let mut ctx = RenderContext::new(side, side);

    if let Some(background) = scheme.background {
        ctx.set_paint(background);
        ctx.fill_rect(&Rect::new(0.0, 0.0, f64::from(side), f64::from(side)));
    }

    ctx.set_paint(scheme.stroke.resolve());
    ctx.set_stroke(round_stroke(params.stroke_width(spec.leg_stroke_width)));
    for leg in [&glyph.left_leg, &glyph.right_leg] {
        ctx.stroke_path(&flatten::to_path(&flatten::polyline(leg, transform)));
    }
    ctx.set_stroke(round_stroke(params.stroke_width(spec.crossbar_stroke_width)));
    ctx.stroke_path(&flatten::to_path(&flatten::crossbar_polyline(&glyph.crossbar, transform)));

    for ((center, radius), color) in glyph.nodes().into_iter().zip(scheme.nodes.as_array()) {
        let node = Circle::new(transform * center, params.node_radius(radius));
        ctx.set_paint(color);
        ctx.fill_path(&node.to_path(CIRCLE_TOLERANCE));
    }

    let mut pixmap = Pixmap::new(side, side);
    ctx.render_to_pixmap(&mut pixmap, RenderMode::OptimizeQuality);
    Ok(pixmap)
}

/// Copy the premultiplied pixels of `pixmap` into an image, bytes unchanged.
fn premultiplied_image(pixmap: &Pixmap) -> RgbaImage {
    let bytes = pixmap
        .data()
        .iter()
        .flat_map(|px| [px.r, px.g, px.b, px.a])
        .collect();
    RgbaImage::from_raw(u32::from(pixmap.width()), u32::from(pixmap.height()), bytes)
        .expect("a pixmap holds exactly width * height pixels")
}

/// Render `glyph` as an exactly `size`×`size` straight-alpha RGBA image.
pub fn render(glyph: &GlyphInstance, scheme: &ColorScheme, size: u32) -> Result<RgbaImage, Error> {
    let params = RasterParams::new(size, glyph.spec.canvas_size)?;
    debug!(
        "Rendering {size}px: {}x oversampled to {}px, boost {}",
        params.oversample, params.canvas_px, params.boost
    );
    let oversampled = premultiplied_image(&paint(glyph, scheme, &params)?);
    // Filtering premultiplied values keeps transparent pixels from bleeding black into edges.
    let downsampled = imageops::resize(&oversampled, size, size, FilterType::Lanczos3);
    Ok(unpremultiply(downsampled))
}

/// Render `glyph` at each of `sizes`, returned in the same order.
pub fn render_sizes(
    glyph: &GlyphInstance,
    scheme: &ColorScheme,
    sizes: &[u32],
) -> Result<Vec<(u32, RgbaImage)>, Error> {
    let render_one = |&size: &u32| render(glyph, scheme, size).map(|image| (size, image));
    #[cfg(feature = "multithreading")]
    {
        use rayon::prelude::*;
        sizes.par_iter().map(render_one).collect()
    }
    #[cfg(not(feature = "multithreading"))]
    {
        sizes.iter().map(render_one).collect()
    }
}

fn unpremultiply(mut image: RgbaImage) -> RgbaImage {
    for px in image.pixels_mut() {
        let [r, g, b, a] = px.0;
        px.0 = match a {
            0 => [0, 0, 0, 0],
            255 => [r, g, b, a],
            _ => {
                let a16 = u16::from(a);
                let un = |c: u8| ((u16::from(c) * 255 + a16 / 2) / a16).min(255) as u8;
                [un(r), un(g), un(b), a]
            }
        };
    }
    image
}

/// Encode `image` as PNG.
#[cfg(feature = "png")]
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, Error> {
    let mut bytes = Vec::new();
    image.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)?;
    Ok(bytes)
}

/// Encode `image` as PNG.
///
/// Always fails: this build has no PNG encoder.
#[cfg(not(feature = "png"))]
pub fn encode_png(_image: &RgbaImage) -> Result<Vec<u8>, Error> {
    Err(Error::RasterBackendUnavailable)
}

/// Encode `image` as PNG and write it to `path`.
pub fn save_png(image: &RgbaImage, path: impl AsRef<Path>) -> Result<(), Error> {
    let bytes = encode_png(image)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
