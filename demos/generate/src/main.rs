// Copyright 2025 the Nexus Mark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generate every Nexus A asset.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use nexus_mark::raster::{self, ICON_SIZES};
use nexus_mark::scheme::{self, ColorScheme};
use nexus_mark::sheet::{self, SizeSheetOptions};
use nexus_mark::{glyph, svg, SizeClass};

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    println!("Generating Nexus A (coloured nodes, oversampled strokes)...\n");

    std::fs::create_dir_all(&args.out_directory)
        .with_context(|| format!("Creating {:?}", args.out_directory))?;

    for variant in scheme::variants() {
        let glyph = glyph::build(&variant.size_class.spec())?;
        let path = args.out_directory.join(variant.name).with_extension("svg");
        std::fs::write(&path, svg::to_svg(&glyph, &variant.scheme))
            .with_context(|| format!("Writing {path:?}"))?;
        println!("  [OK] {}.svg", variant.name);
    }

    if args.svg_only {
        info!("Skipping raster output");
    } else if let Err(e) = write_rasters(&args) {
        // Raster output is best-effort; the SVGs above are already written.
        println!("  [WARN] PNG: {e:#}");
    }

    println!("\nDone.");
    Ok(())
}

fn write_rasters(args: &Args) -> Result<()> {
    let dir = &args.out_directory;

    let full = glyph::build(&SizeClass::Full.spec())?;
    let tiles = scheme::preview_schemes()
        .iter()
        .map(|scheme| raster::render(&full, scheme, args.tile))
        .collect::<Result<Vec<_>, _>>()?;
    save(&sheet::variant_strip(&tiles), dir, "preview-sheet.png")?;

    let icon = glyph::build(&SizeClass::Icon.spec())?;
    let icons = raster::render_sizes(&icon, &ColorScheme::default(), &args.sizes)?;
    for (size, image) in &icons {
        save(image, dir, &format!("icon-{size}.png"))?;
    }

    let comparison = sheet::size_sheet(&icons, &SizeSheetOptions::default());
    save(&comparison, dir, "icon-sizes-preview.png")?;
    Ok(())
}

fn save(image: &raster::RgbaImage, dir: &Path, name: &str) -> Result<()> {
    let path = dir.join(name);
    raster::save_png(image, &path).with_context(|| format!("Writing {path:?}"))?;
    println!("  [OK] {name}");
    Ok(())
}

#[derive(Parser, Debug)]
#[command(about, long_about = None, bin_name = "cargo run -p generate --")]
struct Args {
    /// Directory to store the assets into
    #[arg(long, default_value_os_t = default_directory())]
    out_directory: PathBuf,
    /// Icon sizes to render, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = ICON_SIZES.to_vec())]
    sizes: Vec<u32>,
    /// Edge length of each variant on the preview sheet
    #[arg(long, default_value_t = 500)]
    tile: u32,
    /// Only write the SVG documents
    #[arg(long)]
    svg_only: bool,
}

fn default_directory() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("outputs")
}
