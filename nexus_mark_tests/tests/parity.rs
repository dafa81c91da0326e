// Copyright 2025 the Nexus Mark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The vector and raster outputs trace the same geometry.

#![allow(
    clippy::missing_assert_message,
    clippy::allow_attributes_without_reason
)]

use nexus_mark::kurbo::Point;
use nexus_mark::raster::{RasterParams, ICON_SIZES};
use nexus_mark::scheme::{preview_schemes, ColorScheme, NodePalette};
use nexus_mark::{glyph, svg, SizeClass};
use nexus_mark_tests::{channel_distance, node_tolerance, render_then_debug, TestParams};

/// Pull `(cx, cy)` out of every `<circle>` in an SVG document.
fn circle_centers(document: &str) -> Vec<Point> {
    let attr = |line: &str, name: &str| -> f64 {
        let start = line.find(&format!(" {name}=\"")).unwrap() + name.len() + 3;
        let end = start + line[start..].find('"').unwrap();
        line[start..end].parse().unwrap()
    };
    document
        .lines()
        .filter(|line| line.trim_start().starts_with("<circle"))
        .map(|line| Point::new(attr(line, "cx"), attr(line, "cy")))
        .collect()
}

fn check_nodes(params: &TestParams) {
    let glyph = params.glyph().unwrap();
    let document = svg::to_svg(&glyph, &params.scheme);
    let centers = circle_centers(&document);
    assert_eq!(centers.len(), 3);

    let image = render_then_debug(params).unwrap();
    let raster_params = RasterParams::new(params.size, glyph.spec.canvas_size).unwrap();
    let tolerance = node_tolerance(params.size);
    for (center, color) in centers.iter().zip(params.scheme.nodes.as_array()) {
        let (x, y) = raster_params.output_pixel(*center);
        let pixel = image.get_pixel(x, y);
        let distance = channel_distance(pixel, color);
        assert!(
            distance <= tolerance,
            "{}: node at {center:?} sampled {pixel:?}, expected {color:?} within {tolerance}",
            params.name
        );
    }
}

#[test]
fn svg_nodes_match_glyph() {
    let glyph = glyph::build(&SizeClass::Full.spec()).unwrap();
    let centers = circle_centers(&svg::to_svg(&glyph, &ColorScheme::default()));
    let expected = glyph.nodes().map(|(center, _)| center);
    for (found, expected) in centers.iter().zip(expected) {
        // The SVG rounds to one decimal.
        assert!((*found - expected).hypot() < 0.08, "{found:?} vs {expected:?}");
    }
}

#[test]
fn icon_nodes_at_every_size() {
    for size in ICON_SIZES {
        check_nodes(&TestParams::new(format!("parity_icon_{size}"), SizeClass::Icon, size));
    }
}

#[test]
fn tolerance_tightens_with_size() {
    assert_eq!(node_tolerance(16), 48);
    assert_eq!(node_tolerance(32), 48);
    assert_eq!(node_tolerance(48), 24);
    assert_eq!(node_tolerance(64), 4);
    assert!(ICON_SIZES
        .windows(2)
        .all(|pair| node_tolerance(pair[0]) >= node_tolerance(pair[1])));
}

#[test]
fn full_nodes_on_every_preview_scheme() {
    for (i, scheme) in preview_schemes().into_iter().enumerate() {
        let params = TestParams {
            scheme,
            ..TestParams::new(format!("parity_full_{i}"), SizeClass::Full, 400)
        };
        check_nodes(&params);
    }
}

#[test]
fn custom_node_palette() {
    let nodes = NodePalette {
        apex: nexus_mark::peniko::Color::from_rgb8(255, 0, 0),
        left: nexus_mark::peniko::Color::from_rgb8(0, 255, 0),
        right: nexus_mark::peniko::Color::from_rgb8(0, 0, 255),
    };
    let params = TestParams {
        scheme: ColorScheme {
            nodes,
            ..ColorScheme::default()
        },
        ..TestParams::new("parity_custom_nodes", SizeClass::Icon, 128)
    };
    check_nodes(&params);
}
