// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radar cursor demos for `roundel_cursor`.
//!
//! Simulates a drag gesture per behavior and writes the resulting overlay
//! (plot ring + crosshairs + selection region) as an SVG file.
mod svg;

use kurbo::{Rect, Vec2};
use peniko::Brush;
use peniko::color::palette::css;
use roundel_cursor::{
    CursorBehavior, PolarFrameSpec, RadarCursor, RadarCursorSpec, RadialLength, Size, annular_band,
};

fn main() {
    let demos = [
        ("zoom_x", CursorBehavior::ZoomX),
        ("zoom_y", CursorBehavior::ZoomY),
        ("zoom_xy", CursorBehavior::ZoomXY),
        ("select_x", CursorBehavior::SelectX),
    ];

    for (name, behavior) in demos {
        let file = format!("radar_cursor_{name}.svg");
        let svg = gesture_demo(behavior, name);
        std::fs::write(&file, svg).unwrap_or_else(|e| panic!("write {file}: {e}"));
        println!("wrote {file}");
    }
}

fn polar_at(angle_deg: f64, radius: f64) -> Vec2 {
    Vec2::from_angle(angle_deg.to_radians()) * radius
}

fn demo_cursor(behavior: CursorBehavior) -> RadarCursor {
    // A 3/4 ring: available 220x220 → outer radius 110, inner 20%.
    let frame = PolarFrameSpec::new(Size::new(220.0, 220.0), -90.0, 180.0)
        .with_inner_radius(RadialLength::Fraction(0.2));
    RadarCursorSpec::new(frame)
        .with_behavior(behavior)
        .instantiate()
}

fn gesture_demo(behavior: CursorBehavior, name: &str) -> String {
    let mut cursor = demo_cursor(behavior);
    let frame = *cursor.frame();

    // Pointer-down near the start of the span, drag across it.
    assert!(cursor.pointer_down(polar_at(-20.0, 70.0)), "down in bounds");
    cursor.pointer_move(polar_at(20.0, 85.0));
    let overlay = cursor.pointer_move(polar_at(95.0, 95.0));

    let mut doc = svg::SvgDoc::new(Rect::new(-120.0, -120.0, 120.0, 120.0));

    // Plot ring backdrop.
    let ring = annular_band(
        frame.inner_radius(),
        frame.outer_radius(),
        frame.start_angle(),
        frame.end_angle(),
        cursor.style().tolerance,
    );
    doc.push_filled(&ring, Brush::Solid(css::WHITE_SMOKE));
    doc.push_stroked(&ring, Brush::Solid(css::SILVER), 1.0);

    if let Some(selection) = &overlay.selection {
        doc.push_filled(selection, cursor.style().selection_fill.clone());
    }
    let line = &cursor.style().line;
    if let Some(angle_line) = &overlay.angle_line {
        doc.push_stroked(angle_line, line.brush.clone(), line.stroke_width);
    }
    if let Some(radius_line) = &overlay.radius_line {
        doc.push_stroked(radius_line, line.brush.clone(), line.stroke_width);
    }

    let ranges = cursor
        .pointer_up(polar_at(95.0, 95.0))
        .expect("gesture was active");
    println!(
        "{name}: x = [{}, {}], y = [{}, {}]",
        ranges.x.start, ranges.x.end, ranges.y.start, ranges.y.end
    );

    doc.to_svg_string()
}
