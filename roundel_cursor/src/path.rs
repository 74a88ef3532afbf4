// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path construction in polar coordinates.
//!
//! All builders emit a [`BezPath`] in frame-local pixel coordinates with the
//! chart center at the origin. Angles are in degrees (converted to radians
//! only at the `kurbo` boundary); arcs are flattened to cubics with the given
//! tolerance.

extern crate alloc;

use kurbo::{Arc, BezPath, Circle, Point, Shape, Vec2};

use crate::angle::angular_sweep;

/// A straight line from the inner to the outer radius at `angle`.
///
/// This is the cursor's angular ("x") crosshair.
pub fn radial_line(angle: f64, inner_radius: f64, outer_radius: f64) -> BezPath {
    let dir = Vec2::from_angle(angle.to_radians());
    let mut path = BezPath::new();
    path.move_to((dir * inner_radius).to_point());
    path.line_to((dir * outer_radius).to_point());
    path
}

/// An arc at `radius` covering the directed span from `start_angle` to
/// `end_angle`.
///
/// This is the cursor's radial ("y") crosshair.
pub fn span_arc(radius: f64, start_angle: f64, end_angle: f64, tolerance: f64) -> BezPath {
    let sweep = angular_sweep(start_angle, end_angle);
    let arc = Arc::new(
        Point::ORIGIN,
        Vec2::new(radius, radius),
        start_angle.to_radians(),
        sweep.to_radians(),
        0.0,
    );
    arc.path_elements(tolerance).collect()
}

/// A ring slice bounded by two radii and two angles.
///
/// Radii and angles are sorted, so the region is the same regardless of drag
/// direction. Degenerate inputs (equal radii or equal angles) produce a
/// degenerate path, never a panic.
pub fn annular_sector(
    radius_a: f64,
    radius_b: f64,
    angle_a: f64,
    angle_b: f64,
    tolerance: f64,
) -> BezPath {
    let outer = radius_a.max(radius_b).max(0.0);
    let inner = radius_a.min(radius_b).max(0.0);
    let start = angle_a.min(angle_b);
    let sweep = (angle_a - angle_b).abs();

    let circle = Circle::new(Point::ORIGIN, outer);
    let segment = circle.segment(inner, start.to_radians(), sweep.to_radians());
    segment.path_elements(tolerance).collect()
}

/// The region between two radii across the directed span from `start_angle`
/// to `end_angle`.
pub fn annular_band(
    radius_a: f64,
    radius_b: f64,
    start_angle: f64,
    end_angle: f64,
    tolerance: f64,
) -> BezPath {
    let sweep = angular_sweep(start_angle, end_angle);
    annular_sector(radius_a, radius_b, start_angle, start_angle + sweep, tolerance)
}
