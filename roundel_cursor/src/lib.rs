// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar cursor building blocks for radar/polar charts.
//!
//! This crate is the interaction-geometry layer of a radar chart:
//! - A **polar frame** maps pointer pixel offsets (relative to the chart
//!   center) into angle/radius space, clamped to the chart's configured
//!   angular span and radius bounds.
//! - A **radar cursor** tracks a pointer gesture (down → moves → up) in that
//!   frame, produces crosshair and selection region paths, and reduces a
//!   completed gesture to normalized `[0, 1]` ranges per axis.
//!
//! Rendering, axes, data binding and the rest of a chart framework are out of
//! scope: all geometry is emitted as plain [`kurbo::BezPath`]s in frame-local
//! pixel coordinates (the chart center at the origin), for any renderer to
//! consume.
//!
//! Angles are in degrees, measured from the positive x-axis and increasing
//! clockwise in screen (y-down) coordinates.

#![no_std]

extern crate alloc;

mod angle;
mod behavior;
mod cursor;
#[cfg(not(feature = "std"))]
mod float;
mod frame;
mod path;
mod style;

pub use angle::{angular_sweep, fit_angle_to_range, normalize_angle, round_to};
pub use behavior::CursorBehavior;
pub use cursor::{CursorOverlay, GestureRanges, NormalizedRange, RadarCursor, RadarCursorSpec};
pub use frame::{
    HIT_TOLERANCE, PolarFrame, PolarFrameSpec, RadialLength, Size, fit_to_range,
};
pub use path::{annular_band, annular_sector, radial_line, span_arc};
pub use style::{CursorStyle, StrokeStyle};
