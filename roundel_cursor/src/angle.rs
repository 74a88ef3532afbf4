// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angle arithmetic over possibly-wrapping angular spans.
//!
//! A chart's angular range is directed: `start_angle` may be numerically
//! greater than `end_angle`, in which case the span wraps through 0°/360°
//! (e.g. `350° → 10°` is a 20° span crossing 0°). Spans may also cover more
//! than a full turn (e.g. `-90° → 270°`). All helpers here work in degrees.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Wraps `angle` into `[0, 360)`.
pub fn normalize_angle(angle: f64) -> f64 {
    wrap_from(angle, 0.0)
}

/// Returns the width of the directed span from `start_angle` to `end_angle`.
///
/// For `start_angle <= end_angle` this is the plain difference (which may
/// exceed 360°). For `start_angle > end_angle` the span is taken to wrap
/// through 0°, so the width is `(end - start)` modulo 360. A degenerate
/// range (`start_angle == end_angle`) has width 0.
pub fn angular_sweep(start_angle: f64, end_angle: f64) -> f64 {
    if start_angle <= end_angle {
        end_angle - start_angle
    } else {
        let d = (end_angle - start_angle) % 360.0;
        if d < 0.0 { d + 360.0 } else { d }
    }
}

/// Fits `angle` into the directed span from `start_angle` to `end_angle`.
///
/// The result is expressed relative to `start_angle`: it lies within
/// `[start_angle, start_angle + sweep]`, where the sweep is
/// [`angular_sweep`]. An angle outside the span is clamped to the nearer of
/// the two boundaries, measured through the uncovered gap. The operation is
/// idempotent.
pub fn fit_angle_to_range(angle: f64, start_angle: f64, end_angle: f64) -> f64 {
    let sweep = angular_sweep(start_angle, end_angle);
    let span_end = start_angle + sweep;
    let a = wrap_from(angle, start_angle);
    if a <= span_end {
        return a;
    }
    // `a` falls in the gap between the span end and the wrapped-around start;
    // clamp to whichever boundary is angularly closer.
    if a - span_end <= start_angle + 360.0 - a {
        span_end
    } else {
        start_angle
    }
}

/// Rounds `value` to `decimals` decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10.0_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Wraps `angle` into `[origin, origin + 360)`.
fn wrap_from(angle: f64, origin: f64) -> f64 {
    let off = (angle - origin) % 360.0;
    origin + if off < 0.0 { off + 360.0 } else { off }
}
