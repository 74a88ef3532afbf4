// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The polar frame: pointer-to-polar conversion and bounds.
//!
//! A frame resolves a chart's radius configuration against the available
//! drawing size and converts pointer offsets (relative to the chart center)
//! into clamped angle/radius coordinates. It is the read-only geometry
//! context a cursor operates in.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::Vec2;

use crate::angle::{angular_sweep, fit_angle_to_range};

/// Extra distance beyond the outer radius that still counts as "inside".
///
/// This keeps the cursor interactive when the pointer sits slightly outside
/// the drawn ring.
pub const HIT_TOLERANCE: f64 = 10.0;

/// A width/height pair describing the available drawing size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The largest circle radius fitting the size: `min(width, height) / 2`.
    pub fn bound_radius(&self) -> f64 {
        (0.5 * self.width.min(self.height)).max(0.0)
    }
}

/// A radial length, either absolute pixels or a fraction of the available
/// radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RadialLength {
    /// An absolute length in pixels.
    Px(f64),
    /// A fraction of the available radius (`1.0` = 100%).
    Fraction(f64),
}

impl RadialLength {
    /// Resolves this length against the given available radius.
    pub fn resolve(&self, available: f64) -> f64 {
        match self {
            Self::Px(v) => *v,
            Self::Fraction(f) => f * available,
        }
    }
}

/// Configuration for a [`PolarFrame`] (sizes not yet resolved).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarFrameSpec {
    /// Available drawing size; the frame's center is its midpoint.
    pub size: Size,
    /// Angle at which the angular axis starts, in degrees.
    pub start_angle: f64,
    /// Angle at which the angular axis ends, in degrees.
    ///
    /// May be smaller than `start_angle` (a span wrapping through 0°) or more
    /// than a full turn away from it.
    pub end_angle: f64,
    /// Outer radius of the frame's ring.
    pub radius: RadialLength,
    /// Inner radius of the frame's ring (0 for a full disc).
    pub inner_radius: RadialLength,
}

impl PolarFrameSpec {
    /// Creates a new frame spec covering the full available radius.
    pub fn new(size: Size, start_angle: f64, end_angle: f64) -> Self {
        Self {
            size,
            start_angle,
            end_angle,
            radius: RadialLength::Fraction(1.0),
            inner_radius: RadialLength::Fraction(0.0),
        }
    }

    /// Sets the outer radius.
    pub fn with_radius(mut self, radius: RadialLength) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the inner radius.
    pub fn with_inner_radius(mut self, inner_radius: RadialLength) -> Self {
        self.inner_radius = inner_radius;
        self
    }

    /// Resolves the radius configuration into a concrete frame.
    ///
    /// The resolved radii are clamped so that
    /// `0 <= inner_radius <= outer_radius <= bound_radius`.
    pub fn instantiate(&self) -> PolarFrame {
        let bound_radius = self.size.bound_radius();
        let outer_radius = self
            .radius
            .resolve(bound_radius)
            .clamp(0.0, bound_radius);
        let inner_radius = self
            .inner_radius
            .resolve(bound_radius)
            .clamp(0.0, outer_radius);
        PolarFrame {
            start_angle: self.start_angle,
            end_angle: self.end_angle,
            inner_radius,
            outer_radius,
            bound_radius,
        }
    }
}

/// A resolved polar frame (all lengths in pixels).
///
/// Pointer positions are [`Vec2`] offsets from the chart center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarFrame {
    start_angle: f64,
    end_angle: f64,
    inner_radius: f64,
    outer_radius: f64,
    bound_radius: f64,
}

impl PolarFrame {
    /// Start angle of the angular span, in degrees.
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// End angle of the angular span, in degrees.
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Width of the directed angular span, in degrees.
    pub fn sweep(&self) -> f64 {
        angular_sweep(self.start_angle, self.end_angle)
    }

    /// Resolved inner radius, in pixels.
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Resolved outer radius, in pixels.
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// The radius the configuration was resolved against
    /// (`min(width, height) / 2`).
    pub fn bound_radius(&self) -> f64 {
        self.bound_radius
    }

    /// Raw angle of a pointer offset, in degrees.
    ///
    /// The center itself maps to 0° (no NaN for a zero-length offset).
    pub fn angle_of(&self, point: Vec2) -> f64 {
        point.y.atan2(point.x).to_degrees()
    }

    /// Euclidean distance of a pointer offset from the center, in pixels.
    pub fn distance_of(&self, point: Vec2) -> f64 {
        point.x.hypot(point.y)
    }

    /// Fits an angle into the frame's angular span (see
    /// [`fit_angle_to_range`]).
    pub fn fit_angle(&self, angle: f64) -> f64 {
        fit_angle_to_range(angle, self.start_angle, self.end_angle)
    }

    /// Whether a pointer offset counts as inside the frame.
    ///
    /// Accepts points up to [`HIT_TOLERANCE`] pixels beyond the bound radius.
    pub fn fits_to_bounds(&self, point: Vec2) -> bool {
        self.distance_of(point) <= self.bound_radius + HIT_TOLERANCE
    }

    /// The pointer's fractional position along the angular span.
    ///
    /// `0` at `start_angle`, `1` at the span end. A degenerate span
    /// (`sweep == 0`) always yields 0.
    pub fn azimuth_fraction(&self, point: Vec2) -> f64 {
        let sweep = self.sweep();
        if sweep == 0.0 {
            return 0.0;
        }
        (self.fit_angle(self.angle_of(point)) - self.start_angle) / sweep
    }

    /// The pointer's fractional position between the inner and outer radius,
    /// clamped to `[0, 1]`.
    ///
    /// An empty annulus (`inner_radius == outer_radius`) always yields 0.
    pub fn radial_fraction(&self, point: Vec2) -> f64 {
        let depth = self.outer_radius - self.inner_radius;
        if depth == 0.0 {
            return 0.0;
        }
        fit_to_range(
            (self.distance_of(point) - self.inner_radius) / depth,
            0.0,
            1.0,
        )
    }
}

/// Clamps `value` into `[lo, hi]`.
///
/// Unlike `f64::clamp` this tolerates an empty interval (`lo > hi` returns
/// `hi`) instead of panicking.
pub fn fit_to_range(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}
