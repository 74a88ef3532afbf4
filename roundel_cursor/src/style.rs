// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor overlay styling.

use peniko::Brush;
use peniko::color::palette::css;

/// A paint + width pair for stroked paths (crosshair lines).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in pixels.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::GRAY, 1.0)
    }
}

/// Styling for the cursor's crosshair lines and selection region.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorStyle {
    /// Stroke style for both crosshair lines.
    pub line: StrokeStyle,
    /// Fill paint for the drag-selection region.
    pub selection_fill: Brush,
    /// Curve flattening tolerance for generated paths.
    pub tolerance: f64,
}

impl Default for CursorStyle {
    fn default() -> Self {
        Self {
            line: StrokeStyle::default(),
            selection_fill: Brush::Solid(css::GRAY.with_alpha(77.0 / 255.0)),
            tolerance: 0.1,
        }
    }
}
