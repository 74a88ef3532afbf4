// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor interaction modes.

/// What a completed drag gesture means.
///
/// `X` refers to the angular axis, `Y` to the radial axis. `Zoom*` modes are
/// expected to be consumed immediately (the chart zooms and the drawn region
/// disappears); `Select*` modes keep the drawn region visible after the
/// pointer is released.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorBehavior {
    /// The cursor tracks the pointer but drags select nothing.
    None,
    /// Zoom the angular axis.
    #[default]
    ZoomX,
    /// Zoom the radial axis.
    ZoomY,
    /// Zoom both axes.
    ZoomXY,
    /// Select a sub-span of the angular axis.
    SelectX,
    /// Select a sub-span of the radial axis.
    SelectY,
    /// Select on both axes.
    SelectXY,
}

impl CursorBehavior {
    /// Whether a gesture in this mode produces an angular range.
    pub fn selects_angle(self) -> bool {
        matches!(
            self,
            Self::ZoomX | Self::SelectX | Self::ZoomXY | Self::SelectXY
        )
    }

    /// Whether a gesture in this mode produces a radial range.
    pub fn selects_radius(self) -> bool {
        matches!(
            self,
            Self::ZoomY | Self::SelectY | Self::ZoomXY | Self::SelectXY
        )
    }

    /// Whether the drawn selection region stays visible after pointer-up.
    pub fn retains_selection(self) -> bool {
        matches!(self, Self::SelectX | Self::SelectY | Self::SelectXY)
    }
}
