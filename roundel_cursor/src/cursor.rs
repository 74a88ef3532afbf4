// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The radar cursor: gesture tracking and range selection in polar space.
//!
//! A [`RadarCursor`] consumes pointer events (down → moves → up, all as
//! offsets from the chart center) and produces:
//! - crosshair paths following the pointer (a radial line at the pointer's
//!   angle, an arc across the span at the pointer's radius),
//! - a selection region while a drag gesture is active, shaped by the
//!   configured [`CursorBehavior`],
//! - a pair of normalized `[0, 1]` ranges when the gesture completes, for
//!   axes/series to zoom or filter by.
//!
//! Events are expected in order for a single gesture; the cursor never
//! reorders or coalesces them. All state is owned by one cursor instance.

extern crate alloc;

use kurbo::{BezPath, Vec2};

use crate::angle::round_to;
use crate::behavior::CursorBehavior;
use crate::frame::{PolarFrame, PolarFrameSpec, fit_to_range};
use crate::path;
use crate::style::CursorStyle;

/// A sorted fractional sub-range of one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedRange {
    /// Lower fractional endpoint.
    pub start: f64,
    /// Upper fractional endpoint.
    pub end: f64,
}

impl NormalizedRange {
    /// The full axis.
    pub const FULL: Self = Self {
        start: 0.0,
        end: 1.0,
    };

    /// Creates a range from two raw endpoints, sorting them.
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// The fractional width of the range.
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

impl Default for NormalizedRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// The normalized ranges produced by a completed gesture.
///
/// Axes the behavior does not select keep the `[0, 1]` default.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureRanges {
    /// Angular-axis range.
    pub x: NormalizedRange,
    /// Radial-axis range.
    pub y: NormalizedRange,
}

/// Drawable cursor state after a pointer move.
///
/// Paths are in frame-local pixel coordinates (chart center at the origin);
/// pair them with the cursor's [`CursorStyle`] when rendering. `None` means
/// the corresponding visual is currently absent.
#[derive(Clone, Debug, Default)]
pub struct CursorOverlay {
    /// Radial crosshair line at the pointer's angle.
    pub angle_line: Option<BezPath>,
    /// Arc crosshair across the span at the pointer's radius.
    pub radius_line: Option<BezPath>,
    /// Drag-selection region (filled).
    pub selection: Option<BezPath>,
}

/// Configuration for a [`RadarCursor`].
#[derive(Clone, Debug, PartialEq)]
pub struct RadarCursorSpec {
    /// The polar frame the cursor operates in.
    pub frame: PolarFrameSpec,
    /// What drag gestures mean.
    pub behavior: CursorBehavior,
    /// Overlay styling.
    pub style: CursorStyle,
}

impl RadarCursorSpec {
    /// Creates a cursor spec with the default behavior ([`CursorBehavior::ZoomX`])
    /// and styling.
    pub fn new(frame: PolarFrameSpec) -> Self {
        Self {
            frame,
            behavior: CursorBehavior::default(),
            style: CursorStyle::default(),
        }
    }

    /// Sets the gesture behavior.
    pub fn with_behavior(mut self, behavior: CursorBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Sets the overlay styling.
    pub fn with_style(mut self, style: CursorStyle) -> Self {
        self.style = style;
        self
    }

    /// Instantiates a cursor with a resolved frame.
    pub fn instantiate(&self) -> RadarCursor {
        RadarCursor {
            frame: self.frame.instantiate(),
            behavior: self.behavior,
            style: self.style.clone(),
            down: None,
            prev_angle: 0.0,
            selection: None,
            x_range: NormalizedRange::FULL,
            y_range: NormalizedRange::FULL,
        }
    }
}

/// Gesture-start state, captured on pointer-down.
#[derive(Clone, Copy, Debug)]
struct DownState {
    /// Down angle, fitted to the frame's span.
    angle: f64,
    /// Raw distance of the down point from the center.
    distance: f64,
}

/// Tracks a pointer gesture in a polar frame and derives selection geometry
/// and normalized zoom/select ranges.
#[derive(Clone, Debug)]
pub struct RadarCursor {
    frame: PolarFrame,
    behavior: CursorBehavior,
    style: CursorStyle,
    down: Option<DownState>,
    prev_angle: f64,
    selection: Option<BezPath>,
    x_range: NormalizedRange,
    y_range: NormalizedRange,
}

impl RadarCursor {
    /// The resolved polar frame.
    pub fn frame(&self) -> &PolarFrame {
        &self.frame
    }

    /// The configured gesture behavior.
    pub fn behavior(&self) -> CursorBehavior {
        self.behavior
    }

    /// The configured overlay styling.
    pub fn style(&self) -> &CursorStyle {
        &self.style
    }

    /// Whether a gesture is currently active (pointer is down).
    pub fn is_gesture_active(&self) -> bool {
        self.down.is_some()
    }

    /// The current selection region, if one is drawn.
    ///
    /// For `Select*` behaviors this persists after pointer-up until the next
    /// gesture or [`RadarCursor::cancel`].
    pub fn selection_path(&self) -> Option<&BezPath> {
        self.selection.as_ref()
    }

    /// The angular range produced by the last completed gesture.
    pub fn x_range(&self) -> NormalizedRange {
        self.x_range
    }

    /// The radial range produced by the last completed gesture.
    pub fn y_range(&self) -> NormalizedRange {
        self.y_range
    }

    /// Starts a gesture at `point` (offset from the chart center).
    ///
    /// Returns whether a gesture began: points beyond the frame's hit
    /// tolerance are ignored. Starting a gesture clears any retained
    /// selection.
    pub fn pointer_down(&mut self, point: Vec2) -> bool {
        if !self.frame.fits_to_bounds(point) {
            return false;
        }
        let angle = self.frame.fit_angle(self.frame.angle_of(point));
        self.down = Some(DownState {
            angle,
            distance: self.frame.distance_of(point),
        });
        self.prev_angle = angle;
        self.selection = None;
        true
    }

    /// Updates the cursor for a pointer position and returns the overlay to
    /// draw.
    ///
    /// Safe to call with or without an active gesture; without one, only the
    /// crosshairs move (plus any selection retained from a `Select*`
    /// gesture).
    pub fn pointer_move(&mut self, point: Vec2) -> CursorOverlay {
        let frame = self.frame;
        let angle = frame.fit_angle(frame.angle_of(point));

        let angle_line = (frame.outer_radius() > 0.0)
            .then(|| path::radial_line(angle, frame.inner_radius(), frame.outer_radius()));
        let cross_radius = fit_to_range(frame.distance_of(point), 0.0, frame.bound_radius());
        let radius_line = Some(path::span_arc(
            cross_radius,
            frame.start_angle(),
            frame.end_angle(),
            self.style.tolerance,
        ));

        self.update_selection(point);

        CursorOverlay {
            angle_line,
            radius_line,
            selection: self.selection.clone(),
        }
    }

    /// Ends the gesture at `point` and returns the normalized ranges.
    ///
    /// Returns `None` when no gesture is active. Axes the behavior does not
    /// select come back as the full `[0, 1]` range. `Zoom*` behaviors clear
    /// the drawn selection (the zoom replaces it visually); `Select*`
    /// behaviors retain it.
    pub fn pointer_up(&mut self, point: Vec2) -> Option<GestureRanges> {
        let down = self.down.take()?;
        let frame = self.frame;

        let mut x = NormalizedRange::FULL;
        let mut y = NormalizedRange::FULL;

        if self.behavior.selects_angle() {
            let sweep = frame.sweep();
            x = if sweep == 0.0 {
                NormalizedRange::new(0.0, 0.0)
            } else {
                let up_angle = frame.fit_angle(frame.angle_of(point));
                NormalizedRange::new(
                    round_to((down.angle - frame.start_angle()) / sweep, 5),
                    round_to((up_angle - frame.start_angle()) / sweep, 5),
                )
            };
        }

        if self.behavior.selects_radius() {
            let outer = frame.outer_radius();
            y = if outer == 0.0 {
                NormalizedRange::new(0.0, 0.0)
            } else {
                let down_radius = fit_to_range(down.distance, 0.0, outer);
                let up_radius = fit_to_range(frame.distance_of(point), 0.0, outer);
                NormalizedRange::new(
                    round_to(down_radius / outer, 5),
                    round_to(up_radius / outer, 5),
                )
            };
        }

        if !self.behavior.retains_selection() {
            self.selection = None;
        }
        self.x_range = x;
        self.y_range = y;
        Some(GestureRanges { x, y })
    }

    /// Cancels any active gesture and clears the selection region.
    pub fn cancel(&mut self) {
        self.down = None;
        self.selection = None;
    }

    /// A full-width angular fill: the ring slice of the hovered item,
    /// centered on the pointer's angle.
    ///
    /// `item_start_angle`/`item_end_angle` are the hovered item's boundary
    /// angles as reported by the consumer's axis; the slice keeps the item's
    /// angular width but follows the cursor.
    pub fn angle_band_path(
        &self,
        point: Vec2,
        item_start_angle: f64,
        item_end_angle: f64,
    ) -> BezPath {
        let frame = self.frame;
        let angle = frame.fit_angle(frame.angle_of(point));
        let fill_start = frame.fit_angle(item_start_angle);
        let fill_end = frame.fit_angle(item_end_angle);
        let mut arc = fill_end - fill_start;
        // Fitted angles are contiguous in [start, start + sweep], so an
        // apparently backwards arc means the item wraps past the span seam.
        if arc < 0.0 {
            arc += 360.0;
        }
        let start = angle - arc / 2.0;
        path::annular_sector(
            frame.inner_radius(),
            frame.outer_radius(),
            start,
            start + arc,
            self.style.tolerance,
        )
    }

    /// A full-width radial fill: the band between two item boundary radii
    /// across the whole span.
    pub fn radius_band_path(&self, radius_a: f64, radius_b: f64) -> BezPath {
        let frame = self.frame;
        let bound = frame.bound_radius();
        path::annular_band(
            fit_to_range(radius_a, 0.0, bound),
            fit_to_range(radius_b, 0.0, bound),
            frame.start_angle(),
            frame.end_angle(),
            self.style.tolerance,
        )
    }

    /// Recomputes the selection region for the current pointer position.
    fn update_selection(&mut self, point: Vec2) {
        let Some(down) = self.down else {
            return;
        };
        let frame = self.frame;
        let sweep = frame.sweep();
        let span_start = frame.start_angle();
        let span_end = span_start + sweep;

        let mut angle = frame.fit_angle(frame.angle_of(point));
        // Crossing the seam between the span ends shows up as a jump of more
        // than half the span in a single frame; snap to the boundary the
        // direction of travel implies instead of trusting the wrapped value.
        // Heuristic: a genuine sub-frame move of more than half the span is
        // indistinguishable from a seam crossing.
        if angle - self.prev_angle > sweep / 2.0 {
            angle = span_start;
        }
        if self.prev_angle - angle > sweep / 2.0 {
            angle = span_end;
        }
        self.prev_angle = angle;

        // A gesture that started outside the ring selects nothing.
        if down.distance >= frame.bound_radius() {
            return;
        }

        let tolerance = self.style.tolerance;
        let bound = frame.bound_radius();
        let down_radius = fit_to_range(down.distance, 0.0, bound);
        let radius = fit_to_range(frame.distance_of(point), 0.0, bound);

        self.selection = match self.behavior {
            CursorBehavior::None => None,
            CursorBehavior::ZoomX | CursorBehavior::SelectX => Some(path::annular_sector(
                frame.inner_radius(),
                frame.outer_radius(),
                down.angle,
                angle,
                tolerance,
            )),
            CursorBehavior::ZoomY | CursorBehavior::SelectY => Some(path::annular_band(
                down_radius,
                radius,
                span_start,
                span_end,
                tolerance,
            )),
            CursorBehavior::ZoomXY | CursorBehavior::SelectXY => Some(path::annular_sector(
                down_radius,
                radius,
                down.angle,
                angle,
                tolerance,
            )),
        };
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Shape;

    use crate::frame::{RadialLength, Size};

    use super::*;

    fn polar_at(angle_deg: f64, radius: f64) -> Vec2 {
        Vec2::from_angle(angle_deg.to_radians()) * radius
    }

    fn half_ring_cursor(behavior: CursorBehavior) -> RadarCursor {
        // 200x200 available → bound/outer radius 100, inner 20, span -90..90.
        let frame = PolarFrameSpec::new(Size::new(200.0, 200.0), -90.0, 90.0)
            .with_inner_radius(RadialLength::Px(20.0));
        RadarCursorSpec::new(frame)
            .with_behavior(behavior)
            .instantiate()
    }

    #[test]
    fn zoom_x_gesture_produces_the_expected_angular_range() {
        let mut cursor = half_ring_cursor(CursorBehavior::ZoomX);

        assert!(cursor.pointer_down(polar_at(0.0, 60.0)));
        let overlay = cursor.pointer_move(polar_at(45.0, 80.0));

        // The selection wedge spans angles 0..45 between radius 20 and 100.
        let bounds = overlay.selection.expect("selection drawn").bounding_box();
        assert!((bounds.x1 - 100.0).abs() < 1.0);
        assert!(bounds.y0 > -1.0);
        assert!((bounds.y1 - 100.0 * (45.0_f64).to_radians().sin()).abs() < 1.0);

        let ranges = cursor
            .pointer_up(polar_at(45.0, 80.0))
            .expect("gesture was active");
        // (0 - (-90)) / 180 and (45 - (-90)) / 180.
        assert_eq!(ranges.x, NormalizedRange::new(0.5, 0.75));
        assert_eq!(ranges.y, NormalizedRange::FULL);
        // Zoom behaviors hide the selection once the range is read.
        assert!(cursor.selection_path().is_none());
    }

    #[test]
    fn select_x_retains_the_selection_after_release() {
        let mut cursor = half_ring_cursor(CursorBehavior::SelectX);
        assert!(cursor.pointer_down(polar_at(-45.0, 50.0)));
        cursor.pointer_move(polar_at(45.0, 50.0));
        let ranges = cursor.pointer_up(polar_at(45.0, 50.0)).expect("active");
        assert_eq!(ranges.x, NormalizedRange::new(0.25, 0.75));
        assert!(cursor.selection_path().is_some());

        // The retained region still shows up in later overlays...
        let overlay = cursor.pointer_move(polar_at(80.0, 90.0));
        assert!(overlay.selection.is_some());

        // ...until cancelled or a new gesture starts.
        cursor.cancel();
        assert!(cursor.selection_path().is_none());
    }

    #[test]
    fn zoom_y_gesture_produces_the_expected_radial_range() {
        let frame = PolarFrameSpec::new(Size::new(200.0, 200.0), 0.0, 360.0);
        let mut cursor = RadarCursorSpec::new(frame)
            .with_behavior(CursorBehavior::ZoomY)
            .instantiate();

        assert!(cursor.pointer_down(polar_at(10.0, 40.0)));
        cursor.pointer_move(polar_at(200.0, 60.0));
        let ranges = cursor.pointer_up(polar_at(200.0, 80.0)).expect("active");
        assert_eq!(ranges.x, NormalizedRange::FULL);
        assert_eq!(ranges.y, NormalizedRange::new(0.4, 0.8));
    }

    #[test]
    fn ranges_are_sorted_regardless_of_drag_direction() {
        let mut cursor = half_ring_cursor(CursorBehavior::ZoomX);
        assert!(cursor.pointer_down(polar_at(45.0, 60.0)));
        let ranges = cursor.pointer_up(polar_at(0.0, 60.0)).expect("active");
        assert_eq!(ranges.x, NormalizedRange::new(0.5, 0.75));
    }

    #[test]
    fn no_gesture_means_no_ranges_and_no_selection() {
        let mut cursor = half_ring_cursor(CursorBehavior::ZoomX);
        let overlay = cursor.pointer_move(polar_at(10.0, 50.0));
        assert!(overlay.angle_line.is_some());
        assert!(overlay.radius_line.is_some());
        assert!(overlay.selection.is_none());
        assert!(cursor.pointer_up(polar_at(10.0, 50.0)).is_none());
    }

    #[test]
    fn down_outside_the_hit_tolerance_is_ignored() {
        let mut cursor = half_ring_cursor(CursorBehavior::ZoomX);
        // Bound radius 100 + 10 tolerance; 115 is out.
        assert!(!cursor.pointer_down(polar_at(0.0, 115.0)));
        assert!(!cursor.is_gesture_active());
        // 105 is still in.
        assert!(cursor.pointer_down(polar_at(0.0, 105.0)));
        assert!(cursor.is_gesture_active());
    }

    #[test]
    fn seam_crossing_snaps_to_the_implied_boundary() {
        // Full-turn span: the seam sits at 0°/360°.
        let frame = PolarFrameSpec::new(Size::new(200.0, 200.0), 0.0, 360.0);
        let mut cursor = RadarCursorSpec::new(frame)
            .with_behavior(CursorBehavior::ZoomX)
            .instantiate();

        assert!(cursor.pointer_down(polar_at(10.0, 60.0)));
        // Crossing the seam: the raw fitted angle jumps 10° → 350°, far more
        // than half the span, so the selection must clamp at the span start
        // instead of sweeping almost a full turn.
        let overlay = cursor.pointer_move(polar_at(350.0, 60.0));
        let bounds = overlay.selection.expect("selection drawn").bounding_box();
        assert!(bounds.y1 < 25.0, "selection leaked across the seam");
        assert!(bounds.y0 > -1.0);
    }

    #[test]
    fn degenerate_span_yields_zero_fractions() {
        let frame = PolarFrameSpec::new(Size::new(200.0, 200.0), 45.0, 45.0);
        let mut cursor = RadarCursorSpec::new(frame)
            .with_behavior(CursorBehavior::ZoomX)
            .instantiate();
        assert!(cursor.pointer_down(polar_at(45.0, 50.0)));
        let ranges = cursor.pointer_up(polar_at(100.0, 50.0)).expect("active");
        assert_eq!(ranges.x, NormalizedRange::new(0.0, 0.0));
    }

    #[test]
    fn behavior_none_tracks_but_selects_nothing() {
        let mut cursor = half_ring_cursor(CursorBehavior::None);
        assert!(cursor.pointer_down(polar_at(0.0, 50.0)));
        let overlay = cursor.pointer_move(polar_at(30.0, 70.0));
        assert!(overlay.selection.is_none());
        let ranges = cursor.pointer_up(polar_at(30.0, 70.0)).expect("active");
        assert_eq!(ranges.x, NormalizedRange::FULL);
        assert_eq!(ranges.y, NormalizedRange::FULL);
    }

    #[test]
    fn wrapping_span_keeps_the_gesture_continuous() {
        // 350° → 10°: a 20° span crossing 0°.
        let frame = PolarFrameSpec::new(Size::new(200.0, 200.0), 350.0, 10.0);
        let mut cursor = RadarCursorSpec::new(frame)
            .with_behavior(CursorBehavior::ZoomX)
            .instantiate();

        assert!(cursor.pointer_down(polar_at(352.0, 60.0)));
        cursor.pointer_move(polar_at(355.0, 60.0));
        cursor.pointer_move(polar_at(5.0, 60.0));
        let ranges = cursor.pointer_up(polar_at(5.0, 60.0)).expect("active");
        // down = (352 - 350) / 20, up = (365 - 350) / 20.
        assert_eq!(ranges.x, NormalizedRange::new(0.1, 0.75));
    }

    #[test]
    fn angle_band_keeps_the_item_width_centered_on_the_pointer() {
        let cursor = half_ring_cursor(CursorBehavior::None);
        // Item boundaries 40°..60° (20° wide), pointer at 30°: the band
        // follows the pointer, so it covers 20°..40° between radii 20..100.
        let path = cursor.angle_band_path(polar_at(30.0, 50.0), 40.0, 60.0);
        let bounds = path.bounding_box();
        assert!((bounds.x1 - 100.0 * (20.0_f64).to_radians().cos()).abs() < 1.0);
        assert!((bounds.y1 - 100.0 * (40.0_f64).to_radians().sin()).abs() < 1.0);
        assert!((bounds.y0 - 20.0 * (20.0_f64).to_radians().sin()).abs() < 1.0);
        assert!((bounds.x0 - 20.0 * (40.0_f64).to_radians().cos()).abs() < 1.0);
    }

    #[test]
    fn angle_band_survives_an_item_astride_the_span_seam() {
        // 350° → 10°: both the span and the item wrap through 0°.
        let frame = PolarFrameSpec::new(Size::new(200.0, 200.0), 350.0, 10.0);
        let cursor = RadarCursorSpec::new(frame).instantiate();

        // Item 352°..8° is 16° wide; centered on the pointer at 0° it stays a
        // thin wedge around the positive x axis rather than sweeping the
        // complement of the turn.
        let path = cursor.angle_band_path(polar_at(0.0, 60.0), 352.0, 8.0);
        let bounds = path.bounding_box();
        assert!((bounds.x1 - 100.0).abs() < 0.5);
        let half = 100.0 * (8.0_f64).to_radians().sin();
        assert!((bounds.y1 - half).abs() < 1.0, "band leaked past the seam");
        assert!((bounds.y0 - -half).abs() < 1.0);
    }

    #[test]
    fn radius_band_clamps_to_the_ring_and_spans_it() {
        let cursor = half_ring_cursor(CursorBehavior::None);
        // 150 exceeds the 100 bound radius and must be clamped to it.
        let path = cursor.radius_band_path(60.0, 150.0);
        let bounds = path.bounding_box();
        assert!((bounds.x1 - 100.0).abs() < 0.5);
        assert!((bounds.y0 - -100.0).abs() < 0.5);
        assert!((bounds.y1 - 100.0).abs() < 0.5);
        // Half annulus between radii 60 and 100.
        let expected = core::f64::consts::PI / 2.0 * (100.0 * 100.0 - 60.0 * 60.0);
        assert!((path.area().abs() - expected).abs() < 50.0);
    }

    #[test]
    fn select_y_draws_a_full_span_band() {
        let mut cursor = half_ring_cursor(CursorBehavior::SelectY);
        assert!(cursor.pointer_down(polar_at(0.0, 40.0)));
        let overlay = cursor.pointer_move(polar_at(30.0, 80.0));

        // The band covers radii 40..80 across the whole -90..90 span.
        let bounds = overlay.selection.expect("selection drawn").bounding_box();
        assert!((bounds.x1 - 80.0).abs() < 0.5);
        assert!((bounds.y0 - -80.0).abs() < 0.5);
        assert!((bounds.y1 - 80.0).abs() < 0.5);

        let ranges = cursor.pointer_up(polar_at(30.0, 80.0)).expect("active");
        assert_eq!(ranges.x, NormalizedRange::FULL);
        assert_eq!(ranges.y, NormalizedRange::new(0.4, 0.8));
        assert!(cursor.selection_path().is_some());
    }

    #[test]
    fn select_xy_draws_a_region_bounded_on_both_axes() {
        let mut cursor = half_ring_cursor(CursorBehavior::SelectXY);
        assert!(cursor.pointer_down(polar_at(0.0, 40.0)));
        let overlay = cursor.pointer_move(polar_at(45.0, 80.0));

        // The wedge is cut in both directions: angles 0..45, radii 40..80.
        let bounds = overlay.selection.expect("selection drawn").bounding_box();
        assert!((bounds.x1 - 80.0).abs() < 0.5);
        assert!((bounds.y1 - 80.0 * (45.0_f64).to_radians().sin()).abs() < 1.0);
        assert!(bounds.y0 > -1.0);
        assert!((bounds.x0 - 40.0 * (45.0_f64).to_radians().cos()).abs() < 1.0);

        let ranges = cursor.pointer_up(polar_at(45.0, 80.0)).expect("active");
        assert_eq!(ranges.x, NormalizedRange::new(0.5, 0.75));
        assert_eq!(ranges.y, NormalizedRange::new(0.4, 0.8));
        assert!(cursor.selection_path().is_some());
    }
}
