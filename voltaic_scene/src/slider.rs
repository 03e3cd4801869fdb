// Copyright 2025 the Voltaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider input mapping: view-space positions to model values.
//!
//! ## Usage
//!
//! 1) Build a [`SliderTrack`] from the frame's slider span and the value
//!    range it controls.
//! 2) On pointer down over the thumb, call [`SliderDrag::start`].
//! 3) On each move event, call [`SliderDrag::update`] and feed the returned
//!    value into the model setter; the model clamps and notifies from there.
//! 4) On pointer up, call [`SliderDrag::end`].
//!
//! Keyboard input bypasses the drag state entirely and uses
//! [`SliderTrack::step_up`] / [`SliderTrack::step_down`].

use core::ops::Range;

use voltaic_model::ValueRange;

/// Maps a 1D view-space span onto a value range.
///
/// The span start maps to the range minimum. For a vertical slider the
/// start is conventionally the *larger* y (the bottom), so dragging upward
/// raises the value; inverted spans are handled by the math, not special
/// cases.
///
/// # Example
///
/// ```rust
/// use voltaic_model::ValueRange;
/// use voltaic_scene::SliderTrack;
///
/// // A vertical track: y 400 (bottom, min) up to y 100 (top, max).
/// let track = SliderTrack::new(400.0..100.0, ValueRange::new(0.1, 9.9), 0.1);
/// assert_eq!(track.value_at(400.0), 0.1);
/// assert_eq!(track.value_at(100.0), 9.9);
/// assert_eq!(track.position_of(0.1), 400.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SliderTrack {
    span: Range<f64>,
    range: ValueRange,
    step: f64,
}

impl SliderTrack {
    /// Creates a track over `span` controlling `range`, with `step` as the
    /// keyboard increment.
    #[must_use]
    pub fn new(span: Range<f64>, range: ValueRange, step: f64) -> Self {
        debug_assert!(
            span.start != span.end,
            "slider span must not be degenerate"
        );
        debug_assert!(step > 0.0, "slider step must be positive");
        Self { span, range, step }
    }

    /// Returns the view-space span.
    #[must_use]
    pub fn span(&self) -> Range<f64> {
        self.span.clone()
    }

    /// Returns the controlled value range.
    #[must_use]
    #[inline]
    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Returns the keyboard step increment.
    #[must_use]
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the value at a view-space position, clamped at the track
    /// ends.
    #[must_use]
    pub fn value_at(&self, position: f64) -> f64 {
        let t = (position - self.span.start) / (self.span.end - self.span.start);
        self.range.denormalize(t)
    }

    /// Returns the view-space position of a value, clamped into the range.
    #[must_use]
    pub fn position_of(&self, value: f64) -> f64 {
        let t = self.range.normalize(value);
        self.span.start + t * (self.span.end - self.span.start)
    }

    /// Returns `value` raised by one step, clamped into the range.
    #[must_use]
    pub fn step_up(&self, value: f64) -> f64 {
        self.range.clamp(value + self.step)
    }

    /// Returns `value` lowered by one step, clamped into the range.
    #[must_use]
    pub fn step_down(&self, value: f64) -> f64 {
        self.range.clamp(value - self.step)
    }
}

/// Tracks one slider drag across move events.
///
/// # Example
///
/// ```rust
/// use voltaic_model::ValueRange;
/// use voltaic_scene::{SliderDrag, SliderTrack};
///
/// let track = SliderTrack::new(400.0..100.0, ValueRange::new(0.1, 9.9), 0.1);
/// let mut drag = SliderDrag::default();
///
/// drag.start(250.0);
/// assert!(drag.is_dragging());
///
/// let value = drag.update(100.0, &track).unwrap();
/// assert_eq!(value, 9.9);
///
/// drag.end();
/// assert_eq!(drag.update(400.0, &track), None);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SliderDrag {
    /// Position where the drag started, if one is active.
    pub start_pos: Option<f64>,
    /// Last position seen during the drag.
    pub last_pos: Option<f64>,
}

impl SliderDrag {
    /// Starts tracking a drag from the given position.
    pub fn start(&mut self, position: f64) {
        self.start_pos = Some(position);
        self.last_pos = Some(position);
    }

    /// Updates the drag with a new position, returning the track value
    /// there, or `None` if no drag is active.
    pub fn update(&mut self, position: f64, track: &SliderTrack) -> Option<f64> {
        if self.start_pos.is_none() {
            return None;
        }
        self.last_pos = Some(position);
        Some(track.value_at(position))
    }

    /// Returns the total view-space travel since the drag started.
    #[must_use]
    pub fn total_travel(&self) -> Option<f64> {
        match (self.start_pos, self.last_pos) {
            (Some(start), Some(last)) => Some(last - start),
            _ => None,
        }
    }

    /// Ends the drag and resets state.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voltage_track() -> SliderTrack {
        SliderTrack::new(400.0..100.0, ValueRange::new(0.1, 9.9), 0.1)
    }

    #[test]
    fn ends_map_to_range_bounds() {
        let track = voltage_track();
        assert_eq!(track.value_at(400.0), 0.1);
        assert_eq!(track.value_at(100.0), 9.9);
        assert_eq!(track.position_of(0.1), 400.0);
        assert_eq!(track.position_of(9.9), 100.0);
    }

    #[test]
    fn value_position_round_trips() {
        let track = voltage_track();
        for value in [0.1, 1.0, 4.5, 7.7, 9.9] {
            let recovered = track.value_at(track.position_of(value));
            assert!((recovered - value).abs() < 1e-9);
        }
    }

    #[test]
    fn positions_outside_the_track_clamp() {
        let track = voltage_track();
        assert_eq!(track.value_at(500.0), 0.1);
        assert_eq!(track.value_at(0.0), 9.9);
    }

    #[test]
    fn stepping_clamps_at_the_ends() {
        let track = voltage_track();
        assert!((track.step_up(4.5) - 4.6).abs() < 1e-9);
        assert!((track.step_down(4.5) - 4.4).abs() < 1e-9);
        assert_eq!(track.step_up(9.9), 9.9);
        assert_eq!(track.step_down(0.1), 0.1);
    }

    #[test]
    fn forward_spans_work_too() {
        let track = SliderTrack::new(0.0..300.0, ValueRange::new(10.0, 1000.0), 1.0);
        assert_eq!(track.value_at(0.0), 10.0);
        assert_eq!(track.value_at(300.0), 1000.0);
        assert!((track.value_at(150.0) - 505.0).abs() < 1e-9);
    }

    #[test]
    fn drag_lifecycle() {
        let track = voltage_track();
        let mut drag = SliderDrag::default();

        assert!(!drag.is_dragging());
        assert_eq!(drag.update(200.0, &track), None);
        assert_eq!(drag.total_travel(), None);

        drag.start(250.0);
        assert!(drag.is_dragging());

        let value = drag.update(400.0, &track).unwrap();
        assert_eq!(value, 0.1);
        assert_eq!(drag.total_travel(), Some(150.0));

        drag.end();
        assert!(!drag.is_dragging());
        assert_eq!(drag.update(100.0, &track), None);
    }
}
