// Copyright 2025 the Voltaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proportional placement of the scene parts.

use core::ops::Range;

use kurbo::{Point, Rect, Size};

/// Default frame size, in view units.
pub(crate) const DEFAULT_FRAME_SIZE: Size = Size::new(768.0, 504.0);

// Placement fractions of the frame. The circuit loop sits in the lower
// left, the formula above it, the readout and the two sliders on the right.
const FORMULA_X: Range<f64> = 0.04..0.58;
const FORMULA_Y: Range<f64> = 0.06..0.38;
const WIRE_X: Range<f64> = 0.06..0.64;
const WIRE_Y: Range<f64> = 0.50..0.92;
const READOUT_X: Range<f64> = 0.66..0.94;
const READOUT_Y: Range<f64> = 0.08..0.24;
const SLIDER_Y: Range<f64> = 0.88..0.34;
const VOLTAGE_SLIDER_X: f64 = 0.74;
const RESISTANCE_SLIDER_X: f64 = 0.88;

const BATTERY_ORIGIN_X: f64 = 0.16;
const BATTERY_CELL_WIDTH: f64 = 0.105;
const BATTERY_CELL_HEIGHT: f64 = 0.115;
const RESISTOR_WIDTH: f64 = 0.30;
const RESISTOR_HEIGHT: f64 = 0.09;

/// Placement of every scene part within a frame.
///
/// All boxes are computed from the frame size via fixed proportions, so the
/// scene scales uniformly. The wire loop is traversed clockwise: the
/// battery row sits on the top segment, the resistor on the bottom one, and
/// the current arrows on the two vertical segments.
///
/// # Example
///
/// ```rust
/// use kurbo::Size;
/// use voltaic_scene::SceneFrame;
///
/// let frame = SceneFrame::new(Size::new(768.0, 504.0));
/// // The formula sits above the wire loop.
/// assert!(frame.formula_box.y1 <= frame.wire_loop.y0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SceneFrame {
    /// The whole frame.
    pub bounds: Rect,
    /// The rectangular wire loop the circuit is drawn along.
    pub wire_loop: Rect,
    /// Top-left corner of the first battery cell, on the top wire segment.
    pub battery_origin: Point,
    /// Size of one full battery cell.
    pub battery_cell_size: Size,
    /// The resistor body, centered on the bottom wire segment.
    pub resistor_body: Rect,
    /// Anchors for the two current arrows, on the vertical wire segments.
    pub arrow_anchors: [Point; 2],
    /// The V = I·R formula box.
    pub formula_box: Rect,
    /// The current readout box.
    pub readout_box: Rect,
    /// Horizontal position of the voltage slider.
    pub voltage_slider_x: f64,
    /// Horizontal position of the resistance slider.
    pub resistance_slider_x: f64,
    /// Vertical span of both slider tracks. The span start maps to the
    /// range minimum; it is below the end because view y grows downward.
    pub slider_span: Range<f64>,
}

impl SceneFrame {
    /// Computes the placement for a frame of the given size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        let bounds = size.to_rect();
        let wire_loop = fraction_rect(bounds, &WIRE_X, &WIRE_Y);
        let mid_y = wire_loop.center().y;

        Self {
            bounds,
            wire_loop,
            battery_origin: Point::new(
                wire_loop.x0 + BATTERY_ORIGIN_X * wire_loop.width(),
                wire_loop.y0 - 0.5 * BATTERY_CELL_HEIGHT * size.height,
            ),
            battery_cell_size: Size::new(
                BATTERY_CELL_WIDTH * wire_loop.width(),
                BATTERY_CELL_HEIGHT * size.height,
            ),
            resistor_body: Rect::from_center_size(
                Point::new(wire_loop.center().x, wire_loop.y1),
                Size::new(
                    RESISTOR_WIDTH * wire_loop.width(),
                    RESISTOR_HEIGHT * size.height,
                ),
            ),
            arrow_anchors: [
                Point::new(wire_loop.x0, mid_y),
                Point::new(wire_loop.x1, mid_y),
            ],
            formula_box: fraction_rect(bounds, &FORMULA_X, &FORMULA_Y),
            readout_box: fraction_rect(bounds, &READOUT_X, &READOUT_Y),
            voltage_slider_x: VOLTAGE_SLIDER_X * size.width,
            resistance_slider_x: RESISTANCE_SLIDER_X * size.width,
            slider_span: (SLIDER_Y.start * size.height)..(SLIDER_Y.end * size.height),
        }
    }
}

impl Default for SceneFrame {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_SIZE)
    }
}

fn fraction_rect(bounds: Rect, x: &Range<f64>, y: &Range<f64>) -> Rect {
    Rect::new(
        bounds.x0 + x.start * bounds.width(),
        bounds.y0 + y.start * bounds.height(),
        bounds.x0 + x.end * bounds.width(),
        bounds.y0 + y.end * bounds.height(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_stay_inside_the_frame() {
        let frame = SceneFrame::default();
        assert!(frame.bounds.union(frame.wire_loop) == frame.bounds);
        assert!(frame.bounds.union(frame.formula_box) == frame.bounds);
        assert!(frame.bounds.union(frame.readout_box) == frame.bounds);
        assert!(frame.bounds.union(frame.resistor_body) == frame.bounds);
    }

    #[test]
    fn battery_sits_on_the_top_segment() {
        let frame = SceneFrame::default();
        let cell_mid_y = frame.battery_origin.y + frame.battery_cell_size.height / 2.0;
        assert!((cell_mid_y - frame.wire_loop.y0).abs() < 1e-9);
        assert!(frame.battery_origin.x > frame.wire_loop.x0);
    }

    #[test]
    fn resistor_straddles_the_bottom_segment() {
        let frame = SceneFrame::default();
        assert!((frame.resistor_body.center().y - frame.wire_loop.y1).abs() < 1e-9);
    }

    #[test]
    fn arrows_anchor_on_the_vertical_segments() {
        let frame = SceneFrame::default();
        let [left, right] = frame.arrow_anchors;
        assert_eq!(left.x, frame.wire_loop.x0);
        assert_eq!(right.x, frame.wire_loop.x1);
        assert_eq!(left.y, right.y);
    }

    #[test]
    fn slider_span_runs_bottom_to_top() {
        let frame = SceneFrame::default();
        // View y grows downward, so the minimum (span start) is the larger y.
        assert!(frame.slider_span.start > frame.slider_span.end);
        assert!(frame.voltage_slider_x < frame.resistance_slider_x);
    }

    #[test]
    fn scales_with_the_frame() {
        let small = SceneFrame::new(Size::new(384.0, 252.0));
        let large = SceneFrame::new(Size::new(768.0, 504.0));
        assert!((large.wire_loop.width() - 2.0 * small.wire_loop.width()).abs() < 1e-9);
        assert!(
            (large.battery_cell_size.height - 2.0 * small.battery_cell_size.height).abs() < 1e-9
        );
    }
}
