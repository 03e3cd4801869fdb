// Copyright 2025 the Voltaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Current arrows on the wire loop.

use kurbo::{BezPath, Point};

use voltaic_model::{CircuitConfig, ValueRange};

/// Arrow height at the smallest reachable current.
const MIN_ARROW_HEIGHT: f64 = 12.0;

/// Arrow height at the largest reachable current.
const MAX_ARROW_HEIGHT: f64 = 100.0;

// Arrow proportions relative to the height.
const SHAFT_WIDTH: f64 = 0.3;
const HEAD_LENGTH: f64 = 0.4;
const HEAD_WIDTH: f64 = 0.7;

/// Which way an arrow points along its vertical wire segment.
///
/// Conventional current flows clockwise around the loop: up the left
/// segment, down the right one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArrowDirection {
    /// Tip above the anchor.
    Up,
    /// Tip below the anchor.
    Down,
}

/// The interval arrow heights are drawn from.
#[must_use]
pub fn arrow_height_range() -> ValueRange {
    ValueRange::new(MIN_ARROW_HEIGHT, MAX_ARROW_HEIGHT)
}

/// Maps a current onto an arrow height.
///
/// Linear over the configuration's reachable current interval (see
/// [`CircuitConfig::current_range`]): the smallest reachable current draws
/// the smallest arrow, the largest the biggest.
///
/// # Example
///
/// ```rust
/// use voltaic_model::CircuitConfig;
/// use voltaic_scene::{arrow_height, arrow_height_range};
///
/// let config = CircuitConfig::default();
/// let h = arrow_height(9.0, &config);
/// assert!(arrow_height_range().contains(h));
/// assert!(arrow_height(990.0, &config) > h);
/// ```
#[must_use]
pub fn arrow_height(current: f64, config: &CircuitConfig) -> f64 {
    let t = config.current_range().normalize(current);
    arrow_height_range().denormalize(t)
}

/// One current arrow: a filled, axis-aligned polygon on a wire segment.
#[derive(Clone, Debug)]
pub struct CurrentArrow {
    /// The arrow outline, centered on the anchor.
    pub path: BezPath,
    /// Overall arrow length along the wire, tip to tail.
    pub height: f64,
    /// Which way the tip points.
    pub direction: ArrowDirection,
}

impl CurrentArrow {
    /// Builds an arrow of the given height centered on `anchor`.
    #[must_use]
    pub fn new(anchor: Point, height: f64, direction: ArrowDirection) -> Self {
        // Build pointing up, then mirror the y offsets for Down.
        let sign = match direction {
            ArrowDirection::Up => -1.0,
            ArrowDirection::Down => 1.0,
        };

        let half = height / 2.0;
        let shaft_half = SHAFT_WIDTH * height / 2.0;
        let head_half = HEAD_WIDTH * height / 2.0;
        let neck_y = half - HEAD_LENGTH * height;

        let at = |dx: f64, dy: f64| Point::new(anchor.x + dx, anchor.y + sign * dy);

        let mut path = BezPath::new();
        path.move_to(at(0.0, half)); // tip
        path.line_to(at(-head_half, neck_y));
        path.line_to(at(-shaft_half, neck_y));
        path.line_to(at(-shaft_half, -half)); // tail left
        path.line_to(at(shaft_half, -half)); // tail right
        path.line_to(at(shaft_half, neck_y));
        path.line_to(at(head_half, neck_y));
        path.close_path();

        Self {
            path,
            height,
            direction,
        }
    }

    /// Builds the pair of arrows for the vertical wire segments, sized for
    /// the given current: left pointing up, right pointing down.
    #[must_use]
    pub fn pair(anchors: [Point; 2], current: f64, config: &CircuitConfig) -> [Self; 2] {
        let height = arrow_height(current, config);
        let [left, right] = anchors;
        [
            Self::new(left, height, ArrowDirection::Up),
            Self::new(right, height, ArrowDirection::Down),
        ]
    }
}
