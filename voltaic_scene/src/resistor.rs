// Copyright 2025 the Voltaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resistor body with its resistance-depicting dot cloud.

use alloc::vec::Vec;

use kurbo::{Circle, Point, Rect, RoundedRect};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

use voltaic_model::ValueRange;

/// Dot count at the resistance range minimum.
pub const MIN_DOTS: usize = 3;

/// Dot count at the resistance range maximum.
pub const MAX_DOTS: usize = 270;

/// Radius of one dot.
pub const DOT_RADIUS: f64 = 2.0;

/// Corner radius of the resistor body.
const BODY_CORNER_RADIUS: f64 = 10.0;

/// Clearance between dots and the body edge, on top of the dot radius.
const DOT_MARGIN: f64 = 3.0;

/// Maps a resistance onto the dot count depicting it.
///
/// Linear over the configured resistance range: the range minimum shows
/// [`MIN_DOTS`], the maximum [`MAX_DOTS`]. More dots read as more material
/// for charge to collide with.
///
/// # Example
///
/// ```rust
/// use voltaic_model::ValueRange;
/// use voltaic_scene::{MAX_DOTS, MIN_DOTS, dot_count};
///
/// let range = ValueRange::new(10.0, 1000.0);
/// assert_eq!(dot_count(10.0, range), MIN_DOTS);
/// assert_eq!(dot_count(1000.0, range), MAX_DOTS);
/// ```
#[must_use]
pub fn dot_count(resistance: f64, range: ValueRange) -> usize {
    let t = range.normalize(resistance);
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "t is in [0, 1], so the scaled value fits comfortably"
    )]
    let extra = (t * ((MAX_DOTS - MIN_DOTS) as f64) + 0.5) as usize;
    MIN_DOTS + extra
}

/// The resistor body and its decorative dot cloud.
///
/// Dot placement is driven by a seedable generator: the same seed and
/// resistance always produce the same cloud, and with a fixed seed a higher
/// resistance extends the cloud without moving existing dots.
#[derive(Clone, Debug)]
pub struct Resistor {
    /// The rounded body outline.
    pub body: RoundedRect,
    /// The dots, uniformly placed inside the body with a margin.
    pub dots: Vec<Circle>,
}

impl Resistor {
    /// Builds the resistor for the given body rect and resistance.
    #[must_use]
    pub fn new(body: Rect, resistance: f64, range: ValueRange, seed: u64) -> Self {
        let count = dot_count(resistance, range);
        let inset = body.inset(-(DOT_MARGIN + DOT_RADIUS));

        let mut rng = SmallRng::seed_from_u64(seed);
        let mut dots = Vec::with_capacity(count);
        for _ in 0..count {
            let center = Point::new(
                rng.random_range(inset.x0..inset.x1),
                rng.random_range(inset.y0..inset.y1),
            );
            dots.push(Circle::new(center, DOT_RADIUS));
        }

        Self {
            body: body.to_rounded_rect(BODY_CORNER_RADIUS),
            dots,
        }
    }
}
