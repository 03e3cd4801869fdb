// Copyright 2025 the Voltaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accessibility prose: qualitative size descriptors and sentences.

use alloc::format;
use alloc::string::String;

use voltaic_model::{CircuitConfig, ValueRange};

use crate::arrows::{arrow_height, arrow_height_range};
use crate::readout::{format_current, format_resistance, format_voltage};

/// Qualitative arrow sizes, smallest first.
pub const SIZE_DESCRIPTORS: [&str; 7] = [
    "tiny",
    "very small",
    "small",
    "medium size",
    "large",
    "very large",
    "huge",
];

/// Heights above this multiple of the baseline always read as the last
/// descriptor.
const DEFAULT_THRESHOLD_MULTIPLE: f64 = 2.0;

/// Maps arrow heights onto the qualitative [`SIZE_DESCRIPTORS`].
///
/// The mapping is linear: the height interval maps onto the descriptor
/// indices, rounding to the nearest. One exception sits on top of that:
/// any height above `threshold_multiple × baseline` clamps to the last
/// descriptor, so dramatically oversized arrows always read as "huge"
/// regardless of where the linear map would land.
///
/// # Example
///
/// ```rust
/// use voltaic_scene::{SIZE_DESCRIPTORS, SizeDescriber};
///
/// let describer = SizeDescriber::default();
/// assert_eq!(describer.describe(12.0), SIZE_DESCRIPTORS[0]);
/// assert_eq!(describer.describe(100.0), "huge");
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SizeDescriber {
    heights: ValueRange,
    baseline: f64,
    threshold_multiple: f64,
}

impl SizeDescriber {
    /// Creates a describer over the given height interval.
    ///
    /// `baseline` is the reference height the threshold rule is relative
    /// to, conventionally the arrow height at the stock configuration's
    /// default current.
    #[must_use]
    pub fn new(heights: ValueRange, baseline: f64, threshold_multiple: f64) -> Self {
        debug_assert!(baseline > 0.0, "baseline height must be positive");
        debug_assert!(
            threshold_multiple > 0.0,
            "threshold multiple must be positive"
        );
        Self {
            heights,
            baseline,
            threshold_multiple,
        }
    }

    /// Returns the descriptor for an arrow height.
    #[must_use]
    pub fn describe(&self, height: f64) -> &'static str {
        let last = SIZE_DESCRIPTORS.len() - 1;
        if height > self.threshold_multiple * self.baseline {
            return SIZE_DESCRIPTORS[last];
        }
        let t = self.heights.normalize(height);
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "t is in [0, 1], so the index fits"
        )]
        let index = (t * (last as f64) + 0.5) as usize;
        SIZE_DESCRIPTORS[index.min(last)]
    }
}

impl Default for SizeDescriber {
    /// Describer for the stock configuration: heights from the arrow
    /// interval, baseline at the default current's arrow height.
    fn default() -> Self {
        let config = CircuitConfig::default();
        let baseline = arrow_height(
            voltaic_model::MILLIAMPS_PER_AMP * config.default_voltage / config.default_resistance,
            &config,
        );
        Self::new(arrow_height_range(), baseline, DEFAULT_THRESHOLD_MULTIPLE)
    }
}

/// One-sentence scene summary for assistive technology.
#[must_use]
pub fn summary_sentence(voltage: f64, resistance: f64, current: f64) -> String {
    format!(
        "In the circuit, the battery voltage is {}, the resistance is {}, and the current is {}.",
        format_voltage(voltage),
        format_resistance(resistance),
        format_current(current),
    )
}

/// Spoken form of the current readout.
#[must_use]
pub fn current_sentence(current: f64) -> String {
    format!("Current is {current:.1} milliamps.")
}

/// Describes how the arrows changed between two heights.
#[must_use]
pub fn relative_change_sentence(
    old_height: f64,
    new_height: f64,
    describer: &SizeDescriber,
) -> String {
    let old_size = describer.describe(old_height);
    let new_size = describer.describe(new_height);
    if old_size == new_size {
        format!("Arrows stay {new_size}.")
    } else if new_height > old_height {
        format!("Arrows grow from {old_size} to {new_size}.")
    } else {
        format!("Arrows shrink from {old_size} to {new_size}.")
    }
}
