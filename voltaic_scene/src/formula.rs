// Copyright 2025 the Voltaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The V = I·R formula with value-scaled letters.

use kurbo::{Point, Rect};

use voltaic_model::{CircuitConfig, Quantity, ValueRange};

/// Letter scale at a quantity's range minimum.
const MIN_LETTER_SCALE: f64 = 0.45;

/// Letter scale at a quantity's range maximum.
const MAX_LETTER_SCALE: f64 = 3.2;

// Horizontal anchor fractions within the formula box.
const V_X: f64 = 0.14;
const EQUALS_X: f64 = 0.36;
const I_X: f64 = 0.56;
const TIMES_X: f64 = 0.72;
const R_X: f64 = 0.88;

/// The interval letter scales are drawn from.
#[must_use]
pub fn letter_scale_range() -> ValueRange {
    ValueRange::new(MIN_LETTER_SCALE, MAX_LETTER_SCALE)
}

/// Maps a normalized quantity value onto a letter scale.
///
/// # Example
///
/// ```rust
/// use voltaic_scene::{letter_scale, letter_scale_range};
///
/// assert_eq!(letter_scale(0.0), letter_scale_range().min());
/// assert_eq!(letter_scale(1.0), letter_scale_range().max());
/// ```
#[must_use]
pub fn letter_scale(normalized: f64) -> f64 {
    letter_scale_range().denormalize(normalized)
}

/// One letter of the formula.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FormulaLetter {
    /// The glyph to draw.
    pub glyph: char,
    /// The quantity this letter depicts.
    pub quantity: Quantity,
    /// The letter's center.
    pub anchor: Point,
    /// Scale factor relative to the base glyph size.
    pub scale: f64,
}

/// The V = I·R formula laid out inside its box, each letter scaled by its
/// quantity's normalized value.
///
/// The letters grow and shrink with their values, making the relationship
/// legible at a glance: raising the voltage grows V and I together while R
/// stays put.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FormulaLayout {
    /// The voltage letter.
    pub voltage: FormulaLetter,
    /// The current letter.
    pub current: FormulaLetter,
    /// The resistance letter.
    pub resistance: FormulaLetter,
    /// Center of the equals sign, drawn at a fixed scale.
    pub equals_anchor: Point,
    /// Center of the multiplication sign, drawn at a fixed scale.
    pub times_anchor: Point,
}

impl FormulaLayout {
    /// Lays out the formula for the given model values.
    #[must_use]
    pub fn new(formula_box: Rect, voltage: f64, resistance: f64, current: f64, config: &CircuitConfig) -> Self {
        let mid_y = formula_box.center().y;
        let anchor = |fraction: f64| Point::new(formula_box.x0 + fraction * formula_box.width(), mid_y);

        let letter = |glyph, quantity, normalized| FormulaLetter {
            glyph,
            quantity,
            anchor: anchor(match quantity {
                Quantity::Voltage => V_X,
                Quantity::Current => I_X,
                Quantity::Resistance => R_X,
            }),
            scale: letter_scale(normalized),
        };

        Self {
            voltage: letter(
                'V',
                Quantity::Voltage,
                config.voltage_range.normalize(voltage),
            ),
            current: letter(
                'I',
                Quantity::Current,
                config.current_range().normalize(current),
            ),
            resistance: letter(
                'R',
                Quantity::Resistance,
                config.resistance_range.normalize(resistance),
            ),
            equals_anchor: anchor(EQUALS_X),
            times_anchor: anchor(TIMES_X),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formula(voltage: f64, resistance: f64, current: f64) -> FormulaLayout {
        FormulaLayout::new(
            Rect::new(0.0, 0.0, 400.0, 150.0),
            voltage,
            resistance,
            current,
            &CircuitConfig::default(),
        )
    }

    #[test]
    fn glyphs_and_quantities() {
        let layout = formula(4.5, 500.0, 9.0);
        assert_eq!(layout.voltage.glyph, 'V');
        assert_eq!(layout.current.glyph, 'I');
        assert_eq!(layout.resistance.glyph, 'R');
        assert_eq!(layout.voltage.quantity, Quantity::Voltage);
    }

    #[test]
    fn letters_read_left_to_right() {
        let layout = formula(4.5, 500.0, 9.0);
        assert!(layout.voltage.anchor.x < layout.equals_anchor.x);
        assert!(layout.equals_anchor.x < layout.current.anchor.x);
        assert!(layout.current.anchor.x < layout.times_anchor.x);
        assert!(layout.times_anchor.x < layout.resistance.anchor.x);
    }

    #[test]
    fn raising_voltage_grows_v_and_i_only() {
        let before = formula(2.0, 500.0, 4.0);
        let after = formula(8.0, 500.0, 16.0);
        assert!(after.voltage.scale > before.voltage.scale);
        assert!(after.current.scale > before.current.scale);
        assert_eq!(after.resistance.scale, before.resistance.scale);
    }

    #[test]
    fn scales_stay_in_the_configured_interval() {
        for (v, r, i) in [(0.1, 1000.0, 0.1), (9.9, 10.0, 990.0), (4.5, 500.0, 9.0)] {
            let layout = formula(v, r, i);
            for letter in [layout.voltage, layout.current, layout.resistance] {
                assert!(letter_scale_range().contains(letter.scale));
            }
        }
    }

    #[test]
    fn extremes_hit_the_scale_bounds() {
        let layout = formula(9.9, 10.0, 990.0);
        assert_eq!(layout.voltage.scale, letter_scale_range().max());
        assert_eq!(layout.current.scale, letter_scale_range().max());
        let layout = formula(0.1, 1000.0, 0.1);
        assert_eq!(layout.voltage.scale, letter_scale_range().min());
    }
}
