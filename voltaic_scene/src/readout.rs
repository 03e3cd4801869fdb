// Copyright 2025 the Voltaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unit string formatting for the readout panel and slider labels.

use alloc::format;
use alloc::string::String;

use voltaic_model::Quantity;

/// Formats a current for display: one decimal, milliamps.
///
/// # Example
///
/// ```rust
/// use voltaic_scene::format_current;
///
/// assert_eq!(format_current(9.0), "9.0 mA");
/// assert_eq!(format_current(990.0), "990.0 mA");
/// ```
#[must_use]
pub fn format_current(milliamps: f64) -> String {
    format!("{milliamps:.1} mA")
}

/// Formats a voltage for display: one decimal, volts.
#[must_use]
pub fn format_voltage(volts: f64) -> String {
    format!("{volts:.1} V")
}

/// Formats a resistance for display: whole ohms.
#[must_use]
pub fn format_resistance(ohms: f64) -> String {
    format!("{ohms:.0} Ω")
}

/// Formats the named quantity's value with its unit.
#[must_use]
pub fn format_value(quantity: Quantity, value: f64) -> String {
    match quantity {
        Quantity::Voltage => format_voltage(value),
        Quantity::Resistance => format_resistance(value),
        Quantity::Current => format_current(value),
    }
}
