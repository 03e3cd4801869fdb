// Copyright 2025 the Voltaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Names for the model's observable quantities.

use core::fmt;

/// One of the three observable quantities of the circuit model.
///
/// [`Voltage`](Quantity::Voltage) and [`Resistance`](Quantity::Resistance)
/// are independent inputs; [`Current`](Quantity::Current) is derived from
/// them and can only be observed, never set.
///
/// # Example
///
/// ```rust
/// use voltaic_model::Quantity;
///
/// assert_eq!(Quantity::Voltage.unit(), "V");
/// assert!(!Quantity::Current.is_input());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Electrical potential difference, in volts. User-controlled input.
    Voltage,
    /// Electrical resistance, in ohms. User-controlled input.
    Resistance,
    /// Electrical current, in milliamps. Derived output.
    Current,
}

impl Quantity {
    /// All quantities, inputs first, derived output last.
    pub const ALL: [Self; 3] = [Self::Voltage, Self::Resistance, Self::Current];

    /// Returns the unit symbol for this quantity.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Voltage => "V",
            Self::Resistance => "Ω",
            Self::Current => "mA",
        }
    }

    /// Returns the spelled-out unit name for this quantity.
    #[must_use]
    pub const fn unit_name(self) -> &'static str {
        match self {
            Self::Voltage => "volts",
            Self::Resistance => "ohms",
            Self::Current => "milliamps",
        }
    }

    /// Returns `true` for the user-controlled inputs.
    #[must_use]
    pub const fn is_input(self) -> bool {
        matches!(self, Self::Voltage | Self::Resistance)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Voltage => "voltage",
            Self::Resistance => "resistance",
            Self::Current => "current",
        };
        f.write_str(name)
    }
}
