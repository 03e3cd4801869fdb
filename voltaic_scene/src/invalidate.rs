// Copyright 2025 the Voltaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which scene parts a model change invalidates.

use bitflags::bitflags;

use voltaic_model::Quantity;

bitflags! {
    /// The independently rebuildable pieces of the scene.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct SceneParts: u8 {
        /// The battery row.
        const BATTERY = 1 << 0;
        /// The resistor body and dot cloud.
        const RESISTOR = 1 << 1;
        /// The current arrows.
        const ARROWS = 1 << 2;
        /// The V = I·R formula.
        const FORMULA = 1 << 3;
        /// The current readout.
        const READOUT = 1 << 4;
    }
}

/// Returns the parts that must be rebuilt when `quantity` changes.
///
/// Each quantity maps to the parts depicting *it*: the model notifies
/// current subscribers on every input change, so a presentation that
/// subscribes to all three quantities rebuilds exactly the affected parts
/// with no unions taken here.
///
/// # Example
///
/// ```rust
/// use voltaic_model::Quantity;
/// use voltaic_scene::{SceneParts, parts_affected};
///
/// let parts = parts_affected(Quantity::Voltage);
/// assert!(parts.contains(SceneParts::BATTERY));
/// assert!(!parts.contains(SceneParts::RESISTOR));
/// ```
#[must_use]
pub fn parts_affected(quantity: Quantity) -> SceneParts {
    match quantity {
        Quantity::Voltage => SceneParts::BATTERY | SceneParts::FORMULA,
        Quantity::Resistance => SceneParts::RESISTOR | SceneParts::FORMULA,
        Quantity::Current => SceneParts::ARROWS | SceneParts::FORMULA | SceneParts::READOUT,
    }
}
