// Copyright 2025 the Voltaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Battery row depiction of the voltage.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::readout::format_voltage;

/// Nominal voltage of one full battery cell.
pub const CELL_VOLTS: f64 = 1.5;

/// Horizontal gap between adjacent cells, as a fraction of the cell width.
const CELL_GAP: f64 = 0.04;

/// Terminal nub width as a fraction of the cell width.
const TERMINAL_WIDTH: f64 = 0.09;

/// Terminal nub height as a fraction of the cell height.
const TERMINAL_HEIGHT: f64 = 0.42;

/// Voltage remainders below this are not worth a fractional cell.
const REMAINDER_EPSILON: f64 = 1e-9;

/// One battery cell in the row depicting the voltage.
#[derive(Clone, Debug, PartialEq)]
pub struct BatteryCell {
    /// The cell body. A fractional cell is narrower than a full one.
    pub body: Rect,
    /// The positive terminal nub protruding from the right edge.
    pub terminal: Rect,
    /// The voltage this cell contributes.
    pub volts: f64,
    /// The label drawn on the cell, e.g. `"1.5 V"`.
    pub label: String,
}

/// Lays out the voltage as a left-to-right row of series cells.
///
/// Full cells carry [`CELL_VOLTS`] each; the remainder, if any, becomes one
/// final cell whose width is scaled by its share of a full cell. The row is
/// anchored at `origin` (top-left of the first cell).
///
/// # Example
///
/// ```rust
/// use kurbo::{Point, Size};
/// use voltaic_scene::battery_cells;
///
/// let cells = battery_cells(4.5, Point::ORIGIN, Size::new(60.0, 40.0));
/// assert_eq!(cells.len(), 3);
/// assert!(cells.iter().all(|c| c.volts == 1.5));
///
/// let cells = battery_cells(4.0, Point::ORIGIN, Size::new(60.0, 40.0));
/// assert_eq!(cells.len(), 3);
/// assert!(cells[2].body.width() < cells[0].body.width());
/// ```
#[must_use]
pub fn battery_cells(voltage: f64, origin: Point, cell_size: Size) -> Vec<BatteryCell> {
    debug_assert!(voltage >= 0.0, "voltage must be non-negative");

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "non-negative in-range voltages yield a small cell count"
    )]
    let full = (voltage / CELL_VOLTS) as usize;
    let remainder = voltage - (full as f64) * CELL_VOLTS;

    let mut cells = Vec::with_capacity(full + 1);
    let advance = cell_size.width * (1.0 + CELL_GAP);

    for i in 0..full {
        let top_left = Point::new(origin.x + (i as f64) * advance, origin.y);
        cells.push(cell_at(top_left, cell_size, cell_size.width, CELL_VOLTS));
    }

    if remainder > REMAINDER_EPSILON {
        let top_left = Point::new(origin.x + (full as f64) * advance, origin.y);
        let width = cell_size.width * remainder / CELL_VOLTS;
        cells.push(cell_at(top_left, cell_size, width, remainder));
    }

    cells
}

fn cell_at(top_left: Point, cell_size: Size, width: f64, volts: f64) -> BatteryCell {
    let body = Rect::from_origin_size(top_left, Size::new(width, cell_size.height));
    let terminal_size = Size::new(
        TERMINAL_WIDTH * cell_size.width,
        TERMINAL_HEIGHT * cell_size.height,
    );
    let terminal = Rect::from_center_size(
        Point::new(body.x1 + terminal_size.width / 2.0, body.center().y),
        terminal_size,
    );
    BatteryCell {
        body,
        terminal,
        volts,
        label: format_voltage(volts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CELL: Size = Size::new(60.0, 40.0);

    #[test]
    fn exact_multiple_has_no_fractional_cell() {
        let cells = battery_cells(4.5, Point::ORIGIN, CELL);
        assert_eq!(cells.len(), 3);
        for cell in &cells {
            assert_eq!(cell.volts, 1.5);
            assert_eq!(cell.body.width(), 60.0);
            assert_eq!(cell.label, "1.5 V");
        }
    }

    #[test]
    fn remainder_becomes_a_partial_cell() {
        let cells = battery_cells(4.0, Point::ORIGIN, CELL);
        assert_eq!(cells.len(), 3);
        let last = cells.last().unwrap();
        assert!((last.volts - 1.0).abs() < 1e-9);
        // 1.0 V of a 1.5 V cell: two thirds of the width.
        assert!((last.body.width() - 40.0).abs() < 1e-9);
        assert_eq!(last.label, "1.0 V");
    }

    #[test]
    fn below_one_cell_is_a_single_sliver() {
        let cells = battery_cells(0.1, Point::ORIGIN, CELL);
        assert_eq!(cells.len(), 1);
        assert!(cells[0].body.width() < 5.0);
    }

    #[test]
    fn maximum_voltage_stays_within_seven_cells() {
        let cells = battery_cells(9.9, Point::ORIGIN, CELL);
        assert_eq!(cells.len(), 7); // six full cells plus a 0.9 V remainder
        assert!((cells.iter().map(|c| c.volts).sum::<f64>() - 9.9).abs() < 1e-9);
    }

    #[test]
    fn cells_advance_left_to_right_without_overlap() {
        let cells = battery_cells(9.9, Point::new(100.0, 50.0), CELL);
        for pair in cells.windows(2) {
            assert!(pair[1].body.x0 > pair[0].body.x1);
            assert_eq!(pair[0].body.y0, pair[1].body.y0);
        }
    }

    #[test]
    fn terminal_protrudes_from_the_right_edge() {
        let cells = battery_cells(1.5, Point::ORIGIN, CELL);
        let cell = &cells[0];
        assert!((cell.terminal.x0 - cell.body.x1).abs() < 1e-9);
        assert!((cell.terminal.center().y - cell.body.center().y).abs() < 1e-9);
        assert!(cell.terminal.height() < cell.body.height());
    }

    #[test]
    fn zero_voltage_yields_no_cells() {
        let cells = battery_cells(0.0, Point::ORIGIN, CELL);
        assert!(cells.is_empty());
    }
}
