// Copyright 2025 the Voltaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed color assignments for the scene parts.

use kurbo::Rect;
use peniko::{
    Brush, Color, ColorStop, Extend, Gradient, GradientKind, LinearGradientPosition,
};

/// Scene background.
pub const BACKGROUND: Color = Color::from_rgba8(255, 255, 223, 255);

/// Wire stroke color.
pub const WIRE_STROKE: Color = Color::from_rgba8(0, 0, 0, 255);

/// Resistor body fill.
pub const RESISTOR_FILL: Color = Color::from_rgba8(207, 176, 112, 255);

/// Resistance dot fill.
pub const DOT_FILL: Color = Color::from_rgba8(0, 0, 0, 255);

/// Current arrow fill.
pub const ARROW_FILL: Color = Color::from_rgba8(237, 28, 36, 255);

/// Vertical copper gradient for a battery cell body.
///
/// The gradient spans the cell rect top to bottom, giving the cylinder
/// highlight the stock artwork has.
#[must_use]
pub fn battery_brush(body: Rect) -> Brush {
    let kind = GradientKind::Linear(LinearGradientPosition::new(
        (body.x0, body.y0),
        (body.x0, body.y1),
    ));
    let stops = [
        ColorStop::from((0.0, Color::from_rgba8(110, 60, 22, 255))),
        ColorStop::from((0.3, Color::from_rgba8(222, 137, 57, 255))),
        ColorStop::from((0.5, Color::from_rgba8(247, 196, 125, 255))),
        ColorStop::from((0.7, Color::from_rgba8(222, 137, 57, 255))),
        ColorStop::from((1.0, Color::from_rgba8(110, 60, 22, 255))),
    ];
    Brush::Gradient(Gradient {
        kind,
        extend: Extend::Pad,
        stops: stops.as_slice().into(),
        ..Gradient::default()
    })
}

/// Vertical steel gradient for a battery cell's positive terminal.
#[must_use]
pub fn terminal_brush(terminal: Rect) -> Brush {
    let kind = GradientKind::Linear(LinearGradientPosition::new(
        (terminal.x0, terminal.y0),
        (terminal.x0, terminal.y1),
    ));
    let stops = [
        ColorStop::from((0.0, Color::from_rgba8(96, 96, 96, 255))),
        ColorStop::from((0.5, Color::from_rgba8(220, 220, 220, 255))),
        ColorStop::from((1.0, Color::from_rgba8(96, 96, 96, 255))),
    ];
    Brush::Gradient(Gradient {
        kind,
        extend: Extend::Pad,
        stops: stops.as_slice().into(),
        ..Gradient::default()
    })
}
