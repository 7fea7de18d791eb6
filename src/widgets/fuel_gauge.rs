//! Fuel level arc gauge.
//!
//! A 200-degree arc from "E" (upper left) swinging under the gauge face to
//! "F" (upper right). The fill sweep is linear in the level; the fill color
//! is banded (green / yellow / red) by the thresholds module rather than
//! blended - a fuel needle snapping to red is the point.

use embedded_graphics::{prelude::*, text::Alignment};

use crate::{
    colors::{BLACK, GAUGE_GREY, WHITE},
    config::FUEL_SHAPE,
    geometry::{FUEL_ARC_START, FUEL_ARC_SWEEP, FUEL_TICKS, fuel_arc_span, polar, size_factor},
    render::{CommandList, DrawCommand, FontClass, text_command},
    state::{GaugeError, GaugeState},
    thresholds::fuel_level_color,
};

use core::fmt::Write;
use heapless::String;

/// Fuel arc gauge widget.
pub struct FuelGauge {
    state: GaugeState,
    dirty: bool,
}

impl FuelGauge {
    /// Create a fuel gauge with the given full-scale value (typically 100).
    pub fn new(max_value: i32) -> Result<Self, GaugeError> {
        Ok(Self {
            state: GaugeState::new(max_value)?,
            dirty: true,
        })
    }

    /// Add to the level, wrapping past either end of the scale.
    pub fn add(&mut self, delta: i32) {
        self.state.add(delta);
        self.dirty = true;
    }

    /// Set the level absolutely, wrapping into range.
    pub fn set(&mut self, new_value: i32) {
        self.state.set(new_value);
        self.dirty = true;
    }

    /// Current level.
    #[inline]
    pub const fn value(&self) -> i32 {
        self.state.value()
    }

    /// Consume the dirty flag; true if a mutation happened since last taken.
    pub const fn take_dirty(&mut self) -> bool {
        let dirty = self.dirty;
        self.dirty = false;
        dirty
    }

    /// Render the gauge into its viewport.
    ///
    /// Layering order: background, backing arc, banded fill arc, ticks,
    /// E/F labels, percentage readout.
    pub fn render(&self, x: u32, y: u32, w: u32, h: u32) -> CommandList {
        let mut cmds = CommandList::new();

        let cx = x as f32 + w as f32 / 2.0;
        let cy = y as f32 + h as f32 / 2.0;
        let sf = size_factor(w, h, FUEL_SHAPE);
        let stroke = 0.1 * sf;
        let center = Point::new(cx as i32, cy as i32);
        let diameter = (2.0 * sf) as u32;

        // Viewport background
        cmds.push(DrawCommand::FillRect {
            top_left: Point::new(x as i32, y as i32),
            size: Size::new(w, h),
            color: BLACK,
        });

        // Grey backing arc, E to F
        cmds.push(DrawCommand::Arc {
            center,
            diameter,
            start_deg: FUEL_ARC_START,
            sweep_deg: FUEL_ARC_SWEEP,
            color: GAUGE_GREY,
            width: stroke as u32,
        });

        // Banded fill arc. The span is linear in the level with no clamping;
        // the gauge state guarantees the value is pre-wrapped into range.
        let span = fuel_arc_span(self.state.value(), self.state.max_value(), FUEL_ARC_SWEEP);
        if span > 0.0 {
            cmds.push(DrawCommand::Arc {
                center,
                diameter,
                start_deg: FUEL_ARC_START,
                sweep_deg: span,
                color: fuel_level_color(self.state.value(), self.state.max_value()),
                width: stroke as u32,
            });
        }

        // Nine radial ticks, one every 25 degrees along the sweep
        for k in 0..FUEL_TICKS {
            let angle = FUEL_ARC_START + FUEL_ARC_SWEEP / (FUEL_TICKS - 1) as f32 * k as f32;
            let (x0, y0) = polar(cx, cy, sf - stroke * 0.6, angle);
            let (x1, y1) = polar(cx, cy, sf + stroke * 0.6, angle);
            cmds.push(DrawCommand::Line {
                start: Point::new(x0 as i32, y0 as i32),
                end: Point::new(x1 as i32, y1 as i32),
                color: WHITE,
                width: 2,
            });
        }

        // E and F labels just inside the arc ends
        cmds.push(text_command(
            "E",
            Point::new((cx - sf * 0.82) as i32, cy as i32),
            WHITE,
            FontClass::Title,
            Alignment::Center,
        ));
        cmds.push(text_command(
            "F",
            Point::new((cx + sf * 0.82) as i32, cy as i32),
            WHITE,
            FontClass::Title,
            Alignment::Center,
        ));

        // Percentage readout inside the bowl
        let mut value_str: String<8> = String::new();
        let _ = write!(value_str, "{}%", self.state.value());
        cmds.push(text_command(
            &value_str,
            Point::new(cx as i32, (cy + sf * 0.5) as i32),
            WHITE,
            FontClass::Value,
            Alignment::Center,
        ));

        cmds
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
