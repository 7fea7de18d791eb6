//! Digital speed readout.
//!
//! No needle, no ticks - a large numeric value with its unit label. The
//! horizontal anchor shifts with the digit count so the number stays visually
//! centered against the fixed MPH label.

use embedded_graphics::{prelude::*, text::Alignment};

use crate::{
    colors::{BLACK, WHITE},
    config::SPEED_SHAPE,
    geometry::size_factor,
    render::{CommandList, DrawCommand, FontClass, text_command},
    state::{GaugeError, GaugeState},
};

use core::fmt::Write;
use heapless::String;

/// Digital speed readout widget.
pub struct Speedometer {
    state: GaugeState,
    dirty: bool,
}

impl Speedometer {
    /// Create a speed readout with the given full-scale value.
    pub fn new(max_value: i32) -> Result<Self, GaugeError> {
        Ok(Self {
            state: GaugeState::new(max_value)?,
            dirty: true,
        })
    }

    /// Add to the speed, wrapping past either end of the scale.
    pub fn add(&mut self, delta: i32) {
        self.state.add(delta);
        self.dirty = true;
    }

    /// Set the speed absolutely, wrapping into range.
    pub fn set(&mut self, new_value: i32) {
        self.state.set(new_value);
        self.dirty = true;
    }

    /// Current speed.
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

    /// Render the readout into its viewport.
    pub fn render(&self, x: u32, y: u32, w: u32, h: u32) -> CommandList {
        let mut cmds = CommandList::new();

        let cx = x as f32 + w as f32 / 2.0;
        let cy = y as f32 + h as f32 / 2.0;
        let sf = size_factor(w, h, SPEED_SHAPE);

        // Viewport background
        cmds.push(DrawCommand::FillRect {
            top_left: Point::new(x as i32, y as i32),
            size: Size::new(w, h),
            color: BLACK,
        });

        // Value anchor shifts left as the number grows
        let value = self.state.value();
        let value_x = if value >= 100 {
            cx - sf * 0.5
        } else if value >= 10 {
            cx - sf * 0.25
        } else {
            cx
        };

        let mut value_str: String<8> = String::new();
        let _ = write!(value_str, "{value}");
        cmds.push(text_command(
            &value_str,
            Point::new(value_x as i32, (cy + sf * 0.25) as i32),
            WHITE,
            FontClass::ValueLarge,
            Alignment::Left,
        ));

        // Fixed unit label, clear of the widest (three digit) value
        cmds.push(text_command(
            "MPH",
            Point::new((cx + sf * 0.35) as i32, (cy + sf * 0.25) as i32),
            WHITE,
            FontClass::Value,
            Alignment::Left,
        ));

        cmds
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
