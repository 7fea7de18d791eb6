//! Vertical temperature bar gauge.
//!
//! A grey backing bar with a gradient fill rising from the bottom: green at
//! low temperatures through yellow to red at the top of the scale. Eleven
//! tick lines flank the bar (six labeled, five minor), with a green
//! indicator disc and the numeric readout below.
//!
//! # Layout
//! ```text
//!   300 ─┬─        <- max label, bar top
//!        ┤
//!   240 ─┤
//!        ┤   C
//!   180 ─┤
//!        ┆▓▓       <- gradient fill (bottom-up)
//!     0 ─┴─▓
//!        (O)       <- indicator disc
//!         72       <- value readout
//! ```

use embedded_graphics::{prelude::*, text::Alignment};

use crate::{
    colors::{BLACK, GAUGE_GREY, GREEN, WHITE},
    config::{GRADIENT_SEGMENTS, TEMP_SHAPE},
    geometry::{
        LINEAR_GRADIENT, MAJOR_TICKS, gradient_color, linear_fill_length, size_factor, tick_fraction, tick_label,
    },
    render::{CommandList, DrawCommand, FontClass, text_command},
    state::{GaugeError, GaugeState},
};

use core::fmt::Write;
use heapless::String;

/// Vertical bar offset from the viewport center, in size factors.
/// Leaves room below the bar for the indicator disc and readout.
const BAR_OFFSET: f32 = 0.15;

/// Vertical temperature gauge widget.
pub struct TempGauge {
    state: GaugeState,
    dirty: bool,
}

impl TempGauge {
    /// Create a temperature gauge with the given full-scale value.
    pub fn new(max_value: i32) -> Result<Self, GaugeError> {
        Ok(Self {
            state: GaugeState::new(max_value)?,
            dirty: true,
        })
    }

    /// Add to the value, wrapping past either end of the scale.
    pub fn add(&mut self, delta: i32) {
        self.state.add(delta);
        self.dirty = true;
    }

    /// Set the value absolutely, wrapping into range.
    pub fn set(&mut self, new_value: i32) {
        self.state.set(new_value);
        self.dirty = true;
    }

    /// Current value.
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
    /// Pure function of state and viewport; layering order is background,
    /// backing bar, gradient fill, ticks, labels, disc, readout.
    pub fn render(&self, x: u32, y: u32, w: u32, h: u32) -> CommandList {
        let mut cmds = CommandList::new();

        let cx = x as f32 + w as f32 / 2.0;
        let cy = y as f32 + h as f32 / 2.0;
        let sf = size_factor(w, h, TEMP_SHAPE);
        let bar_cy = cy - sf * BAR_OFFSET;
        let bar_width = 0.1 * sf;

        // Viewport background
        cmds.push(DrawCommand::FillRect {
            top_left: Point::new(x as i32, y as i32),
            size: Size::new(w, h),
            color: BLACK,
        });

        // Grey backing bar, bottom to top
        cmds.push(DrawCommand::Line {
            start: Point::new(cx as i32, (bar_cy + sf) as i32),
            end: Point::new(cx as i32, (bar_cy - sf) as i32),
            color: GAUGE_GREY,
            width: bar_width as u32,
        });

        // Gradient fill, clipped to the backing extent. The gradient axis
        // runs top (red) to bottom (green); each segment samples the stop
        // colors at its midpoint position along the bar.
        let fill = linear_fill_length(self.state.value(), self.state.max_value(), sf).min(2.0 * sf);
        if fill > 0.0 {
            let bottom = bar_cy + sf;
            let segment = fill / GRADIENT_SEGMENTS as f32;
            for i in 0..GRADIENT_SEGMENTS {
                let d0 = segment * i as f32;
                let d1 = segment * (i + 1) as f32;
                let t = 1.0 - (d0 + d1) / 2.0 / (2.0 * sf);
                cmds.push(DrawCommand::Line {
                    start: Point::new(cx as i32, (bottom - d0) as i32),
                    end: Point::new(cx as i32, (bottom - d1) as i32),
                    color: gradient_color(&LINEAR_GRADIENT, t),
                    width: bar_width as u32,
                });
            }
        }

        // Eleven ticks at fifths of a size factor; every other one labeled.
        // Offset k runs top (-5, max value) to bottom (+5, zero). Tick lines
        // first, labels after - the command order is the layering order.
        for k in -5i32..=5 {
            let tick_y = (bar_cy + k as f32 / 5.0 * sf) as i32;
            let major = (5 - k) % 2 == 0;
            let half = if major { bar_width * 0.5 } else { bar_width * 0.4 };
            cmds.push(DrawCommand::Line {
                start: Point::new((cx - half) as i32, tick_y),
                end: Point::new((cx + half) as i32, tick_y),
                color: WHITE,
                width: 2,
            });
        }
        for k in (-5i32..=5).filter(|k| (5 - k) % 2 == 0) {
            let tick_y = (bar_cy + k as f32 / 5.0 * sf) as i32;
            let fraction = tick_fraction(((5 - k) / 2) as usize, MAJOR_TICKS);
            let mut label: String<8> = String::new();
            let _ = write!(label, "{}", tick_label(self.state.max_value(), fraction));
            cmds.push(text_command(
                &label,
                Point::new((cx - bar_width * 1.5) as i32, tick_y + 3),
                WHITE,
                FontClass::Label,
                Alignment::Right,
            ));
        }

        // Unit label beside the top of the bar
        cmds.push(text_command(
            "C",
            Point::new((cx + bar_width * 1.5) as i32, (bar_cy - sf + 8.0) as i32),
            WHITE,
            FontClass::Label,
            Alignment::Left,
        ));

        // Indicator disc below the bar
        cmds.push(DrawCommand::Circle {
            center: Point::new(cx as i32, (bar_cy + sf * 1.25) as i32),
            diameter: (bar_width * 2.2) as u32,
            color: GREEN,
        });

        // Value readout under the disc
        let mut value_str: String<8> = String::new();
        let _ = write!(value_str, "{}", self.state.value());
        cmds.push(text_command(
            &value_str,
            Point::new(cx as i32, (bar_cy + sf * 1.55) as i32),
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

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(cmds: &CommandList) -> Vec<std::string::String> {
        cmds.iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str().to_owned()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_new_rejects_non_positive_max() {
        assert!(TempGauge::new(0).is_err());
        assert!(TempGauge::new(-10).is_err());
    }

    #[test]
    fn test_render_idempotent() {
        let gauge = TempGauge::new(300).unwrap();
        let first = gauge.render(0, 0, 96, 299);
        let second = gauge.render(0, 0, 96, 299);
        assert_eq!(first, second, "Repeated renders with unchanged state must be identical");
    }

    #[test]
    fn test_resize_recomputes_geometry() {
        let gauge = TempGauge::new(300).unwrap();
        assert_ne!(
            gauge.render(0, 0, 96, 299),
            gauge.render(0, 0, 64, 200),
            "Geometry follows the current viewport, never a cached one"
        );
    }

    #[test]
    fn test_render_changes_after_mutation() {
        let mut gauge = TempGauge::new(300).unwrap();
        let before = gauge.render(0, 0, 96, 299);
        gauge.add(75);
        let after = gauge.render(0, 0, 96, 299);
        assert_ne!(before, after, "Fill must follow the value");
    }

    #[test]
    fn test_tick_labels_truncated() {
        // max 300: labels 0, 60, 120, 180, 240, 300 - the 60% tick label is
        // int(300 * 0.6) = 180 by truncation.
        let gauge = TempGauge::new(300).unwrap();
        let texts = labels(&gauge.render(0, 0, 96, 299));
        for expected in ["0", "60", "120", "180", "240", "300"] {
            assert!(texts.iter().any(|t| t == expected), "Missing tick label {expected}");
        }
    }

    #[test]
    fn test_background_first_backing_second() {
        let gauge = TempGauge::new(300).unwrap();
        let cmds = gauge.render(0, 0, 96, 299);
        assert!(
            matches!(cmds[0], DrawCommand::FillRect { color, .. } if color == BLACK),
            "First command clears the viewport"
        );
        assert!(
            matches!(cmds[1], DrawCommand::Line { color, .. } if color == GAUGE_GREY),
            "Backing bar draws before the fill"
        );
    }

    #[test]
    fn test_zero_value_emits_no_fill() {
        let gauge = TempGauge::new(300).unwrap();
        let cmds = gauge.render(0, 0, 96, 299);
        let fill_segments = cmds
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Line { color, .. } if *color != GAUGE_GREY && *color != WHITE))
            .count();
        assert_eq!(fill_segments, 0, "Zero value draws no fill segments");
    }

    #[test]
    fn test_full_scale_emits_all_segments() {
        let mut gauge = TempGauge::new(300).unwrap();
        gauge.set(300);
        let cmds = gauge.render(0, 0, 96, 299);
        let fill_segments = cmds
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Line { color, .. } if *color != GAUGE_GREY && *color != WHITE))
            .count();
        assert_eq!(
            fill_segments,
            GRADIENT_SEGMENTS as usize,
            "Full scale draws the whole gradient"
        );
    }

    #[test]
    fn test_mutations_mark_dirty() {
        let mut gauge = TempGauge::new(300).unwrap();
        assert!(gauge.take_dirty(), "A new widget needs its first paint");
        assert!(!gauge.take_dirty(), "Flag is consumed");

        gauge.add(10);
        assert!(gauge.take_dirty(), "add marks dirty");
        gauge.set(5);
        assert!(gauge.take_dirty(), "set marks dirty");
    }

    #[test]
    fn test_wrap_add_reflected_in_value() {
        let mut gauge = TempGauge::new(300).unwrap();
        gauge.set(300);
        gauge.add(1);
        assert_eq!(gauge.value(), 0, "Wrap past max re-enters at zero");
        gauge.add(-1);
        assert_eq!(gauge.value(), 300, "Wrap below zero re-enters at max");
    }
}
