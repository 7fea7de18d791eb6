//! Two-segment tachometer: quarter arc plus straight run.
//!
//! The lower half of the scale sweeps a quarter arc from nine o'clock up to
//! twelve o'clock; the upper half extends along a straight run from the top
//! of the arc toward the right edge. The fill arc saturates at its
//! mechanical -90 degree limit before the run engages, so the needleless
//! fill can never over-rotate.
//!
//! # Layout
//! ```text
//!        2500  3000   4000   5000
//!      ┌──┬────┬───────┬──────┬──   <- straight run (upper half)
//!   ▓▓─┘                 3200 RPM
//!  ▓ 2000
//!  ▓─
//!  ▓ 1000                <- quarter arc (lower half)
//!  ▓
//!  ─┴ 0
//! ```
//!
//! Ticks sit every tenth of full scale, alternating major (labeled) and
//! minor; tick values use the same integer-truncation rule as every gauge.

use embedded_graphics::{prelude::*, text::Alignment};

use crate::{
    colors::{BLACK, GAUGE_GREY, WHITE},
    config::{GRADIENT_SEGMENTS, TACH_SHAPE},
    geometry::{
        ARC_GRADIENT, MAJOR_TICKS, TACH_BACKING_START, TACH_BACKING_SWEEP, TACH_FILL_START, gradient_color, polar,
        size_factor, tach_arc_span, tach_run_length, tick_fraction, tick_label,
    },
    render::{CommandList, DrawCommand, FontClass, text_command},
    state::{GaugeError, GaugeState},
};

use core::fmt::Write;
use heapless::String;

/// Quarter-arc + straight-run tachometer widget.
pub struct Tachometer {
    state: GaugeState,
    dirty: bool,
}

impl Tachometer {
    /// Create a tachometer with the given full-scale RPM.
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
    /// Layering order: background, backing arc + run, fill arc segments,
    /// fill run, tick lines, tick labels, RPM readout.
    pub fn render(&self, x: u32, y: u32, w: u32, h: u32) -> CommandList {
        let mut cmds = CommandList::new();

        let cx = x as f32 + w as f32 / 2.0;
        let cy = y as f32 + h as f32 / 2.0;
        let sf = size_factor(w, h, TACH_SHAPE);
        let stroke = 0.1 * sf;
        let center = Point::new(cx as i32, cy as i32);
        let diameter = (2.0 * sf) as u32;

        // Viewport background
        cmds.push(DrawCommand::FillRect {
            top_left: Point::new(x as i32, y as i32),
            size: Size::new(w, h),
            color: BLACK,
        });

        // Grey backing: quarter arc up to twelve o'clock, then the run
        cmds.push(DrawCommand::Arc {
            center,
            diameter,
            start_deg: TACH_BACKING_START,
            sweep_deg: TACH_BACKING_SWEEP,
            color: GAUGE_GREY,
            width: stroke as u32,
        });
        cmds.push(DrawCommand::Line {
            start: Point::new(cx as i32, (cy - sf) as i32),
            end: Point::new((cx + sf) as i32, (cy - sf) as i32),
            color: GAUGE_GREY,
            width: stroke as u32,
        });

        // Fill arc, segmented for the gradient. The gradient axis is
        // vertical over the gauge face (green at the top through red at the
        // bottom); each segment samples at its midpoint angle.
        let span = tach_arc_span(self.state.value(), self.state.max_value());
        if span < 0.0 {
            let slice = span / GRADIENT_SEGMENTS as f32;
            for i in 0..GRADIENT_SEGMENTS {
                let start = TACH_FILL_START + slice * i as f32;
                let mid = start + slice / 2.0;
                let t = (1.0 - mid.to_radians().sin()) / 2.0;
                cmds.push(DrawCommand::Arc {
                    center,
                    diameter,
                    start_deg: start,
                    sweep_deg: slice,
                    color: gradient_color(&ARC_GRADIENT, t),
                    width: stroke as u32,
                });
            }
        }

        // Fill run, engaged above half scale. The run sits at the top of the
        // gradient axis, so its color is constant.
        let run = tach_run_length(self.state.value(), self.state.max_value(), sf);
        if run > 0.0 {
            cmds.push(DrawCommand::Line {
                start: Point::new(cx as i32, (cy - sf) as i32),
                end: Point::new((cx + run) as i32, (cy - sf) as i32),
                color: gradient_color(&ARC_GRADIENT, 0.0),
                width: stroke as u32,
            });
        }

        // Ticks every tenth of full scale: radial on the arc half, vertical
        // on the run half. Lines first, labels after.
        for k in 0..=10u32 {
            let f = k as f32 / 10.0;
            let major = k % 2 == 0;
            let half = if major { stroke * 0.5 } else { stroke * 0.4 };
            if f < 0.5 {
                let angle = TACH_FILL_START - (f / 0.5) * 90.0;
                let (x0, y0) = polar(cx, cy, sf - half, angle);
                let (x1, y1) = polar(cx, cy, sf + half, angle);
                cmds.push(DrawCommand::Line {
                    start: Point::new(x0 as i32, y0 as i32),
                    end: Point::new(x1 as i32, y1 as i32),
                    color: WHITE,
                    width: 2,
                });
            } else {
                let tick_x = (cx + (f - 0.5) / 0.5 * sf) as i32;
                cmds.push(DrawCommand::Line {
                    start: Point::new(tick_x, (cy - sf - half) as i32),
                    end: Point::new(tick_x, (cy - sf + half) as i32),
                    color: WHITE,
                    width: 2,
                });
            }
        }
        for k in (0..=10u32).filter(|k| k % 2 == 0) {
            let f = k as f32 / 10.0;
            let fraction = tick_fraction((k / 2) as usize, MAJOR_TICKS);
            let mut label: String<8> = String::new();
            let _ = write!(label, "{}", tick_label(self.state.max_value(), fraction));
            if f < 0.5 {
                let angle = TACH_FILL_START - (f / 0.5) * 90.0;
                let (lx, ly) = polar(cx, cy, sf - stroke * 1.8, angle);
                cmds.push(text_command(
                    &label,
                    Point::new(lx as i32, ly as i32 + 3),
                    WHITE,
                    FontClass::Label,
                    Alignment::Center,
                ));
            } else {
                let tick_x = (cx + (f - 0.5) / 0.5 * sf) as i32;
                cmds.push(text_command(
                    &label,
                    Point::new(tick_x, (cy - sf + stroke * 1.6) as i32 + 6),
                    WHITE,
                    FontClass::Label,
                    Alignment::Center,
                ));
            }
        }

        // RPM readout in the open quadrant under the run
        let mut value_str: String<16> = String::new();
        let _ = write!(value_str, "{} RPM", self.state.value());
        cmds.push(text_command(
            &value_str,
            Point::new((cx + sf * 0.5) as i32, (cy - sf * 0.5) as i32),
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
