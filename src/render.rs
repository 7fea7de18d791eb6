//! Draw-command model and render state tracking.
//!
//! Widgets never touch the display. Each `render` call produces an ordered
//! [`CommandList`] - a pure function of widget state and viewport - and the
//! host replays it onto the display with [`paint`]. Command order is the
//! layering contract: backing first, then fill, ticks, labels, value text.
//!
//! Keeping rendering as data has two payoffs:
//! - idempotence is directly testable (same state, same viewport, same list),
//! - the host backend is swappable behind `DrawTarget<Color = Rgb565>`.
//!
//! [`RenderState`] tracks the few events that require clearing the whole
//! display (first frame, mode switch) so the per-frame path only repaints
//! widgets whose state changed.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Arc, Circle, Line, PrimitiveStyle, Rectangle},
    text::{Alignment, Text, TextStyle},
};
use heapless::String;

use crate::styles::{CENTERED, LABEL_FONT, LEFT_ALIGNED, RIGHT_ALIGNED, TITLE_FONT, VALUE_FONT, VALUE_FONT_LARGE};

/// Maximum characters of any single text command.
pub const TEXT_CAPACITY: usize = 64;

/// Font size class carried by text commands.
///
/// Mono fonts come in fixed sizes, so text scales by class selection rather
/// than continuously with the size factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontClass {
    /// 6x10 label font: tick labels, units, captions.
    Label,
    /// 10x20 font: menu slots, panel titles.
    Title,
    /// ProFont 18pt: gauge value readouts.
    Value,
    /// ProFont 24pt: speed readout, two-step digits.
    ValueLarge,
}

impl FontClass {
    /// The concrete mono font for this class.
    const fn font(self) -> &'static MonoFont<'static> {
        match self {
            Self::Label => LABEL_FONT,
            Self::Title => TITLE_FONT,
            Self::Value => VALUE_FONT,
            Self::ValueLarge => VALUE_FONT_LARGE,
        }
    }
}

/// One primitive draw operation.
///
/// Angles follow the shared convention: degrees, 0 at three o'clock,
/// positive counterclockwise (negative sweep = clockwise).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Stroked line segment.
    Line {
        start: Point,
        end: Point,
        color: Rgb565,
        width: u32,
    },
    /// Stroked circular arc around `center`.
    Arc {
        center: Point,
        diameter: u32,
        start_deg: f32,
        sweep_deg: f32,
        color: Rgb565,
        width: u32,
    },
    /// Filled circle around `center`.
    Circle {
        center: Point,
        diameter: u32,
        color: Rgb565,
    },
    /// Filled rectangle.
    FillRect {
        top_left: Point,
        size: Size,
        color: Rgb565,
    },
    /// Stroked rectangle outline.
    RectOutline {
        top_left: Point,
        size: Size,
        color: Rgb565,
        width: u32,
    },
    /// Text anchored at `position` with the given alignment.
    Text {
        text: String<TEXT_CAPACITY>,
        position: Point,
        color: Rgb565,
        font: FontClass,
        align: Alignment,
    },
}

/// An ordered sequence of draw commands; order is the layering order.
pub type CommandList = Vec<DrawCommand>;

/// Build a text command, truncating at the command capacity.
///
/// Truncation never happens for the fixed-format strings the widgets emit;
/// the guard just keeps the constructor total.
pub fn text_command(
    text: &str,
    position: Point,
    color: Rgb565,
    font: FontClass,
    align: Alignment,
) -> DrawCommand {
    let mut owned: String<TEXT_CAPACITY> = String::new();
    for ch in text.chars() {
        if owned.push(ch).is_err() {
            break;
        }
    }
    DrawCommand::Text {
        text: owned,
        position,
        color,
        font,
        align,
    }
}

/// Replay a command list onto a draw target, in order.
///
/// Draw errors are ignored with `.ok()` - the simulator target is
/// infallible, and a partially painted frame is repainted next frame anyway.
pub fn paint<D>(commands: &[DrawCommand], display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    for command in commands {
        match command {
            DrawCommand::Line { start, end, color, width } => {
                Line::new(*start, *end)
                    .into_styled(PrimitiveStyle::with_stroke(*color, *width))
                    .draw(display)
                    .ok();
            }
            DrawCommand::Arc {
                center,
                diameter,
                start_deg,
                sweep_deg,
                color,
                width,
            } => {
                Arc::with_center(
                    *center,
                    *diameter,
                    Angle::from_degrees(*start_deg),
                    Angle::from_degrees(*sweep_deg),
                )
                .into_styled(PrimitiveStyle::with_stroke(*color, *width))
                .draw(display)
                .ok();
            }
            DrawCommand::Circle { center, diameter, color } => {
                Circle::with_center(*center, *diameter)
                    .into_styled(PrimitiveStyle::with_fill(*color))
                    .draw(display)
                    .ok();
            }
            DrawCommand::FillRect { top_left, size, color } => {
                Rectangle::new(*top_left, *size)
                    .into_styled(PrimitiveStyle::with_fill(*color))
                    .draw(display)
                    .ok();
            }
            DrawCommand::RectOutline {
                top_left,
                size,
                color,
                width,
            } => {
                Rectangle::new(*top_left, *size)
                    .into_styled(PrimitiveStyle::with_stroke(*color, *width))
                    .draw(display)
                    .ok();
            }
            DrawCommand::Text {
                text,
                position,
                color,
                font,
                align,
            } => {
                let style = MonoTextStyle::new(font.font(), *color);
                Text::with_text_style(text, *position, style, text_style_for(*align))
                    .draw(display)
                    .ok();
            }
        }
    }
}

/// Pre-computed alignment style for a text command.
const fn text_style_for(align: Alignment) -> TextStyle {
    match align {
        Alignment::Left => LEFT_ALIGNED,
        Alignment::Center => CENTERED,
        Alignment::Right => RIGHT_ALIGNED,
    }
}

// =============================================================================
// Render State Tracking
// =============================================================================

/// Tracks the events that require clearing the whole display.
///
/// Widgets repaint their own viewports when dirty; a full clear is only
/// needed on the first frame and when the active mode panel changes (the
/// outgoing panel's pixels would otherwise linger).
pub struct RenderState {
    first_frame: bool,
    mode_switched: bool,
}

impl RenderState {
    /// Create render state for the first frame.
    pub const fn new() -> Self {
        Self {
            first_frame: true,
            mode_switched: false,
        }
    }

    /// Record that the active mode panel changed this frame.
    pub const fn mark_mode_switched(&mut self) {
        self.mode_switched = true;
    }

    /// Whether the display needs a full clear before drawing this frame.
    #[inline]
    pub const fn need_full_clear(&self) -> bool {
        self.first_frame || self.mode_switched
    }

    /// Call at end of frame to reset per-frame state.
    pub const fn end_frame(&mut self) {
        self.first_frame = false;
        self.mode_switched = false;
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
