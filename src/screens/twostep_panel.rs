//! Two-step RPM bound entry panel.
//!
//! Renders the state of a [`TwoStepEntry`] session: a title strip naming the
//! bound being edited (or the bad-bounds error while the session is
//! invalid), four digit slots plus the RPM confirm slot, and an outline
//! around the slot under the cursor.
//!
//! # Layout
//! ```text
//! ┌─────────────────────────────┐
//! │     Upper 2-Step Bound      │  <- title strip (grey)
//! ├─────┬─────┬─────┬─────┬─────┤
//! │  1  │ [2] │  0  │  0  │ RPM │  <- white entry area, cursor outline
//! └─────┴─────┴─────┴─────┴─────┘
//! ```

use embedded_graphics::{prelude::*, text::Alignment};

use crate::{
    colors::{BLACK, LIGHT_GREY, WHITE},
    render::{CommandList, DrawCommand, FontClass, text_command},
    twostep::{BoundPhase, SessionStatus, TwoStepEntry},
};

use core::fmt::Write;
use heapless::String;

/// Title shown while the session is sticky-invalid.
const BAD_BOUNDS_CAPTION: &str = "BAD BOUNDS REOPEN FROM MENU";

/// Render the entry panel for the current session state.
pub fn draw_two_step(entry: &TwoStepEntry, x: u32, y: u32, w: u32, h: u32) -> CommandList {
    let mut cmds = CommandList::new();

    let title_h = h / 4;
    let body_y = y + title_h;
    let body_h = h - title_h;

    // Title strip over a white entry area
    cmds.push(DrawCommand::FillRect {
        top_left: Point::new(x as i32, y as i32),
        size: Size::new(w, title_h),
        color: LIGHT_GREY,
    });
    cmds.push(DrawCommand::FillRect {
        top_left: Point::new(x as i32, body_y as i32),
        size: Size::new(w, body_h),
        color: WHITE,
    });

    // Title: the bound being edited, or the sticky error caption
    let title_pos = Point::new((x + w / 2) as i32, (y + title_h / 2) as i32 + 3);
    match entry.status() {
        SessionStatus::Invalid => {
            cmds.push(text_command(BAD_BOUNDS_CAPTION, title_pos, BLACK, FontClass::Label, Alignment::Center));
        }
        _ => {
            let caption = match entry.phase() {
                BoundPhase::Upper => "Upper 2-Step Bound",
                BoundPhase::Lower => "Lower 2-Step Bound",
            };
            cmds.push(text_command(caption, title_pos, BLACK, FontClass::Label, Alignment::Center));

            // While entering the lower bound, keep the captured upper bound
            // in view at the strip's right edge
            if entry.phase() == BoundPhase::Lower
                && let Some(upper) = entry.captured_upper()
            {
                let mut hint: String<16> = String::new();
                let _ = write!(hint, "UP {upper}");
                cmds.push(text_command(
                    &hint,
                    Point::new((x + w) as i32 - 4, (y + title_h / 2) as i32 + 3),
                    BLACK,
                    FontClass::Label,
                    Alignment::Right,
                ));
            }
        }
    }

    // Cursor outline around the active slot (digit slots 0-3, confirm = 4)
    let slot_w = w / 5;
    let cursor_slot = entry.cursor().digit_index().unwrap_or(4) as u32;
    cmds.push(DrawCommand::RectOutline {
        top_left: Point::new((x + cursor_slot * slot_w) as i32, body_y as i32),
        size: Size::new(slot_w, body_h),
        color: BLACK,
        width: 2,
    });

    // Digit glyphs and the RPM confirm label
    let glyph_y = (body_y + body_h / 2) as i32 + 8;
    for (slot, digit) in entry.digits().iter().enumerate() {
        let mut glyph: String<4> = String::new();
        let _ = write!(glyph, "{digit}");
        cmds.push(text_command(
            &glyph,
            Point::new((x + slot as u32 * slot_w + slot_w / 2) as i32, glyph_y),
            BLACK,
            FontClass::ValueLarge,
            Alignment::Center,
        ));
    }
    cmds.push(text_command(
        "RPM",
        Point::new((x + 4 * slot_w + slot_w / 2) as i32, (body_y + body_h / 2) as i32 + 4),
        BLACK,
        FontClass::Title,
        Alignment::Center,
    ));

    cmds
}

// =============================================================================
// Unit Tests
// =============================================================================
