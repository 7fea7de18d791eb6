//! Diagnostic panel for unavailable modes.
//!
//! Any mode selection the dispatcher cannot serve lands here: the failure is
//! rendered, loudly, instead of leaving a stale or blank panel. With the
//! closed [`crate::modes::Mode`] enum an unknown mode cannot exist, so in
//! practice this covers modes whose panel is not implemented.

use embedded_graphics::{prelude::*, text::Alignment};

use crate::{
    colors::{BLACK, RED, WHITE},
    render::{CommandList, DrawCommand, FontClass, text_command},
};

use core::fmt::Write;
use heapless::String;

/// Render the diagnostic panel naming the unserved mode.
pub fn draw_diagnostic(mode_label: &str, x: u32, y: u32, w: u32, h: u32) -> CommandList {
    let mut cmds = CommandList::new();

    cmds.push(DrawCommand::FillRect {
        top_left: Point::new(x as i32, y as i32),
        size: Size::new(w, h),
        color: BLACK,
    });

    let cx = (x + w / 2) as i32;
    cmds.push(text_command(
        "PANEL ERROR",
        Point::new(cx, y as i32 + 20),
        RED,
        FontClass::Title,
        Alignment::Center,
    ));

    let mut line: String<48> = String::new();
    let _ = write!(line, "{mode_label} IS NOT AVAILABLE");
    cmds.push(text_command(
        &line,
        Point::new(cx, (y + h / 2) as i32 + 6),
        WHITE,
        FontClass::Label,
        Alignment::Center,
    ));
    cmds.push(text_command(
        "REOPEN FROM MENU",
        Point::new(cx, (y + h / 2) as i32 + 18),
        WHITE,
        FontClass::Label,
        Alignment::Center,
    ));

    cmds
}

// =============================================================================
// Unit Tests
// =============================================================================
