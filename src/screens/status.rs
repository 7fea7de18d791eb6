//! Competition status panel.
//!
//! The panel the driver sees while racing: the committed two-step bounds
//! (or a reminder that none are set). The session's warning light is a
//! separate widget composed alongside this panel by the host.

use embedded_graphics::{prelude::*, text::Alignment};

use crate::{
    colors::{BLACK, WHITE, YELLOW},
    render::{CommandList, DrawCommand, FontClass, text_command},
    twostep::RpmBounds,
};

use core::fmt::Write;
use heapless::String;

/// Render the competition status into the panel viewport.
pub fn draw_status(bounds: Option<RpmBounds>, x: u32, y: u32, w: u32, h: u32) -> CommandList {
    let mut cmds = CommandList::new();

    cmds.push(DrawCommand::FillRect {
        top_left: Point::new(x as i32, y as i32),
        size: Size::new(w, h),
        color: BLACK,
    });

    let cx = (x + w / 2) as i32;
    cmds.push(text_command(
        "COMPETITION",
        Point::new(cx, y as i32 + 18),
        WHITE,
        FontClass::Title,
        Alignment::Center,
    ));

    match bounds {
        Some(RpmBounds { upper, lower }) => {
            let mut line: String<32> = String::new();
            let _ = write!(line, "2-STEP {lower}-{upper} RPM");
            cmds.push(text_command(
                &line,
                Point::new(cx, (y + h / 2) as i32 + 6),
                WHITE,
                FontClass::Label,
                Alignment::Center,
            ));
        }
        None => {
            cmds.push(text_command(
                "2-STEP NOT SET",
                Point::new(cx, (y + h / 2) as i32 + 6),
                YELLOW,
                FontClass::Label,
                Alignment::Center,
            ));
        }
    }

    cmds
}

// =============================================================================
// Unit Tests
// =============================================================================
