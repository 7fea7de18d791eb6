//! Startup instruction panel.
//!
//! Shown on boot and whenever the Startup mode is selected: a short manual
//! for the HID controls and the diff-switch color legend. Plain left-aligned
//! label text, one command per line.

use embedded_graphics::{prelude::*, text::Alignment};

use crate::{
    colors::{BLACK, WHITE},
    render::{CommandList, DrawCommand, FontClass, text_command},
};

/// Instruction lines, pre-wrapped for the panel width.
const INSTRUCTIONS: &[&str] = &[
    "HID CONTROL",
    " CENTER: open menu / select",
    " LEFT/RIGHT: move menu",
    " UP/DOWN: adjust value",
    " Two-Step: UP/DOWN digit,",
    "  CENTER next, confirm to set",
    "",
    "SWITCH CONTROL",
    " OPEN: GREEN",
    " SEMI: BLUE",
    " LOCKED: RED",
];

/// Line pitch in pixels for the label font.
const LINE_HEIGHT: i32 = 8;

/// Render the startup instructions into the panel viewport.
pub fn draw_startup(x: u32, y: u32, w: u32, h: u32) -> CommandList {
    let mut cmds = CommandList::new();

    cmds.push(DrawCommand::FillRect {
        top_left: Point::new(x as i32, y as i32),
        size: Size::new(w, h),
        color: BLACK,
    });

    let left = x as i32 + 4;
    let mut line_y = y as i32 + 8;
    for line in INSTRUCTIONS {
        if line_y >= (y + h) as i32 {
            break;
        }
        if !line.is_empty() {
            cmds.push(text_command(line, Point::new(left, line_y), WHITE, FontClass::Label, Alignment::Left));
        }
        line_y += LINE_HEIGHT;
    }

    cmds
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idempotent() {
        assert_eq!(draw_startup(96, 200, 192, 99), draw_startup(96, 200, 192, 99));
    }

    #[test]
    fn test_contains_both_manuals() {
        let cmds = draw_startup(96, 200, 192, 99);
        let texts: Vec<_> = cmds
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str().to_owned()),
                _ => None,
            })
            .collect();
        assert!(texts.iter().any(|t| t == "HID CONTROL"));
        assert!(texts.iter().any(|t| t == "SWITCH CONTROL"));
    }

    #[test]
    fn test_lines_stay_inside_viewport() {
        let cmds = draw_startup(0, 0, 192, 40);
        for cmd in &cmds {
            if let DrawCommand::Text { position, .. } = cmd {
                assert!(position.y < 40, "Line at y={} overflows a short panel", position.y);
            }
        }
    }
}
