//! Bottom menu bar for mode selection.
//!
//! A white strip across the bottom 1/15th of the screen with three equal
//! slots: the previous mode, the currently selected mode (center), and the
//! next mode. Left/right HID presses move the selection cyclically; the
//! select press is handled by the host (it activates the center mode).

use embedded_graphics::{prelude::*, text::Alignment};

use crate::{
    colors::{BLACK, WHITE},
    modes::Mode,
    render::{CommandList, DrawCommand, FontClass, text_command},
};

/// Mode selection bar widget.
pub struct MenuBar {
    selected: Mode,
    dirty: bool,
}

impl MenuBar {
    /// Create a menu bar with the default mode selected.
    pub fn new() -> Self {
        Self {
            selected: Mode::default(),
            dirty: true,
        }
    }

    /// Currently selected (center) mode.
    #[inline]
    pub const fn selected(&self) -> Mode {
        self.selected
    }

    /// Move the selection by `steps` (positive = right, negative = left),
    /// wrapping cyclically through the mode list.
    pub fn move_selection(&mut self, steps: i32) {
        for _ in 0..steps.abs() {
            self.selected = if steps > 0 { self.selected.next() } else { self.selected.prev() };
        }
        if steps != 0 {
            self.dirty = true;
        }
    }

    /// Consume the dirty flag; true if the selection changed since last taken.
    pub const fn take_dirty(&mut self) -> bool {
        let dirty = self.dirty;
        self.dirty = false;
        dirty
    }

    /// Render the bar into its viewport.
    pub fn render(&self, x: u32, y: u32, w: u32, h: u32) -> CommandList {
        let mut cmds = CommandList::new();

        // White backing strip
        cmds.push(DrawCommand::FillRect {
            top_left: Point::new(x as i32, y as i32),
            size: Size::new(w, h),
            color: WHITE,
        });

        // Three equal slots: previous, selected, next
        let slot_w = w as f32 / 3.0;
        let text_y = (y + h / 2) as i32 + 4;
        let slots = [
            (self.selected.prev(), 0.5),
            (self.selected, 1.5),
            (self.selected.next(), 2.5),
        ];
        for (mode, slot_center) in slots {
            cmds.push(text_command(
                mode.label(),
                Point::new((x as f32 + slot_w * slot_center) as i32, text_y),
                BLACK,
                FontClass::Label,
                Alignment::Center,
            ));
        }

        cmds
    }
}

impl Default for MenuBar {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
