//! Cyclic team banner.
//!
//! Rotates through a fixed set of drawn frames on a frame-count timer -
//! one frame every [`crate::config::BANNER_INTERVAL`] loop iterations. The
//! host calls [`Banner::tick`] once per frame; rotation and rendering never
//! touch wall-clock time, so the widget stays deterministic under test.

use embedded_graphics::{prelude::*, text::Alignment};

use crate::{
    colors::{BLACK, WHITE},
    config::BANNER_INTERVAL,
    render::{CommandList, DrawCommand, FontClass, text_command},
};

/// Cyclic banner widget.
pub struct Banner {
    frames: &'static [&'static str],
    current: usize,
    frame_counter: u32,
    dirty: bool,
}

impl Banner {
    /// Create a banner cycling through `frames` in order.
    pub const fn new(frames: &'static [&'static str]) -> Self {
        Self {
            frames,
            current: 0,
            frame_counter: 0,
            dirty: true,
        }
    }

    /// Index of the frame currently shown.
    #[inline]
    pub const fn current_frame(&self) -> usize {
        self.current
    }

    /// Advance the rotation timer by one loop iteration.
    ///
    /// Rotates to the next frame (wrapping to the first) every
    /// `BANNER_INTERVAL` ticks.
    pub fn tick(&mut self) {
        if self.frames.len() < 2 {
            return;
        }
        self.frame_counter += 1;
        if self.frame_counter >= BANNER_INTERVAL {
            self.frame_counter = 0;
            self.current = (self.current + 1) % self.frames.len();
            self.dirty = true;
        }
    }

    /// Consume the dirty flag; true if the frame changed since last taken.
    pub const fn take_dirty(&mut self) -> bool {
        let dirty = self.dirty;
        self.dirty = false;
        dirty
    }

    /// Render the current frame into the viewport.
    pub fn render(&self, x: u32, y: u32, w: u32, h: u32) -> CommandList {
        let mut cmds = CommandList::new();

        cmds.push(DrawCommand::FillRect {
            top_left: Point::new(x as i32, y as i32),
            size: Size::new(w, h),
            color: BLACK,
        });
        cmds.push(DrawCommand::RectOutline {
            top_left: Point::new(x as i32 + 2, y as i32 + 2),
            size: Size::new(w.saturating_sub(4), h.saturating_sub(4)),
            color: WHITE,
            width: 1,
        });

        if let Some(frame) = self.frames.get(self.current) {
            cmds.push(text_command(
                frame,
                Point::new((x + w / 2) as i32, (y + h / 2) as i32 + 3),
                WHITE,
                FontClass::Label,
                Alignment::Center,
            ));
        }

        cmds
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
