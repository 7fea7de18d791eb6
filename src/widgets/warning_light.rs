//! Show/hide warning indicator light.
//!
//! A colored disc with a caption, visible only while the alert it represents
//! is active. The host toggles it with [`WarningLight::show`] /
//! [`WarningLight::hide`] (and can blink it by toggling on a frame timer);
//! a hidden light renders nothing but its cleared background.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, text::Alignment};

use crate::{
    colors::BLACK,
    render::{CommandList, DrawCommand, FontClass, text_command},
};

/// Warning light widget.
pub struct WarningLight {
    caption: &'static str,
    color: Rgb565,
    visible: bool,
}

impl WarningLight {
    /// Create a hidden warning light with the given caption and disc color.
    pub const fn new(caption: &'static str, color: Rgb565) -> Self {
        Self {
            caption,
            color,
            visible: false,
        }
    }

    /// Turn the light on.
    pub const fn show(&mut self) {
        self.visible = true;
    }

    /// Turn the light off.
    pub const fn hide(&mut self) {
        self.visible = false;
    }

    /// Render the light into its viewport.
    pub fn render(&self, x: u32, y: u32, w: u32, h: u32) -> CommandList {
        let mut cmds = CommandList::new();

        cmds.push(DrawCommand::FillRect {
            top_left: Point::new(x as i32, y as i32),
            size: Size::new(w, h),
            color: BLACK,
        });

        if self.visible {
            let cx = (x + w / 2) as i32;
            let cy = (y + h / 2) as i32;
            let diameter = w.min(h) / 2;
            cmds.push(DrawCommand::Circle {
                center: Point::new(cx, cy - 4),
                diameter,
                color: self.color,
            });
            cmds.push(text_command(
                self.caption,
                Point::new(cx, (y + h) as i32 - 4),
                self.color,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::RED;

    #[test]
    fn test_hidden_renders_background_only() {
        let light = WarningLight::new("2-STEP", RED);
        let cmds = light.render(0, 0, 64, 64);
        assert_eq!(cmds.len(), 1, "Hidden light renders only its cleared background");
        assert!(matches!(cmds[0], DrawCommand::FillRect { color, .. } if color == BLACK));
    }

    #[test]
    fn test_visible_renders_disc_and_caption() {
        let mut light = WarningLight::new("2-STEP", RED);
        light.show();
        let cmds = light.render(0, 0, 64, 64);
        assert!(
            cmds.iter()
                .any(|cmd| matches!(cmd, DrawCommand::Circle { color, .. } if *color == RED)),
            "Visible light draws its disc"
        );
        assert!(
            cmds.iter()
                .any(|cmd| matches!(cmd, DrawCommand::Text { text, .. } if text.as_str() == "2-STEP")),
            "Visible light draws its caption"
        );
    }

    #[test]
    fn test_hide_clears_again() {
        let mut light = WarningLight::new("2-STEP", RED);
        light.show();
        light.hide();
        assert_eq!(
            light.render(0, 0, 64, 64).len(),
            1,
            "Hidden again: background only, so the disc never lingers"
        );
    }
}
