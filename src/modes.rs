//! Display mode selection for the variable panel.
//!
//! The bottom menu bar cycles through these modes; the selected mode decides
//! what the variable panel renders. A closed enum (instead of matching mode
//! name strings) makes an unrecognized mode a compile-time impossibility -
//! modes whose panel is not implemented still get a visible diagnostic panel
//! rather than a silent blank.

/// Selectable display modes, in menu order.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Mode {
    /// Startup instructions for the HID and diff-switch controls.
    #[default]
    Startup,

    /// Competition status panel (committed two-step bounds, warning light).
    Competition,

    /// Rear steer control panel (not implemented - diagnostic panel).
    RearSteer,

    /// Two-step RPM bound entry.
    TwoStep,

    /// Lap timing panel (not implemented - diagnostic panel).
    LapTime,
}

/// All modes in menu order. Shared by `next`/`prev` and the menu bar.
pub const ALL_MODES: [Mode; 5] = [
    Mode::Startup,
    Mode::Competition,
    Mode::RearSteer,
    Mode::TwoStep,
    Mode::LapTime,
];

impl Mode {
    /// Menu label for this mode.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Startup => "Startup",
            Self::Competition => "Competition",
            Self::RearSteer => "Rear Steer",
            Self::TwoStep => "Two-Step",
            Self::LapTime => "Lap Time",
        }
    }

    /// Position of this mode in menu order.
    const fn index(self) -> usize {
        match self {
            Self::Startup => 0,
            Self::Competition => 1,
            Self::RearSteer => 2,
            Self::TwoStep => 3,
            Self::LapTime => 4,
        }
    }

    /// Next mode in menu order, wrapping at the end.
    pub fn next(self) -> Self {
        ALL_MODES[(self.index() + 1) % ALL_MODES.len()]
    }

    /// Previous mode in menu order, wrapping at the start.
    pub fn prev(self) -> Self {
        ALL_MODES[(self.index() + ALL_MODES.len() - 1) % ALL_MODES.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_default() {
        assert_eq!(Mode::default(), Mode::Startup);
    }

    #[test]
    fn test_mode_next_cycles() {
        let mut mode = Mode::Startup;
        for _ in 0..ALL_MODES.len() {
            mode = mode.next();
        }
        assert_eq!(mode, Mode::Startup, "next() over all modes returns to the start");
    }

    #[test]
    fn test_mode_prev_cycles() {
        assert_eq!(Mode::Startup.prev(), Mode::LapTime, "prev() wraps from the first mode");
        let mut mode = Mode::TwoStep;
        for _ in 0..ALL_MODES.len() {
            mode = mode.prev();
        }
        assert_eq!(mode, Mode::TwoStep, "prev() over all modes returns to the start");
    }

    #[test]
    fn test_next_prev_inverse() {
        for &mode in &ALL_MODES {
            assert_eq!(mode.next().prev(), mode);
            assert_eq!(mode.prev().next(), mode);
        }
    }

    #[test]
    fn test_index_matches_menu_order() {
        for (i, &mode) in ALL_MODES.iter().enumerate() {
            assert_eq!(mode.index(), i, "index() must agree with ALL_MODES order");
        }
    }

    #[test]
    fn test_labels_unique() {
        for (i, a) in ALL_MODES.iter().enumerate() {
            for b in &ALL_MODES[i + 1..] {
                assert_ne!(a.label(), b.label(), "Menu labels must be distinct");
            }
        }
    }
}
