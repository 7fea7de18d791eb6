//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! `TextStyle` is `const`-constructible in embedded-graphics 0.8, so the
//! alignment styles live in the binary's read-only data section and are
//! referenced without runtime construction. Character styles carry a dynamic
//! color, so the command painter builds them from the exposed font
//! references (`MonoTextStyle::new(LABEL_FONT, color)`) - only the color
//! varies per call, the font reference is shared.

use embedded_graphics::{
    mono_font::{
        MonoFont,
        ascii::{FONT_6X10, FONT_10X20},
    },
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Centered text alignment. Used for menu slots, digit slots, and readouts.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Used for the startup instruction panel.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. Used for tick labels flanking the temperature bar.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Font References (for the command painter's dynamic color styles)
// =============================================================================

/// Small label font (6x10 pixels). Tick labels, units, captions.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Medium font (10x20 pixels). Menu slots, panel titles.
pub const TITLE_FONT: &MonoFont = &FONT_10X20;

/// Medium value font (`ProFont` 18pt). Gauge value readouts.
pub const VALUE_FONT: &MonoFont = &PROFONT_18_POINT;

/// Large value font (`ProFont` 24pt). Speed readout and two-step digits.
pub const VALUE_FONT_LARGE: &MonoFont = &PROFONT_24_POINT;
