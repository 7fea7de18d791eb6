//! Color constants for the dashboard.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! This format is native to many embedded displays and requires no conversion
//! when writing to the display buffer. Where the `RgbColor` trait provides a
//! constant we use it directly for guaranteed optimal values.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Background of every viewport.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Tick marks, labels, value text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Hot end of gauge gradients, low fuel, warning light.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0). Cool end of gauge gradients, healthy fuel level.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure yellow (31, 63, 0). Gradient midpoint, fuel caution band.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Gauge backing grey, matching the 150/150/150 RGB888 backing of the
/// instrument faces. RGB565: (18, 37, 18).
pub const GAUGE_GREY: Rgb565 = Rgb565::new(18, 37, 18);

/// Light grey used for the two-step panel title strip.
/// RGB565: (25, 50, 25) - roughly 80% brightness.
pub const LIGHT_GREY: Rgb565 = Rgb565::new(25, 50, 25);
