//! Application configuration constants.
//!
//! Layout calculations like `SCREEN_HEIGHT / 15` are computed at compile time
//! as `const`, avoiding per-frame arithmetic. The cluster layout is a fixed
//! set of viewport rectangles; every widget receives its viewport each frame
//! and derives all of its geometry from it, so a layout change here is the
//! only thing that ever moves a gauge.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (480x320 automotive TFT).
pub const SCREEN_WIDTH: u32 = 480;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 320;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Frames between banner rotations (500 frames = 10 s at 50 FPS).
pub const BANNER_INTERVAL: u32 = 500;

/// Frame-count divisor for the warning light blink (~4 Hz toggle at 50 FPS).
pub const BLINK_DIVISOR: u32 = 6;

// =============================================================================
// Cluster Layout (pre-computed viewport rectangles)
// =============================================================================
//
// ┌────────┬──────────────┬──────────────┐
// │        │              │    SPEED     │
// │  TEMP  │     TACH     ├──────────────┤
// │        │              │    FUEL      │
// │        ├──────────────┼──────────────┤
// │        │    PANEL     │    BANNER    │
// ├────────┴──────────────┴──────────────┤
// │              MENU BAR                │
// └──────────────────────────────────────┘

/// Menu bar height: bottom 1/15th of the screen.
pub const MENU_HEIGHT: u32 = SCREEN_HEIGHT / 15;

/// Vertical space above the menu bar, shared by the gauge cluster.
pub const BODY_HEIGHT: u32 = SCREEN_HEIGHT - MENU_HEIGHT;

/// Temperature gauge column width (left edge).
pub const TEMP_W: u32 = 96;

/// Tachometer / variable panel column width (center).
pub const TACH_W: u32 = 192;

/// Right column width (speed, fuel, banner).
pub const RIGHT_W: u32 = SCREEN_WIDTH - TEMP_W - TACH_W;

/// Tachometer viewport height; the variable panel takes the rest of the column.
pub const TACH_H: u32 = 200;

/// Variable panel height (below the tachometer).
pub const PANEL_H: u32 = BODY_HEIGHT - TACH_H;

/// Speed readout viewport height (top of the right column).
pub const SPEED_H: u32 = 120;

/// Fuel gauge viewport height (middle of the right column).
pub const FUEL_H: u32 = 120;

/// Banner viewport height (bottom of the right column).
pub const BANNER_H: u32 = BODY_HEIGHT - SPEED_H - FUEL_H;

/// X origin of the center column (tachometer and variable panel).
pub const CENTER_COL_X: u32 = TEMP_W;

/// X origin of the right column (speed, fuel, banner).
pub const RIGHT_COL_X: u32 = TEMP_W + TACH_W;

// =============================================================================
// Gauge Shape Constants
// =============================================================================
//
// Each gauge scales its geometry by `min(w, h) / 2 * k` for a per-gauge shape
// constant `k`, so the whole cluster resizes proportionally.

/// Temperature bar gauge shape constant.
pub const TEMP_SHAPE: f32 = 0.7;

/// Tachometer shape constant.
pub const TACH_SHAPE: f32 = 0.8;

/// Fuel gauge shape constant.
pub const FUEL_SHAPE: f32 = 0.8;

/// Speed readout shape constant (text only, full scale).
pub const SPEED_SHAPE: f32 = 1.0;

// =============================================================================
// Gauge Scale Defaults
// =============================================================================

/// Temperature gauge full-scale value (degrees C).
pub const TEMP_MAX: i32 = 300;

/// Tachometer full-scale value (RPM).
pub const TACH_MAX: i32 = 5000;

/// Fuel gauge full-scale value (percent).
pub const FUEL_MAX: i32 = 100;

/// Speed readout full-scale value (MPH).
pub const SPEED_MAX: i32 = 200;

// =============================================================================
// Rendering Detail
// =============================================================================

/// Number of solid-color segments used to approximate a gradient fill.
pub const GRADIENT_SEGMENTS: u32 = 24;
