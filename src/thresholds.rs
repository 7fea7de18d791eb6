//! Centralized level-band thresholds.
//!
//! Thresholds are compile-time constants with ordering assertions, so a
//! misconfigured band (`CAUTION > HEALTHY`) fails the build instead of
//! silently recoloring a gauge.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{GREEN, RED, YELLOW};

// =============================================================================
// Fuel Level Bands
// =============================================================================

/// Fraction of full scale at or above which the fuel fill is green.
pub const FUEL_HEALTHY: f32 = 0.4;

/// Fraction of full scale at or above which the fuel fill is yellow.
/// Below this the fill is red.
pub const FUEL_CAUTION: f32 = 0.2;

// Compile-time validation: bands must be in descending order
const _: () = assert!(FUEL_CAUTION < FUEL_HEALTHY);

/// Fill color for the current fuel level.
///
/// Banded, not blended: the fuel arc snaps between green, yellow and red at
/// the band boundaries. Values are pre-wrapped to `[0, max_value]` by the
/// gauge state, so there is no below-zero band.
pub fn fuel_level_color(value: i32, max_value: i32) -> Rgb565 {
    let level = value as f32 / max_value as f32;
    if level >= FUEL_HEALTHY {
        GREEN
    } else if level >= FUEL_CAUTION {
        YELLOW
    } else {
        RED
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
