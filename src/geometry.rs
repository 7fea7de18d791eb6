//! Pure gauge geometry: value-to-length and value-to-angle mapping, tick
//! placement, and gradient color sampling.
//!
//! Everything in this module is a pure function of `(value, max_value)` and
//! the current viewport-derived size factor. Nothing is cached; widgets call
//! back in on every render so a resize can never serve stale geometry.
//!
//! # Angle Convention
//!
//! Angles are degrees, 0° at three o'clock, increasing counterclockwise
//! (the convention shared by `embedded_graphics::geometry::Angle`). Negative
//! sweeps run clockwise.
//!
//! # Scale Model
//!
//! The tachometer is a two-segment gauge: a quarter arc covers the lower
//! half of the scale `[0, max/2]`, then a straight run along the top covers
//! the upper half `(max/2, max]`. The arc saturates at its mechanical
//! quarter-turn limit (-90° sweep) before the run engages. Single-arc gauges
//! (fuel) map the whole scale linearly onto their configured sweep.

use embedded_graphics::{pixelcolor::Rgb565, prelude::IntoStorage};

use crate::colors::{GREEN, RED, YELLOW};

// =============================================================================
// Arc Layout Constants
// =============================================================================

/// Start angle of the tachometer backing arc (twelve o'clock).
pub const TACH_BACKING_START: f32 = 90.0;

/// Sweep of the tachometer backing arc (quarter turn up to nine o'clock).
pub const TACH_BACKING_SWEEP: f32 = 90.0;

/// Start angle of the tachometer fill arc (nine o'clock, sweeping clockwise).
pub const TACH_FILL_START: f32 = 180.0;

/// Start angle of the fuel gauge arc (just past nine o'clock, "E" end).
pub const FUEL_ARC_START: f32 = 170.0;

/// Total sweep of the fuel gauge arc, "E" to "F".
pub const FUEL_ARC_SWEEP: f32 = 200.0;

// =============================================================================
// Tick Configuration
// =============================================================================

/// Labeled major ticks on linear and tachometer scales (0%..100% in fifths).
pub const MAJOR_TICKS: usize = 6;

/// Tick count on the fuel arc (one every 25 degrees).
pub const FUEL_TICKS: usize = 9;

// =============================================================================
// Size Factor
// =============================================================================

/// Scale factor for all gauge geometry within a viewport.
///
/// `min(w, h) / 2 * shape` - the shape constant is fixed per gauge type
/// (see [`crate::config`]), so every gauge resizes proportionally.
#[inline]
pub fn size_factor(w: u32, h: u32, shape: f32) -> f32 {
    w.min(h) as f32 / 2.0 * shape
}

// =============================================================================
// Fill Mapping
// =============================================================================

/// Fill length of a linear gauge bar.
///
/// `(value / (max * 0.5)) * size_factor` - full scale is twice the size
/// factor, i.e. the whole backing line. The result is not clamped here;
/// callers clip to the drawn backing extent (`2 * size_factor`).
#[inline]
pub fn linear_fill_length(value: i32, max_value: i32, size_factor: f32) -> f32 {
    (value as f32 / (max_value as f32 * 0.5)) * size_factor
}

/// Sweep of the tachometer fill arc in degrees (negative = clockwise).
///
/// `-(value / (max * 0.5)) * 90`, floor-clamped at -90: the arc never
/// over-rotates past its quarter-turn limit, even for values above half
/// scale (the straight run takes over there).
#[inline]
pub fn tach_arc_span(value: i32, max_value: i32) -> f32 {
    let span = -(value as f32 / (max_value as f32 * 0.5)) * 90.0;
    span.max(-90.0)
}

/// Length of the tachometer straight run for values above half scale.
///
/// Zero at or below half scale; engages only once the arc has saturated.
#[inline]
pub fn tach_run_length(value: i32, max_value: i32, size_factor: f32) -> f32 {
    let half = max_value as f32 * 0.5;
    if value as f32 <= half {
        0.0
    } else {
        (value as f32 - half) / half * size_factor
    }
}

/// Sweep of a single full-arc gauge in degrees.
///
/// Linear over the whole scale, no clamping - callers pre-wrap the value
/// into `[0, max_value]` (the `GaugeState` invariant guarantees this).
#[inline]
pub fn fuel_arc_span(value: i32, max_value: i32, total_span: f32) -> f32 {
    value as f32 / max_value as f32 * total_span
}

// =============================================================================
// Tick Placement
// =============================================================================

/// Fraction of full scale for tick `index` out of `count` evenly spaced
/// ticks (index 0 = 0%, index count-1 = 100%).
#[inline]
pub fn tick_fraction(index: usize, count: usize) -> f32 {
    index as f32 / (count - 1) as f32
}

/// Label value for a tick at `fraction` of full scale.
///
/// Integer truncation, not rounding: `(max * fraction) as i32`. The
/// truncation is part of the display contract and is pinned by tests.
#[inline]
pub fn tick_label(max_value: i32, fraction: f32) -> i32 {
    (max_value as f32 * fraction) as i32
}

/// Point at `radius` from `(cx, cy)` along `angle_deg`.
///
/// Screen coordinates: y grows downward, so counterclockwise angles
/// subtract from y.
#[inline]
pub fn polar(cx: f32, cy: f32, radius: f32, angle_deg: f32) -> (f32, f32) {
    let rad = angle_deg.to_radians();
    (cx + radius * rad.cos(), cy - radius * rad.sin())
}

// =============================================================================
// Gradient Sampling
// =============================================================================

/// One color stop of a gauge gradient, at a normalized position in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub position: f32,
    pub color: Rgb565,
}

/// Linear gauge gradient: red at the top of the bar, yellow at 20%, green at
/// the bottom. Fixed regardless of value - only the fill length varies.
pub const LINEAR_GRADIENT: [GradientStop; 3] = [
    GradientStop { position: 0.0, color: RED },
    GradientStop { position: 0.2, color: YELLOW },
    GradientStop { position: 1.0, color: GREEN },
];

/// Tachometer gradient, mirrored order: green at the top of the gauge,
/// yellow at 80%, red at the bottom.
pub const ARC_GRADIENT: [GradientStop; 3] = [
    GradientStop { position: 0.0, color: GREEN },
    GradientStop { position: 0.8, color: YELLOW },
    GradientStop { position: 1.0, color: RED },
];

/// Sample a gradient at normalized position `t`.
///
/// `t` is clamped to `[0, 1]`; between stops the color is interpolated,
/// outside the first/last stop the end color is returned. Stops must be
/// ordered by position (the const gradients above are).
pub fn gradient_color(stops: &[GradientStop], t: f32) -> Rgb565 {
    let t = t.clamp(0.0, 1.0);

    let mut prev = stops[0];
    if t <= prev.position {
        return prev.color;
    }
    for &stop in &stops[1..] {
        if t <= stop.position {
            let local = (t - prev.position) / (stop.position - prev.position);
            return lerp_rgb565(prev.color, stop.color, local);
        }
        prev = stop;
    }
    prev.color
}

/// Linear interpolation between two Rgb565 colors.
///
/// Operates on the raw 5/6/5 components with 8-bit fixed-point math, the
/// same scheme the display path uses elsewhere; `t` is in `[0, 1]`.
fn lerp_rgb565(from: Rgb565, to: Rgb565, t: f32) -> Rgb565 {
    let from_raw = from.into_storage();
    let to_raw = to.into_storage();

    let from_r = i32::from((from_raw >> 11) & 0x1F);
    let from_g = i32::from((from_raw >> 5) & 0x3F);
    let from_b = i32::from(from_raw & 0x1F);

    let to_r = i32::from((to_raw >> 11) & 0x1F);
    let to_g = i32::from((to_raw >> 5) & 0x3F);
    let to_b = i32::from(to_raw & 0x1F);

    // Fixed-point: 8 bits fractional
    let t_fixed = (t * 256.0) as i32;

    let new_r = from_r + (((to_r - from_r) * t_fixed) >> 8);
    let new_g = from_g + (((to_g - from_g) * t_fixed) >> 8);
    let new_b = from_b + (((to_b - from_b) * t_fixed) >> 8);

    Rgb565::new(
        new_r.clamp(0, 31) as u8,
        new_g.clamp(0, 63) as u8,
        new_b.clamp(0, 31) as u8,
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Size Factor Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_size_factor_uses_min_dimension() {
        assert_eq!(size_factor(200, 100, 1.0), 50.0, "Height-limited viewport");
        assert_eq!(size_factor(100, 200, 1.0), 50.0, "Width-limited viewport");
    }

    #[test]
    fn test_size_factor_applies_shape_constant() {
        assert_eq!(size_factor(100, 100, 0.8), 40.0);
        assert_eq!(size_factor(100, 100, 0.7), 35.0);
    }

    // -------------------------------------------------------------------------
    // Linear Fill Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_linear_fill_zero() {
        assert_eq!(linear_fill_length(0, 300, 70.0), 0.0);
    }

    #[test]
    fn test_linear_fill_half_scale_is_size_factor() {
        // value = max/2 fills exactly one size factor (half the backing line)
        assert_eq!(linear_fill_length(150, 300, 70.0), 70.0);
    }

    #[test]
    fn test_linear_fill_full_scale_is_backing_extent() {
        assert_eq!(
            linear_fill_length(300, 300, 70.0),
            140.0,
            "Full scale fills the whole 2 * size_factor backing line"
        );
    }

    #[test]
    fn test_linear_fill_unclamped() {
        // The mapping itself does not clamp; clipping to the backing extent
        // is the caller's job.
        assert!(linear_fill_length(400, 300, 70.0) > 140.0);
    }

    // -------------------------------------------------------------------------
    // Tachometer Arc Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_tach_arc_span_zero() {
        assert_eq!(tach_arc_span(0, 5000), 0.0);
    }

    #[test]
    fn test_tach_arc_span_quarter_scale() {
        assert_eq!(tach_arc_span(1250, 5000), -45.0, "Quarter scale sweeps half the arc");
    }

    #[test]
    fn test_tach_arc_span_saturates_at_half_scale() {
        assert_eq!(tach_arc_span(2500, 5000), -90.0, "Half scale saturates the arc");
    }

    #[test]
    fn test_tach_arc_span_clamped_at_max() {
        // The arc never over-rotates past its quarter-turn limit.
        assert_eq!(tach_arc_span(5000, 5000), -90.0, "Full scale stays exactly at -90");
        assert_eq!(tach_arc_span(4999, 5000), -90.0);
        for value in 0..=5000 {
            assert!(
                tach_arc_span(value, 5000) >= -90.0,
                "Span for {value} exceeded the mechanical limit"
            );
        }
    }

    #[test]
    fn test_tach_run_disengaged_below_half_scale() {
        assert_eq!(tach_run_length(0, 5000, 80.0), 0.0);
        assert_eq!(tach_run_length(2500, 5000, 80.0), 0.0, "Run engages only above half scale");
    }

    #[test]
    fn test_tach_run_length_above_half_scale() {
        assert_eq!(tach_run_length(3750, 5000, 80.0), 40.0, "3/4 scale runs half the line");
        assert_eq!(tach_run_length(5000, 5000, 80.0), 80.0, "Full scale runs the whole line");
    }

    // -------------------------------------------------------------------------
    // Fuel Arc Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_fuel_arc_span_linear() {
        assert_eq!(fuel_arc_span(0, 100, 200.0), 0.0);
        assert_eq!(fuel_arc_span(50, 100, 200.0), 100.0);
        assert_eq!(fuel_arc_span(100, 100, 200.0), 200.0);
    }

    // -------------------------------------------------------------------------
    // Tick Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_tick_fractions_evenly_spaced() {
        assert_eq!(tick_fraction(0, MAJOR_TICKS), 0.0);
        assert_eq!(tick_fraction(MAJOR_TICKS - 1, MAJOR_TICKS), 1.0);
        let step = tick_fraction(1, MAJOR_TICKS) - tick_fraction(0, MAJOR_TICKS);
        for i in 1..MAJOR_TICKS {
            let diff = tick_fraction(i, MAJOR_TICKS) - tick_fraction(i - 1, MAJOR_TICKS);
            assert!((diff - step).abs() < 1e-6, "Ticks should be evenly spaced");
        }
    }

    #[test]
    fn test_tick_label_truncates() {
        // int(300 * 0.6) = 180 by truncation - pinned because it is the
        // displayed label value.
        assert_eq!(tick_label(300, 0.6), 180);
        assert_eq!(tick_label(300, tick_fraction(3, MAJOR_TICKS)), 180);
    }

    #[test]
    fn test_tick_label_truncates_not_rounds() {
        // 333 * 0.8 = 266.4 -> 266, never 266.4 rounded up
        assert_eq!(tick_label(333, 0.8), 266);
        // 999 * 0.2 in f32 is 199.800... -> truncates to 199
        assert_eq!(tick_label(999, 0.2), 199);
    }

    #[test]
    fn test_tick_label_endpoints() {
        assert_eq!(tick_label(5000, 0.0), 0);
        assert_eq!(tick_label(5000, 1.0), 5000);
    }

    // -------------------------------------------------------------------------
    // Polar Placement Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_polar_cardinal_points() {
        let (x, y) = polar(100.0, 100.0, 50.0, 0.0);
        assert!((x - 150.0).abs() < 1e-3 && (y - 100.0).abs() < 1e-3, "0 deg is three o'clock");

        let (x, y) = polar(100.0, 100.0, 50.0, 90.0);
        assert!((x - 100.0).abs() < 1e-3 && (y - 50.0).abs() < 1e-3, "90 deg is twelve o'clock");

        let (x, y) = polar(100.0, 100.0, 50.0, 180.0);
        assert!((x - 50.0).abs() < 1e-3 && (y - 100.0).abs() < 1e-3, "180 deg is nine o'clock");
    }

    // -------------------------------------------------------------------------
    // Gradient Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_gradient_stops_ordered() {
        for stops in [&LINEAR_GRADIENT[..], &ARC_GRADIENT[..]] {
            for pair in stops.windows(2) {
                assert!(pair[0].position < pair[1].position, "Stops must be ordered by position");
            }
            assert_eq!(stops[0].position, 0.0);
            assert_eq!(stops[stops.len() - 1].position, 1.0);
        }
    }

    #[test]
    fn test_gradient_color_at_stops() {
        assert_eq!(gradient_color(&LINEAR_GRADIENT, 0.0), RED);
        assert_eq!(gradient_color(&LINEAR_GRADIENT, 0.2), YELLOW);
        assert_eq!(gradient_color(&LINEAR_GRADIENT, 1.0), GREEN);

        assert_eq!(gradient_color(&ARC_GRADIENT, 0.0), GREEN);
        assert_eq!(gradient_color(&ARC_GRADIENT, 0.8), YELLOW);
        assert_eq!(gradient_color(&ARC_GRADIENT, 1.0), RED);
    }

    #[test]
    fn test_gradient_color_clamps_out_of_range() {
        assert_eq!(gradient_color(&LINEAR_GRADIENT, -0.5), RED);
        assert_eq!(gradient_color(&LINEAR_GRADIENT, 1.5), GREEN);
    }

    #[test]
    fn test_gradient_color_interpolates_between_stops() {
        // Halfway between yellow (31,63,0) and green (0,63,0): red channel
        // should be roughly halved, green stays saturated.
        let mid = gradient_color(&LINEAR_GRADIENT, 0.6);
        let raw = mid.into_storage();
        let r = (raw >> 11) & 0x1F;
        let g = (raw >> 5) & 0x3F;
        assert!(r > 10 && r < 20, "Red channel should be near its midpoint, got {r}");
        assert_eq!(g, 63, "Green channel stays saturated between yellow and green");
    }

    #[test]
    fn test_lerp_rgb565_endpoints() {
        assert_eq!(lerp_rgb565(RED, GREEN, 0.0), RED);
        assert_eq!(lerp_rgb565(RED, GREEN, 1.0), GREEN);
        assert_eq!(lerp_rgb565(YELLOW, YELLOW, 0.5), YELLOW, "Lerp of equal colors is a no-op");
    }
}
