//! Bounded gauge value state with wrap-around mutation.
//!
//! Every gauge owns one [`GaugeState`]: a current value and a full-scale
//! maximum. Mutations wrap modulo `max_value + 1` instead of clamping, so a
//! value driven past either end of the scale re-enters from the other side.
//! This is the deliberate behavior for cyclic instrument values; the
//! invariant `0 <= value <= max_value` holds after every mutation.
//!
//! # Negative Operands
//!
//! `%` in Rust follows the sign of the dividend, so `(0 - 1) % (max + 1)`
//! would be negative. Mutations use `rem_euclid`, which always yields a
//! non-negative remainder, so decrements below zero wrap to `max_value`.
//!
//! # Construction Contract
//!
//! `max_value <= 0` is rejected at construction with
//! [`GaugeError::NonPositiveMax`]. There are no other runtime guards; the
//! wrap arithmetic cannot divide by zero once construction succeeds.

use thiserror::Error;

/// Errors from gauge construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GaugeError {
    /// The full-scale maximum must be strictly positive.
    #[error("gauge max_value must be positive, got {0}")]
    NonPositiveMax(i32),
}

/// A bounded instrument value with wrap-around semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaugeState {
    value: i32,
    max_value: i32,
}

impl GaugeState {
    /// Create a gauge state at zero with the given full-scale maximum.
    ///
    /// Returns [`GaugeError::NonPositiveMax`] if `max_value <= 0`.
    pub fn new(max_value: i32) -> Result<Self, GaugeError> {
        if max_value <= 0 {
            return Err(GaugeError::NonPositiveMax(max_value));
        }
        Ok(Self { value: 0, max_value })
    }

    /// Current value, always in `[0, max_value]`.
    #[inline]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Full-scale maximum, always positive.
    #[inline]
    pub const fn max_value(&self) -> i32 {
        self.max_value
    }

    /// Add `delta` to the value, wrapping into `[0, max_value]`.
    ///
    /// Total for any `delta`, including negative deltas larger than the
    /// scale: `rem_euclid` normalizes the result to a non-negative value.
    pub fn add(&mut self, delta: i32) {
        self.value = (self.value + delta).rem_euclid(self.max_value + 1);
    }

    /// Set the value absolutely, wrapping into `[0, max_value]`.
    pub fn set(&mut self, new_value: i32) {
        self.value = new_value.rem_euclid(self.max_value + 1);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
