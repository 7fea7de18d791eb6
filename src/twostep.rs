//! Two-step RPM bound entry state machine.
//!
//! The two-step feature limits engine RPM between a configured upper and
//! lower bound. The driver enters each bound as four digits through the HID:
//! the cursor walks D1..D4 then a confirm slot, first for the upper bound,
//! then for the lower. Only the terminal commit emits anything; confirming
//! the upper bound is internal to the session.
//!
//! Validation contract (explicit, not inferred): a pair is accepted only
//! when `lower < upper`, strictly. A rejected pair puts the session in a
//! sticky [`SessionStatus::Invalid`] state - no edits are accepted and there
//! is no partial correction path; recovery is a full [`TwoStepEntry::reset`],
//! performed when the mode is re-entered.
//!
//! States are closed enums with exhaustive matching, so an unknown
//! phase/cursor is a compile-time impossibility.

use log::info;

/// A validated pair of RPM bounds, emitted on commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RpmBounds {
    pub upper: u16,
    pub lower: u16,
}

/// Which bound the session is currently editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundPhase {
    Upper,
    Lower,
}

/// Cursor over the four digit slots and the confirm slot.
///
/// Ordered, no wraparound within a phase: `advance` walks D1 through
/// Confirm; the cursor returns to D1 only on phase change or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitCursor {
    D1,
    D2,
    D3,
    D4,
    Confirm,
}

impl DigitCursor {
    /// Next slot in entry order; Confirm has no successor here (the phase
    /// transition handles it).
    const fn next(self) -> Self {
        match self {
            Self::D1 => Self::D2,
            Self::D2 => Self::D3,
            Self::D3 => Self::D4,
            Self::D4 | Self::Confirm => Self::Confirm,
        }
    }

    /// Index into the digit array, or `None` for the confirm slot.
    pub const fn digit_index(self) -> Option<usize> {
        match self {
            Self::D1 => Some(0),
            Self::D2 => Some(1),
            Self::D3 => Some(2),
            Self::D4 => Some(3),
            Self::Confirm => None,
        }
    }
}

/// Lifecycle of one entry session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// Accepting digit edits and advances.
    #[default]
    Editing,
    /// A valid pair was committed; terminal until reset.
    Committed,
    /// The pair was rejected (`lower >= upper`); sticky until reset.
    Invalid,
}

/// Consumer of committed bounds (vehicle bus, persistence layer).
///
/// The machine only produces the validated pair; how it is transmitted is
/// the host's concern.
pub trait BoundsSink {
    fn send(&mut self, bounds: RpmBounds);
}

/// Sink that logs committed bounds; stands in for the vehicle bus in the
/// simulator.
#[derive(Debug, Default)]
pub struct LoggingSink;

impl BoundsSink for LoggingSink {
    fn send(&mut self, bounds: RpmBounds) {
        info!("two-step bounds committed: upper={} lower={}", bounds.upper, bounds.lower);
    }
}

/// The digit-entry state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoStepEntry {
    phase: BoundPhase,
    cursor: DigitCursor,
    digits: [u8; 4],
    captured_upper: Option<u16>,
    captured_lower: Option<u16>,
    status: SessionStatus,
}

impl TwoStepEntry {
    /// Fresh session: upper phase, cursor on the first digit, all zeros.
    pub const fn new() -> Self {
        Self {
            phase: BoundPhase::Upper,
            cursor: DigitCursor::D1,
            digits: [0; 4],
            captured_upper: None,
            captured_lower: None,
            status: SessionStatus::Editing,
        }
    }

    /// Current editing phase.
    #[inline]
    pub const fn phase(&self) -> BoundPhase {
        self.phase
    }

    /// Current cursor slot.
    #[inline]
    pub const fn cursor(&self) -> DigitCursor {
        self.cursor
    }

    /// The four digit values currently shown, each in `[0, 9]`.
    #[inline]
    pub const fn digits(&self) -> [u8; 4] {
        self.digits
    }

    /// Session lifecycle status.
    #[inline]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// Upper bound snapshot, set once the upper phase is confirmed.
    #[inline]
    pub const fn captured_upper(&self) -> Option<u16> {
        self.captured_upper
    }

    /// Lower bound snapshot, set once the lower phase is confirmed.
    #[inline]
    pub const fn captured_lower(&self) -> Option<u16> {
        self.captured_lower
    }

    /// Increment or decrement the digit under the cursor, wrapping mod 10.
    ///
    /// No-op when the cursor is on the confirm slot or the session has left
    /// the editing state.
    pub fn adjust_digit(&mut self, delta: i32) {
        if self.status != SessionStatus::Editing {
            return;
        }
        if let Some(index) = self.cursor.digit_index() {
            self.digits[index] = (i32::from(self.digits[index]) + delta).rem_euclid(10) as u8;
        }
    }

    /// Move to the next slot; from the confirm slot, close out the phase.
    ///
    /// Confirming the upper bound snapshots it, clears the digits and starts
    /// the lower phase - nothing is emitted. Confirming the lower bound
    /// validates the pair: `Some(bounds)` on commit, `None` (and sticky
    /// invalid state) on rejection. No-op once committed or invalid.
    pub fn advance(&mut self) -> Option<RpmBounds> {
        if self.status != SessionStatus::Editing {
            return None;
        }

        if self.cursor != DigitCursor::Confirm {
            self.cursor = self.cursor.next();
            return None;
        }

        match self.phase {
            BoundPhase::Upper => {
                self.captured_upper = Some(self.digits_value());
                self.digits = [0; 4];
                self.phase = BoundPhase::Lower;
                self.cursor = DigitCursor::D1;
                None
            }
            BoundPhase::Lower => {
                let lower = self.digits_value();
                self.captured_lower = Some(lower);
                match self.captured_upper {
                    Some(upper) if lower < upper => {
                        self.status = SessionStatus::Committed;
                        Some(RpmBounds { upper, lower })
                    }
                    _ => {
                        self.status = SessionStatus::Invalid;
                        None
                    }
                }
            }
        }
    }

    /// Return to `Upper`/`D1` with all digit and captured state cleared.
    ///
    /// Callable from any state; clears the sticky invalid flag. Invoked
    /// when the two-step mode is (re-)entered.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Value of the current digits: `d1*1000 + d2*100 + d3*10 + d4`.
    fn digits_value(&self) -> u16 {
        u16::from(self.digits[0]) * 1000
            + u16::from(self.digits[1]) * 100
            + u16::from(self.digits[2]) * 10
            + u16::from(self.digits[3])
    }
}

impl Default for TwoStepEntry {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test sink that records every emitted pair.
    #[derive(Default)]
    struct RecordingSink {
        sent: Vec<RpmBounds>,
    }

    impl BoundsSink for RecordingSink {
        fn send(&mut self, bounds: RpmBounds) {
            self.sent.push(bounds);
        }
    }

    /// Enter four digits and confirm the current phase.
    fn enter_bound(entry: &mut TwoStepEntry, digits: [u8; 4]) -> Option<RpmBounds> {
        for digit in digits {
            for _ in 0..digit {
                entry.adjust_digit(1);
            }
            entry.advance();
        }
        // Cursor is now on Confirm
        entry.advance()
    }

    // -------------------------------------------------------------------------
    // Digit Editing Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_adjust_digit_increments() {
        let mut entry = TwoStepEntry::new();
        entry.adjust_digit(1);
        entry.adjust_digit(1);
        assert_eq!(entry.digits(), [2, 0, 0, 0]);
    }

    #[test]
    fn test_adjust_digit_wraps_mod_ten() {
        let mut entry = TwoStepEntry::new();
        for _ in 0..10 {
            entry.adjust_digit(1);
        }
        assert_eq!(entry.digits(), [0, 0, 0, 0], "Ten increments return a digit to its start");
    }

    #[test]
    fn test_adjust_digit_negative_wraps() {
        let mut entry = TwoStepEntry::new();
        entry.adjust_digit(-1);
        assert_eq!(entry.digits(), [9, 0, 0, 0], "Decrement from 0 wraps to 9");
    }

    #[test]
    fn test_adjust_digit_noop_on_confirm_slot() {
        let mut entry = TwoStepEntry::new();
        for _ in 0..4 {
            entry.advance();
        }
        assert_eq!(entry.cursor(), DigitCursor::Confirm);
        entry.adjust_digit(1);
        assert_eq!(entry.digits(), [0, 0, 0, 0], "Confirm slot has no digit to adjust");
    }

    // -------------------------------------------------------------------------
    // Cursor Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_cursor_walks_in_order() {
        let mut entry = TwoStepEntry::new();
        assert_eq!(entry.cursor(), DigitCursor::D1);
        entry.advance();
        assert_eq!(entry.cursor(), DigitCursor::D2);
        entry.advance();
        assert_eq!(entry.cursor(), DigitCursor::D3);
        entry.advance();
        assert_eq!(entry.cursor(), DigitCursor::D4);
        entry.advance();
        assert_eq!(entry.cursor(), DigitCursor::Confirm);
    }

    #[test]
    fn test_digit_edits_target_cursor_slot() {
        let mut entry = TwoStepEntry::new();
        entry.adjust_digit(1); // D1 = 1
        entry.advance();
        entry.adjust_digit(2); // D2 = 2
        entry.advance();
        entry.advance(); // skip D3
        entry.adjust_digit(-1); // D4 = 9
        assert_eq!(entry.digits(), [1, 2, 0, 9]);
    }

    // -------------------------------------------------------------------------
    // Phase Transition Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_upper_confirm_snapshots_and_restarts() {
        let mut entry = TwoStepEntry::new();
        let emitted = enter_bound(&mut entry, [0, 1, 0, 0]);

        assert_eq!(emitted, None, "Confirming the upper bound emits nothing");
        assert_eq!(entry.captured_upper(), Some(100));
        assert_eq!(entry.phase(), BoundPhase::Lower);
        assert_eq!(entry.cursor(), DigitCursor::D1);
        assert_eq!(entry.digits(), [0, 0, 0, 0], "Digits reset for the lower phase");
        assert_eq!(entry.status(), SessionStatus::Editing);
    }

    // -------------------------------------------------------------------------
    // Commit / Rejection Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_commit_emits_validated_pair() {
        // Upper 0,1,0,0 -> 1000; Lower 0,0,5,0 -> 50; 50 < 1000 commits.
        let mut entry = TwoStepEntry::new();
        let mut sink = RecordingSink::default();

        assert_eq!(enter_bound(&mut entry, [0, 1, 0, 0]), None);
        let emitted = enter_bound(&mut entry, [0, 0, 5, 0]);

        let bounds = emitted.expect("valid pair should commit");
        assert_eq!(bounds, RpmBounds { upper: 1000, lower: 50 });
        assert_eq!(entry.status(), SessionStatus::Committed);

        sink.send(bounds);
        assert_eq!(sink.sent, vec![RpmBounds { upper: 1000, lower: 50 }]);
    }

    #[test]
    fn test_rejection_is_sticky() {
        // Upper 0,0,5,0 -> 50; Lower 0,1,0,0 -> 1000; 1000 >= 50 rejects.
        let mut entry = TwoStepEntry::new();

        assert_eq!(enter_bound(&mut entry, [0, 0, 5, 0]), None);
        let emitted = enter_bound(&mut entry, [0, 1, 0, 0]);

        assert_eq!(emitted, None, "Rejected pair emits nothing");
        assert_eq!(entry.status(), SessionStatus::Invalid);

        // Sticky: no further edits or advances are accepted.
        entry.adjust_digit(1);
        assert_eq!(entry.digits(), [0, 1, 0, 0], "Invalid state accepts no digit edits");
        assert_eq!(entry.advance(), None, "Invalid state accepts no advances");
        assert_eq!(entry.status(), SessionStatus::Invalid);
    }

    #[test]
    fn test_equal_bounds_rejected() {
        // lower == upper fails the strict less-than contract.
        let mut entry = TwoStepEntry::new();
        enter_bound(&mut entry, [0, 0, 5, 0]);
        let emitted = enter_bound(&mut entry, [0, 0, 5, 0]);
        assert_eq!(emitted, None, "Equal bounds must be rejected (strict less-than)");
        assert_eq!(entry.status(), SessionStatus::Invalid);
    }

    #[test]
    fn test_committed_state_is_terminal() {
        let mut entry = TwoStepEntry::new();
        enter_bound(&mut entry, [0, 1, 0, 0]);
        enter_bound(&mut entry, [0, 0, 5, 0]);
        assert_eq!(entry.status(), SessionStatus::Committed);

        assert_eq!(entry.advance(), None, "Committed session emits nothing further");
        entry.adjust_digit(1);
        assert_eq!(entry.digits(), [0, 0, 5, 0], "Committed session accepts no edits");
    }

    // -------------------------------------------------------------------------
    // Reset Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_reset_clears_invalid() {
        let mut entry = TwoStepEntry::new();
        enter_bound(&mut entry, [0, 0, 5, 0]);
        enter_bound(&mut entry, [0, 1, 0, 0]);
        assert_eq!(entry.status(), SessionStatus::Invalid);

        entry.reset();

        assert_eq!(entry.status(), SessionStatus::Editing);
        assert_eq!(entry.phase(), BoundPhase::Upper);
        assert_eq!(entry.cursor(), DigitCursor::D1);
        assert_eq!(entry.digits(), [0, 0, 0, 0]);
        assert_eq!(entry.captured_upper(), None);
        assert_eq!(entry.captured_lower(), None);
    }

    #[test]
    fn test_reset_mid_entry() {
        let mut entry = TwoStepEntry::new();
        enter_bound(&mut entry, [0, 1, 0, 0]);
        entry.adjust_digit(3);
        entry.advance();

        entry.reset();
        assert_eq!(entry, TwoStepEntry::new(), "Reset is equivalent to a fresh session");
    }
}
