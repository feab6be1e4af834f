//! Breakpoint specifications and the match evaluator consulted by the
//! run-until-breakpoint driver.

use std::fmt;

use num_bigint::BigUint;

use crate::cursor::{Position, Timing};

/// Caller-supplied predicate over the register value.
pub type ValuePredicate = Box<dyn Fn(&BigUint) -> bool>;

/// A condition that pauses automatic advancement.
///
/// Dispatch is an exhaustive match on the variant, not an inspection of the
/// payload's capabilities.
pub enum Breakpoint {
    /// Fires when the register satisfies the predicate. Checked only while
    /// the engine holds an after-phase cursor, so the predicate can only
    /// observe a value an instruction has actually produced.
    Value(ValuePredicate),
    /// Fires when the engine position equals this position exactly,
    /// including the `Searching` marker and before-phase cursors.
    Position(Position),
}

impl Breakpoint {
    /// Boxes a value predicate.
    #[must_use]
    pub fn value<F>(predicate: F) -> Self
    where
        F: Fn(&BigUint) -> bool + 'static,
    {
        Self::Value(Box::new(predicate))
    }

    /// Exact-position breakpoint.
    #[must_use]
    pub const fn at(position: Position) -> Self {
        Self::Position(position)
    }

    /// Evaluates this breakpoint against the engine's observable state.
    #[must_use]
    pub fn matches(&self, position: Position, value: &BigUint) -> bool {
        match self {
            Self::Value(predicate) => match position.cursor() {
                Some(cursor) => cursor.timing == Timing::After && predicate(value),
                None => false,
            },
            Self::Position(expected) => *expected == position,
        }
    }
}

/// Returns `true` when any breakpoint in the list matches.
///
/// List order never affects the result, only whether a match exists. A
/// non-empty list with no matching entry reports an explicit `false` rather
/// than relying on a fallthrough default.
#[must_use]
pub fn any_match(breakpoints: &[Breakpoint], position: Position, value: &BigUint) -> bool {
    breakpoints
        .iter()
        .any(|breakpoint| breakpoint.matches(position, value))
}

impl fmt::Debug for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(_) => f.write_str("Value(..)"),
            Self::Position(position) => f.debug_tuple("Position").field(position).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{any_match, Breakpoint};
    use crate::cursor::{Cursor, Position};
    use num_bigint::BigUint;

    fn nine() -> BigUint {
        BigUint::from(9u64)
    }

    #[test]
    fn value_breakpoint_only_fires_in_after_phase() {
        let breakpoint = Breakpoint::value(|value| *value == BigUint::from(9u64));

        assert!(!breakpoint.matches(Position::Searching, &nine()));
        assert!(!breakpoint.matches(Position::Selected(Cursor::before(0)), &nine()));
        assert!(breakpoint.matches(Position::Selected(Cursor::after(0)), &nine()));
    }

    #[test]
    fn value_breakpoint_respects_predicate_in_after_phase() {
        let breakpoint = Breakpoint::value(|value| *value == BigUint::from(9u64));
        let other = BigUint::from(10u64);
        assert!(!breakpoint.matches(Position::Selected(Cursor::after(0)), &other));
    }

    #[test]
    fn position_breakpoint_requires_exact_equality() {
        let breakpoint = Breakpoint::at(Position::Selected(Cursor::before(2)));

        assert!(breakpoint.matches(Position::Selected(Cursor::before(2)), &nine()));
        assert!(!breakpoint.matches(Position::Selected(Cursor::after(2)), &nine()));
        assert!(!breakpoint.matches(Position::Selected(Cursor::before(1)), &nine()));
        assert!(!breakpoint.matches(Position::Searching, &nine()));
    }

    #[test]
    fn searching_marker_is_a_matchable_position() {
        let breakpoint = Breakpoint::at(Position::Searching);
        assert!(breakpoint.matches(Position::Searching, &nine()));
        assert!(!breakpoint.matches(Position::Selected(Cursor::after(0)), &nine()));
    }

    #[test]
    fn empty_list_never_matches() {
        assert!(!any_match(&[], Position::Searching, &nine()));
    }

    #[test]
    fn exhausted_list_reports_explicit_false() {
        let breakpoints = vec![
            Breakpoint::value(|value| *value == BigUint::from(4u64)),
            Breakpoint::at(Position::Selected(Cursor::before(5))),
        ];
        assert!(!any_match(
            &breakpoints,
            Position::Selected(Cursor::after(0)),
            &nine()
        ));
    }

    #[test]
    fn any_single_match_suffices() {
        let breakpoints = vec![
            Breakpoint::at(Position::Selected(Cursor::before(5))),
            Breakpoint::value(|value| *value == BigUint::from(9u64)),
        ];
        assert!(any_match(
            &breakpoints,
            Position::Selected(Cursor::after(1)),
            &nine()
        ));
    }
}
