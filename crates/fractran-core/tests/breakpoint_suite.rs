//! Breakpoint evaluator coverage: after-phase gating for value predicates,
//! exact-position pauses, and the forward-progress guarantee of the run
//! driver.

#![allow(clippy::pedantic, clippy::nursery)]

use fractran_core::{
    run_to_breakpoint, Breakpoint, Cursor, EngineState, Position, Program, RunStop,
};
use num_bigint::BigUint;
use num_traits as _;
use proptest as _;
use rstest as _;
#[cfg(feature = "serde")]
use serde as _;
use thiserror as _;

fn engine_with(pairs: &[(u64, u64)], seed: u64, breakpoints: Vec<Breakpoint>) -> EngineState {
    let program = Program::from_pairs(pairs).expect("valid table");
    EngineState::with_breakpoints(program, BigUint::from(seed), breakpoints).expect("valid seed")
}

fn value_is(target: u64) -> Breakpoint {
    Breakpoint::value(move |value| *value == BigUint::from(target))
}

#[test]
fn value_breakpoint_pauses_right_after_apply() {
    let mut state = engine_with(&[(3, 2), (1, 3)], 6, vec![value_is(9)]);

    let outcome = run_to_breakpoint(&mut state);

    assert_eq!(outcome.stop, RunStop::BreakpointHit);
    // Search then apply: the pause lands on the after-phase cursor.
    assert_eq!(outcome.steps, 2);
    assert_eq!(state.position(), Position::Selected(Cursor::after(0)));
    assert_eq!(state.value(), &BigUint::from(9u64));
    assert!(!state.is_terminated());
}

#[test]
fn value_breakpoint_ignores_coinciding_before_phase_value() {
    // The register sits at 6 through the search and before phases of the
    // first instruction; a predicate for 6 must not pause there. No later
    // after-phase value is 6 either, so the run drives to the halt.
    let mut state = engine_with(&[(3, 2), (1, 3)], 6, vec![value_is(6)]);

    let outcome = run_to_breakpoint(&mut state);

    assert_eq!(outcome.stop, RunStop::Halted);
    assert!(state.is_terminated());
    assert_eq!(state.value(), &BigUint::from(1u64));
}

#[test]
fn exact_cursor_breakpoint_pauses_before_apply() {
    let mut state = engine_with(
        &[(3, 2), (1, 3)],
        6,
        vec![Breakpoint::at(Position::Selected(Cursor::before(0)))],
    );

    let outcome = run_to_breakpoint(&mut state);

    assert_eq!(outcome.stop, RunStop::BreakpointHit);
    assert_eq!(outcome.steps, 1);
    assert_eq!(state.position(), Position::Selected(Cursor::before(0)));
    // The fraction has not been applied yet.
    assert_eq!(state.value(), &BigUint::from(6u64));
}

#[test]
fn searching_marker_pauses_between_instructions() {
    let mut state = engine_with(
        &[(3, 2), (1, 3)],
        6,
        vec![Breakpoint::at(Position::Searching)],
    );

    let outcome = run_to_breakpoint(&mut state);

    assert_eq!(outcome.stop, RunStop::BreakpointHit);
    assert_eq!(outcome.steps, 3);
    assert_eq!(state.position(), Position::Searching);
    assert_eq!(state.value(), &BigUint::from(9u64));
}

#[test]
fn run_makes_forward_progress_from_a_resting_breakpoint() {
    let mut state = engine_with(
        &[(3, 2), (1, 3)],
        6,
        vec![Breakpoint::at(Position::Searching)],
    );

    // The engine starts exactly on the Searching marker; each call must
    // still advance one full macro-step instead of stalling on the hit.
    let first = run_to_breakpoint(&mut state);
    assert_eq!(first.steps, 3);
    assert_eq!(state.value(), &BigUint::from(9u64));

    let second = run_to_breakpoint(&mut state);
    assert_eq!(second.stop, RunStop::BreakpointHit);
    assert_eq!(second.steps, 3);
    assert_eq!(state.value(), &BigUint::from(3u64));

    let third = run_to_breakpoint(&mut state);
    assert_eq!(third.stop, RunStop::BreakpointHit);
    assert_eq!(third.steps, 3);
    assert_eq!(state.value(), &BigUint::from(1u64));

    // Nothing divides 1: the next call performs the failing search.
    let last = run_to_breakpoint(&mut state);
    assert_eq!(last.stop, RunStop::Halted);
    assert_eq!(last.steps, 1);
    assert!(state.is_terminated());

    // And a terminated engine reports zero steps thereafter.
    let inert = run_to_breakpoint(&mut state);
    assert_eq!(inert.steps, 0);
    assert_eq!(inert.stop, RunStop::Halted);
}

#[test]
fn non_matching_breakpoints_run_to_halt() {
    let mut state = engine_with(&[(3, 2), (1, 3)], 6, vec![value_is(7)]);

    let outcome = run_to_breakpoint(&mut state);

    assert_eq!(outcome.stop, RunStop::Halted);
    assert!(state.is_terminated());
    assert_eq!(state.value(), &BigUint::from(1u64));
}

#[test]
fn any_breakpoint_in_the_list_may_pause_the_run() {
    let mut state = engine_with(
        &[(3, 2), (1, 3)],
        6,
        vec![value_is(7), Breakpoint::at(Position::Selected(Cursor::before(1)))],
    );

    let outcome = run_to_breakpoint(&mut state);

    assert_eq!(outcome.stop, RunStop::BreakpointHit);
    assert_eq!(state.position(), Position::Selected(Cursor::before(1)));
    assert_eq!(state.value(), &BigUint::from(9u64));
}
