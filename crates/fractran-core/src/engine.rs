//! The stepping pipeline.
//!
//! One logical FRACTRAN instruction is a 3-phase cycle:
//! 1. Search: commit to the first fraction whose denominator divides the
//!    register. No arithmetic happens here.
//! 2. Apply: multiply the register by the committed fraction. Division is
//!    exact because the search step only selects divisors.
//! 3. Retire: clear the cursor back to searching.
//!
//! The split gives a debugger three observable points per instruction:
//! "about to apply", "just applied", and "between instructions".

use crate::api::{EngineState, RunOutcome, RunStop, StepOutcome};
use crate::breakpoint;
use crate::cursor::{Cursor, Position, Timing};
use crate::trace::{TraceEvent, TraceSink};

struct NoopSink;

impl TraceSink for NoopSink {
    fn on_event(&mut self, _event: TraceEvent) {}
}

/// Advances the engine by one minimal-granularity step.
///
/// Once the engine is terminated every further call is a no-op reporting
/// [`StepOutcome::Inert`].
pub fn step_one(state: &mut EngineState) -> StepOutcome {
    step_traced(state, &mut NoopSink)
}

/// Advances one step, reporting the phase transition to `sink`.
pub fn step_traced(state: &mut EngineState, sink: &mut dyn TraceSink) -> StepOutcome {
    if state.is_terminated() {
        return StepOutcome::Inert;
    }

    match state.position() {
        Position::Searching => search(state, sink),
        Position::Selected(cursor) => match cursor.timing {
            Timing::Before => apply(state, cursor.index, sink),
            Timing::After => retire(state, cursor.index, sink),
        },
    }
}

fn search(state: &mut EngineState, sink: &mut dyn TraceSink) -> StepOutcome {
    // Also covers the empty program: nothing can match.
    let Some(index) = state.program().first_applicable(state.value()) else {
        state.mark_terminated();
        sink.on_event(TraceEvent::Halted);
        return StepOutcome::Halted;
    };

    state.set_position(Position::Selected(Cursor::before(index)));
    sink.on_event(TraceEvent::SearchCommitted { index });
    StepOutcome::Selected { index }
}

fn apply(state: &mut EngineState, index: usize, sink: &mut dyn TraceSink) -> StepOutcome {
    // Exact division: a before-phase cursor always indexes a fraction whose
    // denominator divided the register when the cursor was created.
    let next = state.program()[index].apply(state.value());
    state.set_value(next);
    state.set_position(Position::Selected(Cursor::after(index)));
    sink.on_event(TraceEvent::FractionApplied {
        index,
        value: state.value().clone(),
    });
    StepOutcome::Applied { index }
}

fn retire(state: &mut EngineState, index: usize, sink: &mut dyn TraceSink) -> StepOutcome {
    state.set_position(Position::Searching);
    sink.on_event(TraceEvent::CursorRetired { index });
    StepOutcome::Retired { index }
}

/// Drives the engine until a breakpoint matches or it halts.
///
/// Performs at least one step when not already terminated, so a state
/// resting on a matching breakpoint makes forward progress instead of
/// re-reporting the same hit. Callers distinguish a pause from a halt via
/// [`RunOutcome::stop`] or [`EngineState::is_terminated`].
pub fn run_to_breakpoint(state: &mut EngineState) -> RunOutcome {
    run_traced(state, &mut NoopSink)
}

/// Traced variant of [`run_to_breakpoint`].
pub fn run_traced(state: &mut EngineState, sink: &mut dyn TraceSink) -> RunOutcome {
    if state.is_terminated() {
        return RunOutcome {
            steps: 0,
            stop: RunStop::Halted,
        };
    }

    let mut steps = 1;
    let _ = step_traced(state, sink);

    while !state.is_terminated() && !breakpoint_hit(state) {
        let _ = step_traced(state, sink);
        steps += 1;
    }

    let stop = if state.is_terminated() {
        RunStop::Halted
    } else {
        RunStop::BreakpointHit
    };
    RunOutcome { steps, stop }
}

fn breakpoint_hit(state: &EngineState) -> bool {
    breakpoint::any_match(state.breakpoints(), state.position(), state.value())
}
