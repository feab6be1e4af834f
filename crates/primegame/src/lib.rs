//! Conway's PRIMEGAME on the stepping engine.
//!
//! Started from 2, PRIMEGAME's register revisits powers of two exactly at
//! the primes: the exponents of the successive power-of-two states
//! enumerate 2, 3, 5, 7, 11, ... in order. The value breakpoint fires only
//! after a fraction has been applied, so the seed itself is never reported.

use fractran_core::{
    run_to_breakpoint, run_traced, Breakpoint, EngineState, Program, RunStop, TraceEvent,
    TraceSink,
};
use num_bigint::BigUint;

/// The fourteen PRIMEGAME fractions in execution order.
pub const PRIMEGAME: [(u64, u64); 14] = [
    (17, 91),
    (78, 85),
    (19, 51),
    (23, 38),
    (29, 33),
    (77, 29),
    (95, 23),
    (77, 19),
    (1, 17),
    (11, 13),
    (13, 11),
    (15, 2),
    (1, 7),
    (55, 1),
];

/// Seed value PRIMEGAME starts from.
pub const SEED: u64 = 2;

/// Builds the PRIMEGAME program.
///
/// # Panics
///
/// Never: the table is a fixed set of positive constants.
#[must_use]
pub fn primegame() -> Program {
    Program::from_pairs(&PRIMEGAME).expect("PRIMEGAME table is well formed")
}

/// Returns `true` when `value` is a positive power of two.
#[must_use]
pub fn is_power_of_two(value: &BigUint) -> bool {
    value.count_ones() == 1
}

/// Exponent of a power of two; 0 for the zero value.
#[must_use]
pub fn exponent_of_two(value: &BigUint) -> u64 {
    value.bits().saturating_sub(1)
}

/// Iterator over the primes PRIMEGAME emits, in order.
///
/// Each call resumes the engine until the register lands on a power of two
/// and yields its exponent. The stream is infinite: PRIMEGAME never halts.
#[derive(Debug)]
pub struct PrimeStream {
    engine: EngineState,
}

impl PrimeStream {
    /// Creates a stream positioned before the first prime.
    ///
    /// # Panics
    ///
    /// Never: the PRIMEGAME table and seed are fixed valid constants.
    #[must_use]
    pub fn new() -> Self {
        let engine = EngineState::with_breakpoints(
            primegame(),
            BigUint::from(SEED),
            vec![Breakpoint::value(is_power_of_two)],
        )
        .expect("PRIMEGAME configuration is well formed");
        Self { engine }
    }

    /// Read access to the underlying engine.
    #[must_use]
    pub const fn engine(&self) -> &EngineState {
        &self.engine
    }

    /// Advances to the next prime, reporting each engine phase to `sink`.
    pub fn next_traced(&mut self, sink: &mut dyn TraceSink) -> Option<u64> {
        match run_traced(&mut self.engine, sink).stop {
            RunStop::BreakpointHit => Some(exponent_of_two(self.engine.value())),
            RunStop::Halted => None,
        }
    }
}

impl Default for PrimeStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for PrimeStream {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        match run_to_breakpoint(&mut self.engine).stop {
            RunStop::BreakpointHit => Some(exponent_of_two(self.engine.value())),
            RunStop::Halted => None,
        }
    }
}

/// Trace sink that prints each engine phase to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrTrace;

impl TraceSink for StderrTrace {
    fn on_event(&mut self, event: TraceEvent) {
        match event {
            TraceEvent::SearchCommitted { index } => eprintln!("select {index}"),
            TraceEvent::FractionApplied { index, value } => eprintln!("apply {index} -> {value}"),
            TraceEvent::CursorRetired { index } => eprintln!("retire {index}"),
            TraceEvent::Halted => eprintln!("halted"),
        }
    }
}
