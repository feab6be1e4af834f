//! Single-step, breakpoint-capable FRACTRAN interpreter core.
//!
//! A FRACTRAN program is an ordered list of fractions. Execution repeatedly
//! multiplies a single positive arbitrary-precision register by the first
//! fraction whose denominator divides it, halting when none does. The engine
//! exposes sub-instruction granularity: each logical instruction is three
//! observable steps (search, apply, retire), so a caller can pause right
//! before or right after a fraction takes effect.

/// Program model and construction-time validation.
pub mod program;
pub use program::{ConfigurationError, Fraction, Program};

/// Sub-instruction position model.
pub mod cursor;
pub use cursor::{Cursor, Position, Timing};

/// Breakpoint specifications and the match evaluator.
pub mod breakpoint;
pub use breakpoint::{any_match, Breakpoint, ValuePredicate};

/// Host-facing engine state and outcome contracts.
pub mod api;
pub use api::{EngineState, RunOutcome, RunStop, StepOutcome};

/// Step-boundary trace hooks.
pub mod trace;
pub use trace::{TraceEvent, TraceSink};

/// The stepping pipeline.
pub mod engine;
pub use engine::{run_to_breakpoint, run_traced, step_one, step_traced};

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;
