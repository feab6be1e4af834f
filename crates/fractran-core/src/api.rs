//! Host-facing engine state and step/run outcome contracts.

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::breakpoint::Breakpoint;
use crate::cursor::Position;
use crate::program::{ConfigurationError, Program};

/// Complete state of one interpreter instance.
///
/// Constructed once with a program, a seed value, and a breakpoint list;
/// driven forward exclusively through [`crate::step_one`] and
/// [`crate::run_to_breakpoint`]; inert once terminated. The register is
/// mutated by the stepping pipeline only and stays positive throughout
/// execution.
#[derive(Debug)]
pub struct EngineState {
    program: Program,
    current: BigUint,
    position: Position,
    terminated: bool,
    breakpoints: Vec<Breakpoint>,
}

impl EngineState {
    /// Creates an engine with an empty breakpoint list.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::ZeroSeed`] when `seed` is zero; the
    /// register must be positive for divisor search to be meaningful.
    pub fn new(program: Program, seed: BigUint) -> Result<Self, ConfigurationError> {
        Self::with_breakpoints(program, seed, Vec::new())
    }

    /// Creates an engine that pauses on the supplied breakpoints.
    ///
    /// Every instance owns its own list; there is no shared default that
    /// later construction could alias.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::ZeroSeed`] when `seed` is zero.
    pub fn with_breakpoints(
        program: Program,
        seed: BigUint,
        breakpoints: Vec<Breakpoint>,
    ) -> Result<Self, ConfigurationError> {
        if seed.is_zero() {
            return Err(ConfigurationError::ZeroSeed);
        }
        Ok(Self {
            program,
            current: seed,
            position: Position::Searching,
            terminated: false,
            breakpoints,
        })
    }

    /// Current register value.
    #[must_use]
    pub const fn value(&self) -> &BigUint {
        &self.current
    }

    /// Current position in the instruction cycle.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// `true` once the engine has halted. Monotonic: never cleared.
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// The owned program.
    #[must_use]
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// Breakpoints consulted after each step by the run driver.
    #[must_use]
    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub(crate) fn set_value(&mut self, value: BigUint) {
        self.current = value;
    }

    pub(crate) fn mark_terminated(&mut self) {
        self.terminated = true;
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value={} position={} terminated={}",
            self.current, self.position, self.terminated
        )
    }
}

/// Output status from one minimal-granularity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepOutcome {
    /// Search committed to the instruction at `index`; no arithmetic yet.
    Selected {
        /// Selected instruction index.
        index: usize,
    },
    /// The fraction at `index` was applied to the register.
    Applied {
        /// Applied instruction index.
        index: usize,
    },
    /// The cursor at `index` was cleared back to searching.
    Retired {
        /// Retired instruction index.
        index: usize,
    },
    /// No instruction applies (or the program is empty); the engine halted.
    Halted,
    /// The engine was already terminated; nothing changed.
    Inert,
}

/// Why the run driver returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunStop {
    /// A breakpoint matched the state reached by the last step.
    BreakpointHit,
    /// The engine halted normally.
    Halted,
}

/// Aggregated outcome from driving the engine until a pause or halt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunOutcome {
    /// Number of minimal-granularity steps performed by this call.
    pub steps: u64,
    /// Why the driver stopped.
    pub stop: RunStop,
}
