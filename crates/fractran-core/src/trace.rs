use num_bigint::BigUint;

/// Events emitted at each observable phase of the instruction cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    /// The search phase committed to the instruction at `index`.
    SearchCommitted {
        /// Selected instruction index.
        index: usize,
    },
    /// The fraction at `index` was applied, producing `value`.
    FractionApplied {
        /// Applied instruction index.
        index: usize,
        /// Updated register value.
        value: BigUint,
    },
    /// The cursor at `index` retired back to searching.
    CursorRetired {
        /// Retired instruction index.
        index: usize,
    },
    /// The engine halted; no instruction applies.
    Halted,
}

/// Sink trait for deterministic step-boundary hooks.
pub trait TraceSink {
    /// Records an event in execution order.
    fn on_event(&mut self, event: TraceEvent);
}
