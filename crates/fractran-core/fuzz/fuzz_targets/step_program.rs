#![no_main]

use fractran_core::{run_to_breakpoint, step_one, Breakpoint, EngineState, Position, Program, StepOutcome};
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    let seed = u64::from(data[0]).saturating_add(1);
    let pairs: Vec<(u64, u64)> = data[1..]
        .chunks_exact(2)
        .take(8)
        .map(|pair| (u64::from(pair[0]), u64::from(pair[1])))
        .collect();

    let Ok(program) = Program::from_pairs(&pairs) else {
        return;
    };
    let Ok(mut state) = EngineState::with_breakpoints(
        program,
        BigUint::from(seed),
        vec![Breakpoint::at(Position::Searching)],
    ) else {
        return;
    };

    // FRACTRAN programs may diverge; bound the walk.
    for _ in 0..256 {
        let _ = step_one(&mut state);
        assert_ne!(state.value(), &BigUint::ZERO);
        if state.is_terminated() {
            break;
        }
    }

    let _ = run_to_breakpoint(&mut state);

    if state.is_terminated() {
        let value = state.value().clone();
        let position = state.position();
        assert_eq!(step_one(&mut state), StepOutcome::Inert);
        assert_eq!(state.value(), &value);
        assert_eq!(state.position(), position);
    }
});
