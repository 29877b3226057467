use arch::{inst::Inst, Line, Reg};
use color_print::cprintln;
use std::collections::HashSet;

use super::Hook;
use crate::model::State;

const DEFAULT_HISTORY: usize = 4096;

/// Stops the machine once it is provably stuck.
///
/// Execution is deterministic, so if the machine is ever in the same
/// position with the same registers and variables twice, it will repeat
/// forever. Positions are recorded only at taken branches, which every
/// infinite loop passes through. A loop that keeps changing state (a counter
/// that never reaches its bound) is not caught here; bound those with `tmax`.
pub struct Stall {
    seen: HashSet<Fingerprint>,
    history: usize,
}

#[derive(Debug, PartialEq, Eq, Hash)]
struct Fingerprint {
    ip: usize,
    regs: [i32; Reg::COUNT],
    vars: Vec<i32>,
}

impl Fingerprint {
    fn of(state: &State) -> Self {
        Fingerprint {
            ip: state.ip(),
            regs: *state.regs(),
            vars: state.vars().iter().map(|(_, val)| val).collect(),
        }
    }
}

impl Stall {
    pub fn new() -> Self {
        Self::with_history(DEFAULT_HISTORY)
    }

    /// Remembers at most `history` positions; older ones are forgotten
    /// all at once when it fills up.
    pub fn with_history(history: usize) -> Self {
        Stall {
            seen: HashSet::new(),
            history: history.max(1),
        }
    }
}

impl Default for Stall {
    fn default() -> Self {
        Self::new()
    }
}

impl Hook for Stall {
    fn init(&mut self, state: State) -> State {
        println!(" * Stall detection (history {})", self.history);
        state
    }
    fn exec(&mut self, time: u64, ip: usize, line: &Line, mut state: State) -> State {
        let taken = matches!(line, Line::Code(Inst::Branch(..))) && state.ip() != ip + 1;
        if !taken {
            return state;
        }
        let fingerprint = Fingerprint::of(&state);
        if self.seen.contains(&fingerprint) {
            cprintln!(
                "<yellow,bold>warn</>: endless loop at line {} after {} steps",
                ip + 1,
                time + 1
            );
            state.shutdown();
            return state;
        }
        if self.seen.len() >= self.history {
            self.seen.clear();
        }
        self.seen.insert(fingerprint);
        state
    }
}
