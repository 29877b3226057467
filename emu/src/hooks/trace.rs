use arch::Line;
use color_print::cprintln;

use super::Hook;
use crate::model::State;

/// Prints every line that does something, plus the ones that were skipped
/// because they could not be decoded.
pub struct Trace;

impl Hook for Trace {
    fn init(&mut self, state: State) -> State {
        println!(" * Trace");
        state
    }
    fn exec(&mut self, time: u64, ip: usize, line: &Line, state: State) -> State {
        match line {
            Line::Code(_) | Line::Unknown(_) => {
                cprintln!(
                    "[{:0>4}] <blue>{:>4}</> {} <dim>-> {}</>",
                    time,
                    ip + 1,
                    line.cformat(),
                    state.ip() + 1
                );
            }
            _ => {}
        }
        state
    }
}
