pub mod dump;
pub mod stall;
pub mod trace;

use arch::Line;

use crate::model::{Exit, State};

/// Side effects run after every executed line.
pub trait Hook {
    fn init(&mut self, state: State) -> State {
        state
    }
    fn exec(&mut self, time: u64, ip: usize, line: &Line, state: State) -> State;
}

/// Main loop: one step, then every hook in order, until the program halts,
/// a hook shuts the machine down, or `tmax` steps have run.
pub fn drive(state: State, hooks: &mut [Box<dyn Hook>], tmax: Option<u64>) -> (State, Exit) {
    let mut state = hooks.iter_mut().fold(state, |state, hook| hook.init(state));

    for time in match tmax {
        Some(t) => 0_u64..t,
        None => 0_u64..u64::MAX,
    } {
        if state.is_terminated() {
            break;
        }
        let Some((ip, line)) = state.exec() else {
            break;
        };
        state = hooks
            .iter_mut()
            .fold(state, |state, hook| hook.exec(time, ip, &line, state));
    }

    let exit = if state.is_halted() {
        Exit::Halted
    } else if state.is_terminated() {
        Exit::Stalled
    } else {
        Exit::StepLimit
    };
    (state, exit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    struct Seen(Rc<RefCell<Vec<(u64, usize)>>>);

    impl Hook for Seen {
        fn exec(&mut self, time: u64, ip: usize, _line: &Line, state: State) -> State {
            self.0.borrow_mut().push((time, ip));
            state
        }
    }

    struct StopAt(usize);

    impl Hook for StopAt {
        fn exec(&mut self, _time: u64, ip: usize, _line: &Line, mut state: State) -> State {
            if ip == self.0 {
                state.shutdown();
            }
            state
        }
    }

    fn state(src: &str) -> State {
        State::new(src.lines().map(String::from).collect())
    }

    #[test]
    fn hooks_see_every_line() {
        let seen = Rc::new(RefCell::new(vec![]));
        let mut hooks: Vec<Box<dyn Hook>> = vec![Box::new(Seen(seen.clone()))];
        let (_, exit) = drive(state("; a\nMOV R1, #1\n\nB x"), &mut hooks, None);
        assert_eq!(exit, Exit::Halted);
        assert_eq!(*seen.borrow(), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn step_limit() {
        let mut hooks: Vec<Box<dyn Hook>> = vec![];
        let (state, exit) = drive(state("top:\nB top"), &mut hooks, Some(50));
        assert_eq!(exit, Exit::StepLimit);
        assert!(state.ip() < 2);
    }

    #[test]
    fn shutdown_from_hook() {
        let mut hooks: Vec<Box<dyn Hook>> = vec![Box::new(StopAt(1))];
        let (state, exit) = drive(state("MOV R1, #1\nMOV R2, #2\nMOV R3, #3"), &mut hooks, None);
        assert_eq!(exit, Exit::Stalled);
        assert_eq!(state.get(arch::Reg::R2), 2);
        assert_eq!(state.get(arch::Reg::R3), 0);
    }
}
