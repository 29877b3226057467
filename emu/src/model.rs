use arch::alu::alu;
use arch::{Inst, Line, Reg};

use crate::{label::Labels, loader, vars::Vars};

/// How a bounded run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The instruction pointer left the program.
    Halted,
    /// `tmax` steps ran and the program is still going.
    StepLimit,
    /// A hook asked the machine to stop.
    Stalled,
}

/// One run of one program. Owns everything it mutates, so independent
/// states never share registers or variables.
#[derive(Debug, Clone)]
pub struct State {
    lines: Vec<String>,
    regs: [i32; Reg::COUNT],
    vars: Vars,
    labels: Labels,
    ip: usize,
    shutdown: bool,
}

// Register access
impl State {
    pub fn get(&self, reg: Reg) -> i32 {
        self.regs[reg.idx()]
    }

    pub fn set(&mut self, reg: Reg, val: i32) {
        self.regs[reg.idx()] = val;
    }

    pub fn regs(&self) -> &[i32; Reg::COUNT] {
        &self.regs
    }

    pub fn ip(&self) -> usize {
        self.ip
    }
}

impl State {
    pub fn new(lines: Vec<String>) -> Self {
        let (vars, labels) = loader::load(&lines);
        Self::with_tables(lines, vars, labels)
    }

    pub fn with_tables(lines: Vec<String>, vars: Vars, labels: Labels) -> Self {
        State {
            lines,
            regs: [0; Reg::COUNT],
            vars,
            labels,
            ip: 0,
            shutdown: false,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn vars(&self) -> &Vars {
        &self.vars
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn into_vars(self) -> Vars {
        self.vars
    }

    pub fn is_halted(&self) -> bool {
        self.ip >= self.lines.len()
    }

    pub fn is_terminated(&self) -> bool {
        self.shutdown || self.is_halted()
    }

    /// Stop at the next check of `is_terminated`. The program itself has no
    /// way to do this; hooks do.
    pub fn shutdown(&mut self) {
        self.shutdown = true;
    }
}

impl State {
    /// Fetch, decode and execute the line at the instruction pointer.
    /// Returns the line index and what it decoded to, or `None` once halted.
    pub fn exec(&mut self) -> Option<(usize, Line)> {
        let ip = self.ip;
        let line = Line::parse(self.lines.get(ip)?);
        self.ip = match line.inst() {
            Some(inst) => self.eval(inst),
            None => ip + 1,
        };
        Some((ip, line))
    }

    /// Returns the next instruction pointer.
    fn eval(&mut self, inst: &Inst) -> usize {
        match inst {
            Inst::MovImm(rn, imm) => self.set(*rn, *imm),
            Inst::MovReg(rn, rm) => self.set(*rn, self.get(*rm)),
            Inst::LoadAddr(rn, name) => {
                let slot = self.vars.slot(name);
                self.set(*rn, slot as i32);
            }
            Inst::Load(rn, rk) => {
                if let Some(val) = self.vars.get_slot(self.get(*rk)) {
                    self.set(*rn, val);
                }
            }
            Inst::Store(rn, rk) => {
                self.vars.set_slot(self.get(*rk), self.get(*rn));
            }
            Inst::Calc(op) => {
                let val = alu(*op, self.get(Reg::LHS), self.get(Reg::RHS));
                self.set(Reg::DST, val);
            }
            Inst::Cmp(rn, imm) => self.set(Reg::FLAG, self.get(*rn).wrapping_sub(*imm)),
            Inst::Branch(cond, label) => {
                if cond.holds(self.get(Reg::FLAG)) {
                    if let Some(target) = self.labels.target(label) {
                        return target;
                    }
                }
            }
        }
        self.ip + 1
    }

    /// Runs until the instruction pointer leaves the program. A program that
    /// loops forever never returns; use `run_for` when that matters.
    pub fn run(&mut self) {
        while self.exec().is_some() {}
    }

    pub fn run_for(&mut self, tmax: u64) -> Exit {
        for _ in 0..tmax {
            if self.exec().is_none() {
                return Exit::Halted;
            }
        }
        match self.is_halted() {
            true => Exit::Halted,
            false => Exit::StepLimit,
        }
    }
}
