use arch::{Line, Reg};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

use crate::error::Error;
use crate::model::State;

use super::Hook;

#[derive(Debug)]
pub struct Dump {
    file: Option<String>,
    all: bool,
    list: List,
}

// 1-based line number -> what to print after that line runs
#[derive(Debug, Default, Serialize, Deserialize)]
struct List(HashMap<usize, Config>);

#[derive(Debug, Default, Serialize, Deserialize)]
struct Config {
    #[serde(default)]
    regs: Regs,
    #[serde(default)]
    vars: Vec<String>,
}

// `regs: true` for the whole register file, `regs: [R1, R15]` for a few
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum Regs {
    All(bool),
    Only(Vec<Reg>),
}

impl Default for Regs {
    fn default() -> Self {
        Regs::All(false)
    }
}

impl Dump {
    pub fn arg(file: Option<String>, all: bool) -> Result<Self, Error> {
        match file {
            Some(fname) => {
                let file = File::open(&fname).map_err(|e| Error::ConfigOpen(fname.clone(), e))?;
                let list: List = serde_yaml::from_reader(BufReader::new(file))
                    .map_err(|e| Error::ConfigParse(fname.clone(), e))?;
                Ok(Self {
                    file: Some(fname),
                    list,
                    all,
                })
            }
            None => Ok(Self {
                file,
                list: List::default(),
                all,
            }),
        }
    }

    pub fn from_yaml(src: &str) -> Result<Self, serde_yaml::Error> {
        Ok(Self {
            file: None,
            list: serde_yaml::from_str(src)?,
            all: false,
        })
    }

    pub fn is_empty(&self) -> bool {
        !self.all && self.list.0.is_empty()
    }

    /// Lines the config asks about, 1-based and sorted.
    pub fn lines(&self) -> Vec<usize> {
        let mut lines: Vec<usize> = self.list.0.keys().copied().collect();
        lines.sort();
        lines
    }

    fn get(&self, ip: usize) -> Option<&Config> {
        self.list.0.get(&(ip + 1))
    }
}

impl Hook for Dump {
    fn init(&mut self, state: State) -> State {
        if self.all {
            println!(" * Dump all");
        }
        if let Some(fname) = &self.file {
            println!(" * Dump {:?} at lines {:?}", fname, self.lines());
        }
        state
    }
    fn exec(&mut self, _time: u64, ip: usize, line: &Line, state: State) -> State {
        if let Some(cfg) = self.get(ip) {
            println!(" @ line {}", ip + 1);
            match &cfg.regs {
                Regs::All(true) => self.print_reg(&state),
                Regs::All(false) => {}
                Regs::Only(regs) => {
                    for reg in regs {
                        println!(" | {:<16} = {:>11}", reg.to_string(), state.get(*reg));
                    }
                }
            }
            self.print_vars(&state, &cfg.vars);
        } else if self.all && !line.is_noop() {
            self.print_reg(&state);
        }
        state
    }
}

impl Dump {
    fn print_reg(&self, state: &State) {
        let rule = format!(" {}+", "+-----------------".repeat(4));
        println!("{}", rule);
        for row in 0..4 {
            let cells: Vec<String> = (0..4)
                .map(|col| {
                    let reg = Reg::try_from((row * 4 + col) as u8).unwrap_or_default();
                    format!(" {:>3}: {:>11} ", reg.to_string(), state.get(reg))
                })
                .collect();
            println!(" |{}|", cells.join("|"));
        }
        println!("{}", rule);
    }

    fn print_vars(&self, state: &State, names: &[String]) {
        for name in names {
            match state.vars().get(name) {
                Some(val) => println!(" | {:<16} = {:>11}", name, val),
                None => println!(" | {:<16}   (undefined)", name),
            }
        }
    }
}
