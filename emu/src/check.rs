use arch::inst::Inst;
use arch::op::{Cond, Opcode};
use arch::Line;
use std::collections::HashSet;

use crate::{label::Labels, msg::Msg, vars::Vars};

/// Looks for lines that will not do what they seem to. Running the program
/// is unaffected: every finding here is something the interpreter silently
/// tolerates. Messages come back sorted by line index.
pub fn check<S: AsRef<str>>(lines: &[S], vars: &Vars, labels: &Labels) -> Vec<(usize, Msg)> {
    let parsed: Vec<Line> = lines.iter().map(|l| Line::parse(l.as_ref())).collect();
    let mut msgs = vec![];
    let mut implicit = HashSet::new();

    for (idx, line) in parsed.iter().enumerate() {
        match line {
            Line::Unknown(code) => {
                let op = code.split_whitespace().next().unwrap_or_default();
                let msg = match Opcode::parse(op) {
                    Some(op) => format!("Operands of `{}` fit none of its forms, skipped", op),
                    None => format!("Unknown operation: `{}`, skipped", op),
                };
                msgs.push((idx, Msg::Warn(msg)));
            }
            Line::Code(Inst::Branch(cond, label)) => match labels.target(label) {
                None => msgs.push((
                    idx,
                    Msg::Warn(format!("Undefined label: `{}`, branch falls through", label)),
                )),
                Some(target) => {
                    let idle = target <= idx && parsed[target..idx].iter().all(Line::is_noop);
                    if *cond == Cond::AL && idle {
                        msgs.push((
                            idx,
                            Msg::Error(format!("`B {}` loops forever once reached", label)),
                        ));
                    }
                }
            },
            Line::Code(Inst::LoadAddr(_, name)) => {
                if !vars.contains(name) && implicit.insert(name.clone()) {
                    msgs.push((
                        idx,
                        Msg::Warn(format!("Undeclared variable: `{}`, created as 0", name)),
                    ));
                }
            }
            _ => {}
        }
    }

    for (name, first, later) in labels.redefined() {
        msgs.push((*later, Msg::Warn(format!("Re-defined label: `{}`", name))));
        msgs.push((
            *first,
            Msg::Note(format!("`{}` first defined here; branches land here", name)),
        ));
    }

    msgs.sort_by_key(|(idx, _)| *idx);
    msgs
}
