use color_print::cformat;

use crate::{inst::Inst, op::Opcode};

// ----------------------------------------------------------------------------
// Line

/// What a source line turns out to be when it is fetched.
/// Everything but `Code` executes as a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Blank,
    Comment,
    /// `.data`, `.text`, `x: .word 7`, ...
    Directive,
    /// `loop:`
    Label(String),
    Code(Inst),
    /// Unknown opcode, or operands that fit none of the opcode's forms.
    Unknown(String),
}

impl Line {
    pub fn parse(raw: &str) -> Line {
        let code = match raw.split_once(';') {
            Some((code, _)) => code,
            None => raw,
        };
        let words: Vec<&str> = code.split_whitespace().take(4).collect();

        let Some((op, args)) = words.split_first() else {
            return match raw.trim_start().starts_with(';') {
                true => Line::Comment,
                false => Line::Blank,
            };
        };

        // a `.` anywhere, comment text included, marks the line as data
        if raw.contains('.') {
            return Line::Directive;
        }

        if let Some(label) = op.strip_suffix(':') {
            return Line::Label(label.to_string());
        }

        match Opcode::parse(op).and_then(|op| Inst::decode(op, args)) {
            Some(inst) => Line::Code(inst),
            None => Line::Unknown(words.join(" ")),
        }
    }

    pub fn is_noop(&self) -> bool {
        !matches!(self, Line::Code(_))
    }

    pub fn inst(&self) -> Option<&Inst> {
        match self {
            Line::Code(inst) => Some(inst),
            _ => None,
        }
    }

    pub fn cformat(&self) -> String {
        match self {
            Line::Blank => "".to_string(),
            Line::Comment => cformat!("<dim>comment</>"),
            Line::Directive => cformat!("<magenta>directive</>"),
            Line::Label(name) => cformat!("<green>{}:</>", name),
            Line::Code(inst) => inst.cformat(),
            Line::Unknown(code) => cformat!("<r,u>{}</>", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{alu::Alu, op::Cond, reg::Reg};

    #[test]
    fn classify() {
        assert_eq!(Line::parse(""), Line::Blank);
        assert_eq!(Line::parse("   \t"), Line::Blank);
        assert_eq!(Line::parse("; whole line"), Line::Comment);
        assert_eq!(Line::parse("    ;indented"), Line::Comment);
        assert_eq!(Line::parse(".data"), Line::Directive);
        assert_eq!(Line::parse("\t.text"), Line::Directive);
        assert_eq!(Line::parse("x: .word 7"), Line::Directive);
        assert_eq!(Line::parse("\t.global _start"), Line::Directive);
        assert_eq!(Line::parse("loop:"), Line::Label("loop".into()));
        assert_eq!(Line::parse("  _start:"), Line::Label("_start".into()));
    }

    #[test]
    fn code() {
        assert_eq!(Line::parse("    MOV R1, #3"), Line::Code(Inst::MovImm(Reg::R1, 3)));
        assert_eq!(Line::parse("ADD R3, R1, R2"), Line::Code(Inst::Calc(Alu::ADD)));
        assert_eq!(
            Line::parse("BNE loop ; again"),
            Line::Code(Inst::Branch(Cond::NE, "loop".into()))
        );
    }

    #[test]
    fn dot_anywhere_is_directive() {
        assert_eq!(Line::parse("MOV R2, R1 ; see .data"), Line::Directive);
        assert_eq!(Line::parse("MOV R1, #1 ; see x.y"), Line::Directive);
        assert_eq!(Line::parse("LDR R0, =a.b"), Line::Directive);
        assert_eq!(Line::parse("B loop.2"), Line::Directive);
        assert_eq!(Line::parse("loop.2:"), Line::Directive);
        // whole-line comments stay comments
        assert_eq!(Line::parse("; see x.y"), Line::Comment);
        assert_eq!(
            Line::parse("MOV R2, R1 ; no marker"),
            Line::Code(Inst::MovReg(Reg::R2, Reg::R1))
        );
    }

    #[test]
    fn unknown() {
        assert_eq!(Line::parse("BX LR"), Line::Unknown("BX LR".into()));
        assert_eq!(Line::parse("SWI 0x011"), Line::Unknown("SWI 0x011".into()));
        assert_eq!(Line::parse("MOV R1, #x"), Line::Unknown("MOV R1, #x".into()));
        assert_eq!(Line::parse("mov R1, #1"), Line::Unknown("mov R1, #1".into()));
        assert!(Line::parse("BX LR").is_noop());
        assert!(!Line::parse("B end").is_noop());
    }
}
