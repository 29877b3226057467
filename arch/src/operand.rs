use color_print::cformat;
use std::fmt;
use std::num::ParseIntError;

use crate::reg::Reg;

// ----------------------------------------------------------------------------
// Operand

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// `Rn`
    Reg(Reg),
    /// `#imm`
    Imm(i32),
    /// `=name`, the slot index of a variable
    Addr(String),
    /// `[Rk]`, the variable whose slot index is in `Rk`
    Mem(Reg),
    /// Anything else: a branch target
    Label(String),
}

impl Operand {
    /// `None` when the token looks like an operand form but is malformed,
    /// e.g. `#abc`, `=`, `[R99]`.
    pub fn parse(s: &str) -> Option<Operand> {
        let s = s.trim_end_matches(',');
        match s.chars().next()? {
            '#' => parse_with_prefix(&s[1..]).ok().map(Operand::Imm),
            '=' => match &s[1..] {
                "" => None,
                name => Some(Operand::Addr(name.to_string())),
            },
            '[' => s
                .strip_prefix('[')
                .and_then(|s| s.strip_suffix(']'))
                .and_then(Reg::parse)
                .map(Operand::Mem),
            _ => match Reg::parse(s) {
                Some(reg) => Some(Operand::Reg(reg)),
                None => Some(Operand::Label(s.to_string())),
            },
        }
    }

    pub fn cfmt(&self) -> String {
        match self {
            Operand::Reg(r) => cformat!("<blue>{}</>", r),
            Operand::Imm(v) => cformat!("<yellow>#{}</>", v),
            Operand::Addr(name) => cformat!("<cyan>={}</>", name),
            Operand::Mem(r) => cformat!("[<blue>{}</>]", r),
            Operand::Label(name) => cformat!("<green>{}</>", name),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Reg(r) => write!(f, "{}", r),
            Operand::Imm(v) => write!(f, "#{}", v),
            Operand::Addr(name) => write!(f, "={}", name),
            Operand::Mem(r) => write!(f, "[{}]", r),
            Operand::Label(name) => write!(f, "{}", name),
        }
    }
}

/// Decimal, or `0x` / `0o` / `0b` prefixed, with an optional sign.
pub fn parse_with_prefix(s: &str) -> Result<i32, ParseIntError> {
    let (neg, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (radix, digits) = match body.get(..2) {
        Some("0x") | Some("0X") => (16, &body[2..]),
        Some("0o") | Some("0O") => (8, &body[2..]),
        Some("0b") | Some("0B") => (2, &body[2..]),
        _ => (10, body),
    };
    // Unsigned magnitude so that `-2147483648` and `0xFFFFFFFF` both fit.
    let magnitude = u32::from_str_radix(digits, radix)? as i32;
    Ok(if neg {
        magnitude.wrapping_neg()
    } else {
        magnitude
    })
}
