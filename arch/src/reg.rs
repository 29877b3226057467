use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    TryFromPrimitive,
    IntoPrimitive,
    EnumString,
    Display,
)]
#[repr(u8)]
pub enum Reg {
    #[default]
    R0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
    R9,
    R10,
    R11,
    R12,
    R13,
    R14,
    R15,
}

impl Reg {
    pub const COUNT: usize = 16;

    /// Holds `lhs - rhs` of the last `CMP`. Read only by conditional branches.
    pub const FLAG: Reg = Reg::R15;

    // ADD/SUB/MUL/SDIV ignore their written operands and always compute
    // DST <- LHS op RHS.
    pub const LHS: Reg = Reg::R1;
    pub const RHS: Reg = Reg::R2;
    pub const DST: Reg = Reg::R3;

    /// `R7` and `R7,` name register 7. The prefix is upper case only.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim_end_matches(',');
        let idx = s.strip_prefix('R')?;
        if idx.is_empty() || !idx.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let idx: u8 = idx.parse().ok()?;
        Reg::try_from(idx).ok()
    }

    pub fn idx(self) -> usize {
        u8::from(self) as usize
    }
}
