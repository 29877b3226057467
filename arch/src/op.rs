use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::alu::Alu;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
pub enum Opcode {
    MOV,
    LDR,
    STR,
    ADD,
    SUB,
    MUL,
    SDIV,
    CMP,
    B,
    BEQ,
    BNE,
    BGT,
    BLT,
    BGE,
    BLE,
}

impl Opcode {
    /// Mnemonics are case sensitive: `mov` is not an opcode.
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    pub fn alu(&self) -> Option<Alu> {
        match self {
            Opcode::ADD => Some(Alu::ADD),
            Opcode::SUB => Some(Alu::SUB),
            Opcode::MUL => Some(Alu::MUL),
            Opcode::SDIV => Some(Alu::SDIV),
            _ => None,
        }
    }

    pub fn cond(&self) -> Option<Cond> {
        match self {
            Opcode::B => Some(Cond::AL),
            Opcode::BEQ => Some(Cond::EQ),
            Opcode::BNE => Some(Cond::NE),
            Opcode::BGT => Some(Cond::GT),
            Opcode::BLT => Some(Cond::LT),
            Opcode::BGE => Some(Cond::GE),
            Opcode::BLE => Some(Cond::LE),
            _ => None,
        }
    }
}

/// Branch condition, tested against the flag register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Cond {
    AL,
    EQ,
    NE,
    GT,
    LT,
    GE,
    LE,
}

impl Cond {
    pub fn holds(&self, flag: i32) -> bool {
        match self {
            Cond::AL => true,
            Cond::EQ => flag == 0,
            Cond::NE => flag != 0,
            Cond::GT => flag > 0,
            Cond::LT => flag < 0,
            Cond::GE => flag >= 0,
            Cond::LE => flag <= 0,
        }
    }
}
