use color_print::cformat;
use std::fmt;

use crate::{
    alu::Alu,
    op::{Cond, Opcode},
    operand::Operand,
    reg::Reg,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inst {
    /// `MOV Rn, #imm`
    MovImm(Reg, i32),
    /// `MOV Rn, Rm`
    MovReg(Reg, Reg),
    /// `LDR Rn, =name`: Rn <- slot index of `name`
    LoadAddr(Reg, String),
    /// `LDR Rn, [Rk]`
    Load(Reg, Reg),
    /// `STR Rn, [Rk]`
    Store(Reg, Reg),
    /// `ADD|SUB|MUL|SDIV ...`: R3 <- R1 op R2 whatever the operands say
    Calc(Alu),
    /// `CMP Rn, #imm`
    Cmp(Reg, i32),
    /// `B label`, `BEQ label`, ...
    Branch(Cond, String),
}

impl Inst {
    /// `None` when the operands match none of the opcode's forms.
    pub fn decode(op: Opcode, args: &[&str]) -> Option<Inst> {
        let arg = |idx: usize| args.get(idx).and_then(|s| Operand::parse(s));

        if let Some(alu) = op.alu() {
            return Some(Inst::Calc(alu));
        }
        if let Some(cond) = op.cond() {
            let label = args.get(0)?.trim_end_matches(',');
            if label.is_empty() {
                return None;
            }
            return Some(Inst::Branch(cond, label.to_string()));
        }

        use Operand as O;
        match (op, arg(0)?, arg(1)?) {
            (Opcode::MOV, O::Reg(rn), O::Imm(imm)) => Some(Inst::MovImm(rn, imm)),
            (Opcode::MOV, O::Reg(rn), O::Reg(rm)) => Some(Inst::MovReg(rn, rm)),
            (Opcode::LDR, O::Reg(rn), O::Addr(name)) => Some(Inst::LoadAddr(rn, name)),
            (Opcode::LDR, O::Reg(rn), O::Mem(rk)) => Some(Inst::Load(rn, rk)),
            (Opcode::STR, O::Reg(rn), O::Mem(rk)) => Some(Inst::Store(rn, rk)),
            (Opcode::CMP, O::Reg(rn), O::Imm(imm)) => Some(Inst::Cmp(rn, imm)),
            _ => None,
        }
    }

    pub fn opcode(&self) -> Opcode {
        match self {
            Inst::MovImm(..) | Inst::MovReg(..) => Opcode::MOV,
            Inst::LoadAddr(..) | Inst::Load(..) => Opcode::LDR,
            Inst::Store(..) => Opcode::STR,
            Inst::Calc(Alu::ADD) => Opcode::ADD,
            Inst::Calc(Alu::SUB) => Opcode::SUB,
            Inst::Calc(Alu::MUL) => Opcode::MUL,
            Inst::Calc(Alu::SDIV) => Opcode::SDIV,
            Inst::Cmp(..) => Opcode::CMP,
            Inst::Branch(Cond::AL, _) => Opcode::B,
            Inst::Branch(Cond::EQ, _) => Opcode::BEQ,
            Inst::Branch(Cond::NE, _) => Opcode::BNE,
            Inst::Branch(Cond::GT, _) => Opcode::BGT,
            Inst::Branch(Cond::LT, _) => Opcode::BLT,
            Inst::Branch(Cond::GE, _) => Opcode::BGE,
            Inst::Branch(Cond::LE, _) => Opcode::BLE,
        }
    }

    pub fn operands(&self) -> Vec<Operand> {
        match self {
            Inst::MovImm(rn, imm) => vec![Operand::Reg(*rn), Operand::Imm(*imm)],
            Inst::MovReg(rn, rm) => vec![Operand::Reg(*rn), Operand::Reg(*rm)],
            Inst::LoadAddr(rn, name) => vec![Operand::Reg(*rn), Operand::Addr(name.clone())],
            Inst::Load(rn, rk) => vec![Operand::Reg(*rn), Operand::Mem(*rk)],
            Inst::Store(rn, rk) => vec![Operand::Reg(*rn), Operand::Mem(*rk)],
            Inst::Calc(_) => vec![
                Operand::Reg(Reg::DST),
                Operand::Reg(Reg::LHS),
                Operand::Reg(Reg::RHS),
            ],
            Inst::Cmp(rn, imm) => vec![Operand::Reg(*rn), Operand::Imm(*imm)],
            Inst::Branch(_, label) => vec![Operand::Label(label.clone())],
        }
    }

    pub fn cformat(&self) -> String {
        let args: Vec<String> = self.operands().iter().map(|o| o.cfmt()).collect();
        cformat!("<red>{:<5}</>{}", self.opcode().to_string(), args.join(", "))
    }
}

impl fmt::Display for Inst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<String> = self.operands().iter().map(|o| o.to_string()).collect();
        write!(f, "{} {}", self.opcode(), args.join(", "))
    }
}
