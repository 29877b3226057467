use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
pub enum Alu {
    ADD,
    SUB,
    MUL,
    SDIV,
}

/// 32-bit two's complement, wrapping. Division by zero divides by 1.
pub fn alu(op: Alu, a: i32, b: i32) -> i32 {
    use Alu::*;
    match op {
        ADD => a.wrapping_add(b),
        SUB => a.wrapping_sub(b),
        MUL => a.wrapping_mul(b),
        SDIV => a.wrapping_div(if b == 0 { 1 } else { b }),
    }
}
