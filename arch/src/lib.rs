pub mod alu;
pub mod inst;
pub mod line;
pub mod op;
pub mod operand;
pub mod reg;

pub use inst::Inst;
pub use line::Line;
pub use reg::Reg;
