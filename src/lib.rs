pub mod asm;
pub mod opcode;
