use phf;

// Instruction formats for risc-v (not compressed)
// Notes:
// Register - x1->x31 is general purpose, x0 always hardcoded to 0
// Instruction - must be aligned on four byte memory
// Imm - always sign extended, sign always 31st bit
#[derive(Debug)]
#[derive(Clone)]
pub enum InstType {
    R,
    I,
    S,
    B, // Subtype of S
    U,
    J, // Subtype of U
}

// Opcode
pub const OP_IMM: u32 = 0b0010011; // I - (OP-IMM in docs)
pub const OP_REG: u32 = 0b0110011; // R - (OP in docs)
pub const LUI:    u32 = 0b0110111; // U
pub const JAL:    u32 = 0b1101111; // J - imm -> signed offset, in multiples of 2 bytes
pub const BRANCH: u32 = 0b1100011; // B - signed offset in multiples of 2 + pc
pub const LOAD:   u32 = 0b0000011; // I
pub const STORE:  u32 = 0b0100011; // S
pub const SYSTEM: u32 = 0b1110011; // I - ecall and other priviledged instructions

// Inst Encoding
#[derive(Debug)]
#[derive(Clone)]
pub struct InstEnc {
    pub encoding: InstType,
    pub opcode:   u32,
    pub func3:    Option<u32>,
    pub func7:    Option<u32>,
}

// Codegen from phf_codegen
include!(concat!(env!("OUT_DIR"), "/opcode.rs"));

pub fn lookup(keyword: &str) -> Option<InstEnc> {
    OPCODE.get(keyword).cloned()
}

#[cfg(test)]
mod lookup_test {
    use super::*;

    #[test]
    fn known_mnemonics() {
        let add = lookup("ADD").unwrap();
        assert_eq!(add.opcode, OP_REG);
        assert_eq!(add.func3, Some(0b000));
        assert_eq!(add.func7, Some(0b000_0000));

        let mul = lookup("MUL").unwrap();
        assert_eq!(mul.opcode, OP_REG);
        assert_eq!(mul.func7, Some(0b000_0001));

        let bne = lookup("BNE").unwrap();
        assert_eq!(bne.opcode, BRANCH);
        assert_eq!(bne.func3, Some(0b001));

        assert_eq!(lookup("JAL").unwrap().opcode, JAL);
        assert_eq!(lookup("ECALL").unwrap().opcode, SYSTEM);
    }

    #[test]
    fn unknown_mnemonics() {
        // Pseudo-instructions are rewritten by the driver, they have no
        // entry of their own
        assert!(lookup("LI").is_none());
        assert!(lookup("BEQZ").is_none());
        assert!(lookup("J").is_none());

        assert!(lookup("NOP").is_none());
        assert!(lookup("FOO").is_none());
    }
}
