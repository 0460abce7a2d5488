extern crate phf_codegen;

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// phf_codegen for the mnemonic lookup table. Only the instruction subset the
// target cpu implements is listed; everything else is rejected at assembly
// time. Pseudo-instructions (li, beqz, j) are not in the table, they rewrite
// to one of these entries in the driver.
fn main() {
    let path = Path::new(&env::var("OUT_DIR").unwrap()).join("opcode.rs");
    let mut file = BufWriter::new(File::create(&path).unwrap());

    write!(&mut file, "static OPCODE: phf::Map<&'static str, InstEnc> = ").unwrap();

    phf_codegen::Map::new()
        .entry("ADD",   "InstEnc{encoding: InstType::R, opcode: OP_REG, func3: Some(0b000), func7: Some(0b000_0000)}")
        .entry("MUL",   "InstEnc{encoding: InstType::R, opcode: OP_REG, func3: Some(0b000), func7: Some(0b000_0001)}")

        .entry("ADDI",  "InstEnc{encoding: InstType::I, opcode: OP_IMM, func3: Some(0b000), func7: None}")

        .entry("LW",    "InstEnc{encoding: InstType::I, opcode: LOAD, func3: Some(0b010), func7: None}")
        .entry("SW",    "InstEnc{encoding: InstType::S, opcode: STORE, func3: Some(0b010), func7: None}")

        .entry("BEQ",   "InstEnc{encoding: InstType::B, opcode: BRANCH, func3: Some(0b000), func7: None}")
        .entry("BNE",   "InstEnc{encoding: InstType::B, opcode: BRANCH, func3: Some(0b001), func7: None}")
        .entry("BLT",   "InstEnc{encoding: InstType::B, opcode: BRANCH, func3: Some(0b100), func7: None}")

        .entry("JAL",   "InstEnc{encoding: InstType::J, opcode: JAL, func3: None, func7: None}")

        .entry("ECALL", "InstEnc{encoding: InstType::I, opcode: SYSTEM, func3: Some(0b000), func7: None}")

        .build(&mut file)
        .unwrap();
    write!(&mut file, ";\n").unwrap();
}
