use std::collections::HashMap;

use crate::opcode;
use crate::opcode::InstEnc;

pub mod ast;
pub mod encode;
pub mod error;
pub mod operand;

use error::AsmError;

/// Assemble source text into the ordered sequence of encoded words, one per
/// instruction, in program order (index == address / 4).
///
/// First pass collects label addresses so branches may reference forward as
/// well as backward; second pass encodes each recorded instruction line.
/// The first error aborts the whole run.
pub fn assemble(input: &str) -> Result<Vec<u32>, AsmError> {
    let mut labels: HashMap<&str, u32> = HashMap::new();
    let mut insts: Vec<(u32, &str)> = Vec::new();
    let mut address: u32 = 0;

    // First pass: strip comments, bind labels, record instruction lines
    for line in input.lines() {
        let line = match line.find('#') {
            Some(x) => &line[..x],
            None => line,
        };
        let line = line.trim();

        // Directives are recognized and ignored, not validated
        if line.is_empty() || line.starts_with('.') {
            continue;
        }

        if let Some(name) = line.strip_suffix(':') {
            // Label lines occupy no address
            labels.insert(name, address);
        } else {
            insts.push((address, line));
            address += 4;
        }
    }

    // Second pass: encode against the completed label table
    let mut words = Vec::with_capacity(insts.len());
    for (addr, line) in insts {
        words.push(encode_line(addr, line, &labels)?);
    }

    Ok(words)
}

fn encode_line(addr: u32, line: &str, labels: &HashMap<&str, u32>) -> Result<u32, AsmError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let mnemonic = parts[0].to_lowercase();
    let args = &parts[1..];

    let word = match mnemonic.as_str() {
        // li rd imm -> addi rd x0 imm
        "li" => {
            let enc = lut("ADDI")?;
            let rd = ast::resolve(arg(args, 0, line)?)?;
            let imm = operand::parse_imm(arg(args, 1, line)?)?;
            encode::i_type(enc.opcode, rd, enc.func3.unwrap_or(0), 0, imm)
        },
        "lw" => {
            let enc = lut("LW")?;
            let rd = ast::resolve(arg(args, 0, line)?)?;
            let (offset, rs1) = operand::parse_mem(arg(args, 1, line)?)?;
            encode::i_type(enc.opcode, rd, enc.func3.unwrap_or(0), rs1, offset)
        },
        "sw" => {
            let enc = lut("SW")?;
            let rs2 = ast::resolve(arg(args, 0, line)?)?;
            let (offset, rs1) = operand::parse_mem(arg(args, 1, line)?)?;
            encode::s_type(enc.opcode, enc.func3.unwrap_or(0), rs1, rs2, offset)
        },
        "add" | "mul" => {
            let enc = lut(&mnemonic.to_uppercase())?;
            let rd = ast::resolve(arg(args, 0, line)?)?;
            let rs1 = ast::resolve(arg(args, 1, line)?)?;
            let rs2 = ast::resolve(arg(args, 2, line)?)?;
            encode::r_type(enc.opcode, rd, enc.func3.unwrap_or(0), rs1, rs2, enc.func7.unwrap_or(0))
        },
        "addi" => {
            let enc = lut("ADDI")?;
            let rd = ast::resolve(arg(args, 0, line)?)?;
            let rs1 = ast::resolve(arg(args, 1, line)?)?;
            let imm = operand::parse_imm(arg(args, 2, line)?)?;
            encode::i_type(enc.opcode, rd, enc.func3.unwrap_or(0), rs1, imm)
        },
        "beq" | "bne" | "blt" => {
            let enc = lut(&mnemonic.to_uppercase())?;
            let rs1 = ast::resolve(arg(args, 0, line)?)?;
            let rs2 = ast::resolve(arg(args, 1, line)?)?;
            let offset = relative_offset(labels, arg(args, 2, line)?, addr)?;
            encode::b_type(enc.opcode, enc.func3.unwrap_or(0), rs1, rs2, offset)
        },
        // beqz rs1 label -> beq rs1 x0 label
        "beqz" => {
            let enc = lut("BEQ")?;
            let rs1 = ast::resolve(arg(args, 0, line)?)?;
            let offset = relative_offset(labels, arg(args, 1, line)?, addr)?;
            encode::b_type(enc.opcode, enc.func3.unwrap_or(0), rs1, 0, offset)
        },
        // j label -> jal x0 label
        "j" => {
            let enc = lut("JAL")?;
            let offset = relative_offset(labels, arg(args, 0, line)?, addr)?;
            encode::j_type(enc.opcode, 0, offset)
        },
        // func12 - ECALL - 0b000000000000, the word is the bare opcode
        "ecall" => {
            let enc = lut("ECALL")?;
            encode::i_type(enc.opcode, 0, enc.func3.unwrap_or(0), 0, 0)
        },
        _ => return Err(AsmError::UnsupportedInstruction(mnemonic)),
    };

    Ok(word)
}

fn lut(keyword: &str) -> Result<InstEnc, AsmError> {
    opcode::lookup(keyword)
        .ok_or_else(|| AsmError::UnsupportedInstruction(keyword.to_lowercase()))
}

fn arg<'a>(args: &[&'a str], idx: usize, line: &str) -> Result<&'a str, AsmError> {
    args.get(idx)
        .copied()
        .ok_or_else(|| AsmError::InvalidOperand(line.to_string()))
}

fn relative_offset(labels: &HashMap<&str, u32>, name: &str, inst_addr: u32) -> Result<i32, AsmError> {
    let name = name.trim();
    let target = labels
        .get(name)
        .copied()
        .ok_or_else(|| AsmError::UndefinedLabel(name.to_string()))?;

    // Signed byte offset relative to the referencing instruction, negative
    // for backward branches
    Ok((target as i64 - inst_addr as i64) as i32)
}
