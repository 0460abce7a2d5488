use twiddle::Twiddle;

// Field packers for the six risc-v instruction formats. Immediates arrive as
// signed byte values and are masked to the field width via two's-complement
// truncation, never range-checked.

fn select_and_shift(imm: u32, hi: usize, lo: usize, shift: usize) -> u32 {
    ((imm & u32::mask(hi..=lo)) >> lo) << shift
}

/// R-type
/// 31-25, 24-20, 19-15, 14-12, 11-7, 6-0
/// func7,   rs2,   rs1, func3,   rd, opcode
pub fn r_type(opcode: u32, rd: u32, func3: u32, rs1: u32, rs2: u32, func7: u32) -> u32 {
    opcode | (rd << 7) | (func3 << 12) | (rs1 << 15) | (rs2 << 20) | (func7 << 25)
}

/// I-type
/// 31-20, 19-15, 14-12, 11-7, 6-0
///   imm,   rs1, func3,   rd, opcode
pub fn i_type(opcode: u32, rd: u32, func3: u32, rs1: u32, imm: i32) -> u32 {
    let mut ret = opcode | (rd << 7) | (func3 << 12) | (rs1 << 15);

    // imm[11:0]
    ret |= select_and_shift(imm as u32, 11, 0, 20);
    ret
}

/// S-type
/// 31-25, 24-20, 19-15, 14-12, 11-7, 6-0
///   imm,   rs2,   rs1, func3,  imm, opcode
pub fn s_type(opcode: u32, func3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    let mut ret = opcode | (func3 << 12) | (rs1 << 15) | (rs2 << 20);
    let imm = imm as u32;

    // imm[4:0]
    ret |= select_and_shift(imm, 4, 0, 7);
    // imm[11:5]
    ret |= select_and_shift(imm, 11, 5, 25);
    ret
}

/// B-type, the branch-offset layout. The immediate's bit 0 has no slot in
/// the word, branch targets are word aligned; imm[12] lands in the sign
/// position.
pub fn b_type(opcode: u32, func3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    let mut ret = opcode | (func3 << 12) | (rs1 << 15) | (rs2 << 20);
    let imm = imm as u32;

    // imm[11]
    ret |= select_and_shift(imm, 11, 11, 7);
    // imm[4:1]
    ret |= select_and_shift(imm, 4, 1, 8);
    // imm[10:5]
    ret |= select_and_shift(imm, 10, 5, 25);
    // imm[12]
    ret |= select_and_shift(imm, 12, 12, 31);
    ret
}

/// U-type
/// 31-12, 11-7, 6-0
///   imm,   rd, opcode
pub fn u_type(opcode: u32, rd: u32, imm: i32) -> u32 {
    let mut ret = opcode | (rd << 7);

    // imm[19:0]
    ret |= select_and_shift(imm as u32, 19, 0, 12);
    ret
}

/// J-type, the jump-offset layout. Same motivation as B-type: no slot for
/// bit 0, imm[20] in the sign position.
pub fn j_type(opcode: u32, rd: u32, imm: i32) -> u32 {
    let mut ret = opcode | (rd << 7);
    let imm = imm as u32;

    // imm[19:12]
    ret |= select_and_shift(imm, 19, 12, 12);
    // imm[11]
    ret |= select_and_shift(imm, 11, 11, 20);
    // imm[10:1]
    ret |= select_and_shift(imm, 10, 1, 21);
    // imm[20]
    ret |= select_and_shift(imm, 20, 20, 31);
    ret
}
