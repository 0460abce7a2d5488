use crate::asm::ast;
use crate::asm::error::AsmError;

/// Parse a decimal or `0x`-prefixed hex immediate token. Negative literals
/// are accepted in both radixes: the sign is stripped first, the magnitude
/// parsed, then negated. No field-width check happens here, truncation is
/// the encoder's job.
pub fn parse_imm(token: &str) -> Result<i32, AsmError> {
    let text = token.trim().trim_end_matches(',');

    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let magnitude = match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        Some(hex) => i64::from_str_radix(hex, 16),
        None => digits.parse::<i64>(),
    }
    .map_err(|_| AsmError::MalformedImmediate(text.to_string()))?;

    let value = if negative { -magnitude } else { magnitude };
    Ok(value as i32)
}

/// Parse a `<offset>(<reg>)` memory operand into (offset, base register).
/// An empty offset defaults to 0.
pub fn parse_mem(token: &str) -> Result<(i32, u32), AsmError> {
    let text = token.trim().trim_end_matches(',');

    let (offset, base) = text
        .split_once('(')
        .ok_or_else(|| AsmError::InvalidOperand(text.to_string()))?;
    let base = ast::resolve(base.trim_end_matches(')'))?;

    let offset = if offset.trim().is_empty() {
        0
    } else {
        parse_imm(offset)?
    };

    Ok((offset, base))
}
