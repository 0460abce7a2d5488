use std::error::Error;
use std::fmt;

/// Fatal assembly errors, each carrying the offending token or line.
/// The first one encountered aborts the whole run; no partial output is
/// produced. Out-of-range immediates are not an error, they are masked to
/// the field width at encode time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    UnknownRegister(String),
    MalformedImmediate(String),
    InvalidOperand(String),
    UndefinedLabel(String),
    UnsupportedInstruction(String),
}

impl fmt::Display for AsmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsmError::UnknownRegister(token)
                => write!(f, "unknown register: {}", token),
            AsmError::MalformedImmediate(token)
                => write!(f, "malformed immediate: {}", token),
            AsmError::InvalidOperand(line)
                => write!(f, "invalid operand: {}", line),
            AsmError::UndefinedLabel(name)
                => write!(f, "undefined label: {}", name),
            AsmError::UnsupportedInstruction(mnemonic)
                => write!(f, "unsupported instruction: {}", mnemonic),
        }
    }
}

impl Error for AsmError {}
