use std::str::FromStr;

use crate::asm::error::AsmError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reg {
    X0 = 0, X1, X2, X3, X4, X5, X6, X7, X8, X9,
    X10, X11, X12, X13, X14, X15, X16, X17, X18, X19,
    X20, X21, X22, X23, X24, X25, X26, X27, X28, X29,
    X30, X31
}

impl From<Reg> for u32 {
    fn from(original: Reg) -> u32 {
        original as u32
    }
}

impl FromStr for Reg {
    type Err = ParseRegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zero" | "x0"      => Ok(Reg::X0),
            "ra" | "x1"        => Ok(Reg::X1),
            "sp" | "x2"        => Ok(Reg::X2),
            "gp" | "x3"        => Ok(Reg::X3),
            "tp" | "x4"        => Ok(Reg::X4),
            "t0" | "x5"        => Ok(Reg::X5),
            "t1" | "x6"        => Ok(Reg::X6),
            "t2" | "x7"        => Ok(Reg::X7),
            "s0" | "fp" | "x8" => Ok(Reg::X8),
            "s1" | "x9"        => Ok(Reg::X9),
            "a0" | "x10"       => Ok(Reg::X10),
            "a1" | "x11"       => Ok(Reg::X11),
            "a2" | "x12"       => Ok(Reg::X12),
            "a3" | "x13"       => Ok(Reg::X13),
            "a4" | "x14"       => Ok(Reg::X14),
            "a5" | "x15"       => Ok(Reg::X15),
            "a6" | "x16"       => Ok(Reg::X16),
            "a7" | "x17"       => Ok(Reg::X17),
            "s2" | "x18"       => Ok(Reg::X18),
            "s3" | "x19"       => Ok(Reg::X19),
            "s4" | "x20"       => Ok(Reg::X20),
            "s5" | "x21"       => Ok(Reg::X21),
            "s6" | "x22"       => Ok(Reg::X22),
            "s7" | "x23"       => Ok(Reg::X23),
            "s8" | "x24"       => Ok(Reg::X24),
            "s9" | "x25"       => Ok(Reg::X25),
            "s10" | "x26"      => Ok(Reg::X26),
            "s11" | "x27"      => Ok(Reg::X27),
            "t3" | "x28"       => Ok(Reg::X28),
            "t4" | "x29"       => Ok(Reg::X29),
            "t5" | "x30"       => Ok(Reg::X30),
            "t6" | "x31"       => Ok(Reg::X31),
            _                  => Err(ParseRegError { _priv: () }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRegError { _priv: () }

/// Resolve an operand-position register token to its 5-bit index.
/// Case-insensitive, whitespace-trimmed, tolerates the trailing comma
/// separator.
pub fn resolve(token: &str) -> Result<u32, AsmError> {
    let name = token.trim().trim_end_matches(',');
    Reg::from_str(&name.to_lowercase())
        .map(u32::from)
        .map_err(|_| AsmError::UnknownRegister(name.to_string()))
}

#[cfg(test)]
mod resolve_test {
    use super::*;

    #[test]
    fn canonical_names() {
        for i in 0..32 {
            assert_eq!(resolve(&format!("x{}", i)), Ok(i));
        }
    }

    #[test]
    fn abi_aliases() {
        let aliases = [
            ("zero", 0), ("ra", 1), ("sp", 2), ("gp", 3), ("tp", 4),
            ("t0", 5), ("t1", 6), ("t2", 7),
            ("s0", 8), ("fp", 8), ("s1", 9),
            ("a0", 10), ("a1", 11), ("a2", 12), ("a3", 13),
            ("a4", 14), ("a5", 15), ("a6", 16), ("a7", 17),
            ("s2", 18), ("s3", 19), ("s4", 20), ("s5", 21),
            ("s6", 22), ("s7", 23), ("s8", 24), ("s9", 25),
            ("s10", 26), ("s11", 27),
            ("t3", 28), ("t4", 29), ("t5", 30), ("t6", 31),
        ];

        for (name, num) in aliases {
            assert_eq!(resolve(name), Ok(num));
            // Each alias is interchangeable with its canonical name
            assert_eq!(resolve(name), resolve(&format!("x{}", num)));
        }
    }

    #[test]
    fn operand_separator_and_case() {
        assert_eq!(resolve("sp,"), Ok(2));
        assert_eq!(resolve("  a0, "), Ok(10));
        assert_eq!(resolve("SP"), Ok(2));
        assert_eq!(resolve("T3"), Ok(28));
    }

    #[test]
    fn unknown_names() {
        assert_eq!(resolve("x32"), Err(AsmError::UnknownRegister("x32".to_string())));
        assert_eq!(resolve("q7"), Err(AsmError::UnknownRegister("q7".to_string())));
        assert_eq!(resolve(""), Err(AsmError::UnknownRegister("".to_string())));
    }
}
