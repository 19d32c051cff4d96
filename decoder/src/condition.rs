//! # ARM Conditional Execution
//!
//! Every ARM instruction carries a 4-bit condition field in bits 31-28.
//! The decoder extracts the field verbatim; evaluating it against the CPSR
//! flags is the executor's job, so nothing here looks at flag state.
//!
//! | Code | Suffix | Meaning             |
//! |------|--------|---------------------|
//! | 0000 | EQ     | Equal (Z=1)         |
//! | 0001 | NE     | Not equal           |
//! | 0010 | CS     | Carry set           |
//! | 0011 | CC     | Carry clear         |
//! | 0100 | MI     | Negative            |
//! | 0101 | PL     | Non-negative        |
//! | 0110 | VS     | Overflow set        |
//! | 0111 | VC     | Overflow clear      |
//! | 1000 | HI     | Unsigned higher     |
//! | 1001 | LS     | Unsigned lower/same |
//! | 1010 | GE     | Signed >=           |
//! | 1011 | LT     | Signed <            |
//! | 1100 | GT     | Signed >            |
//! | 1101 | LE     | Signed <=           |
//! | 1110 | AL     | Always              |
//! | 1111 | NV     | Never (reserved)    |

use serde::{Deserialize, Serialize};

/// Condition codes for ARM conditional execution.
///
/// See the [module-level documentation](self) for the full table.
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub enum Condition {
    EQ = 0x0,
    NE = 0x1,
    CS = 0x2,
    CC = 0x3,
    MI = 0x4,
    PL = 0x5,
    VS = 0x6,
    VC = 0x7,
    HI = 0x8,
    LS = 0x9,
    GE = 0xA,
    LT = 0xB,
    GT = 0xC,
    LE = 0xD,
    #[default]
    AL = 0xE,

    /// Reserved on ARMv4. Kept so the predicate survives a round trip
    /// through the descriptor untouched.
    NV = 0xF,
}

impl From<u8> for Condition {
    fn from(value: u8) -> Self {
        match value {
            0x0 => Self::EQ,
            0x1 => Self::NE,
            0x2 => Self::CS,
            0x3 => Self::CC,
            0x4 => Self::MI,
            0x5 => Self::PL,
            0x6 => Self::VS,
            0x7 => Self::VC,
            0x8 => Self::HI,
            0x9 => Self::LS,
            0xA => Self::GE,
            0xB => Self::LT,
            0xC => Self::GT,
            0xD => Self::LE,
            0xE => Self::AL,
            0xF => Self::NV,
            _ => unreachable!("condition fields are 4 bits"),
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if *self == Self::AL {
            return Ok(());
        }

        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn round_trips_the_nibble() {
        for value in 0..16_u8 {
            assert_eq!(Condition::from(value) as u8, value);
        }
    }

    #[test]
    fn always_displays_as_empty_suffix() {
        assert_eq!(Condition::AL.to_string(), "");
        assert_eq!(Condition::EQ.to_string(), "EQ");
    }
}
