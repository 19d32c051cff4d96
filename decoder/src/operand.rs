//! Operand model.
//!
//! The same instruction bits mean different things per family (a barrel
//! shifter specification, a rotated immediate, a memory reference), so each
//! operand slot is a tagged union selected by the family routine rather
//! than an untyped bit-packed field.

use serde::{Deserialize, Serialize};

/// Barrel shifter operation applied to a register operand.
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub enum ShiftKind {
    /// No shift. Also what `LSL #0` decodes to: same bit pattern, but it
    /// must not touch the carry-out the way a real LSL would.
    #[default]
    None,

    /// Logical shift left.
    Lsl,

    /// Logical shift right.
    Lsr,

    /// Arithmetic shift right.
    Asr,

    /// Rotate right.
    Ror,

    /// Rotate right extended, through the carry flag. `ROR #0` decodes to
    /// this: there is no encoding for a zero-amount rotate.
    Rrx,
}

impl ShiftKind {
    /// Maps the 2-bit shift type field (bits 6-5) to its shift kind.
    /// The zero-amount special cases are applied later, by the addressing
    /// mode decoding.
    pub const fn from_type_bits(bits: u32) -> Self {
        match bits & 0b11 {
            0b00 => Self::Lsl,
            0b01 => Self::Lsr,
            0b10 => Self::Asr,
            _ => Self::Ror,
        }
    }
}

impl std::fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::None => "",
            Self::Lsl => "LSL",
            Self::Lsr => "LSR",
            Self::Asr => "ASR",
            Self::Ror => "ROR",
            Self::Rrx => "RRX",
        };

        f.write_str(name)
    }
}

/// Where the shift amount comes from.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub enum ShiftAmount {
    /// Immediate amount, 0-31 (32 for the `LSR #0`/`ASR #0` memory-offset
    /// encodings).
    Immediate(u32),

    /// Amount taken from the bottom byte of a register. Costs one extra
    /// internal cycle.
    Register(u32),
}

impl Default for ShiftAmount {
    fn default() -> Self {
        Self::Immediate(0)
    }
}

/// A fully resolved shift specification attached to a register operand.
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct RegisterShift {
    pub kind: ShiftKind,
    pub amount: ShiftAmount,
}

/// Which program status register a MRS/MSR moves.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub enum PsrKind {
    /// The current program status register.
    Cpsr,

    /// The saved program status register of the active privileged mode.
    Spsr,
}

impl std::fmt::Display for PsrKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cpsr => f.write_str("CPSR"),
            Self::Spsr => f.write_str("SPSR"),
        }
    }
}

/// One of the four operand slots of a decoded instruction.
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub enum Operand {
    /// Slot not used by this instruction.
    #[default]
    Unused,

    /// General purpose register, optionally run through the barrel shifter.
    Register { reg: u32, shift: RegisterShift },

    /// Immediate value, already sign/rotate resolved.
    Immediate(i32),

    /// Memory reference; base register, offset and addressing policy live
    /// in the instruction's memory descriptor.
    Memory,

    /// Status register target of a MRS/MSR, with the field mask naming
    /// which byte lanes an MSR writes (`0b1001` = flags + control).
    Psr { psr: PsrKind, field_mask: u32 },
}

impl Operand {
    /// Plain register operand, no shift.
    pub const fn register(reg: u32) -> Self {
        Self::Register {
            reg,
            shift: RegisterShift {
                kind: ShiftKind::None,
                amount: ShiftAmount::Immediate(0),
            },
        }
    }
}
