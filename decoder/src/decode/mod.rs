//! # The Decode Engine
//!
//! A dense dispatch table over the 32-bit opcode space. The table is keyed
//! by a 12-bit index concatenating opcode bits 27-20 (the primary opcode
//! class) with bits 7-4 (the secondary discriminator that separates, e.g.,
//! register-shift operands from immediate-shift operands and the multiply
//! sub-forms):
//!
//! ```text
//! 31   28 27      20 19              8 7    4 3    0
//! [Cond ] [ hi 8   ] [ ............. ] [lo 4 ] [ .. ]
//!            └──────────── index ────────┘
//! ```
//!
//! Each of the 4096 slots names one fully specified instruction variant
//! (mnemonic x addressing mode x S bit x writeback/direction combination).
//! The table is built once, on first use, by enumerating the whole index
//! space; every index not claimed by a defined variant decodes as illegal,
//! so there are no gaps. After construction the table is read-only and
//! decode calls are safe from any number of threads.

mod alu;
mod block;
mod branch;
mod load_store;
mod misc;
mod multiply;
mod psr;
mod table;

use once_cell::sync::Lazy;

use crate::bitwise::Bits;
use crate::condition::Condition;
use crate::instruction::InstructionDescriptor;
use crate::memory::{AccessWidth, BlockDirection, Indexing, Offsetting};
use crate::mnemonic::Mnemonic;
use crate::operand::{PsrKind, ShiftKind};

const TABLE_SIZE: usize = 0x1000;

static TABLE: Lazy<Box<[DecodeEntry; TABLE_SIZE]>> = Lazy::new(table::build);

/// Computes the 12-bit dispatch index of an opcode.
///
/// This is architecture-defined: bits 27-20 concatenated with bits 7-4.
#[must_use]
pub fn dispatch_index(opcode: u32) -> usize {
    ((opcode >> 16) & 0xFF0 | (opcode >> 4) & 0x00F) as usize
}

/// Decodes one ARM instruction word into a fresh descriptor.
///
/// Total and deterministic: every opcode yields a complete descriptor, with
/// undefined encodings marked via [`traps`](InstructionDescriptor::traps)
/// rather than an error. Pure, non-blocking, constant time.
#[must_use]
pub fn decode(opcode: u32) -> InstructionDescriptor {
    let mut info = InstructionDescriptor {
        opcode,
        condition: Condition::from(opcode.get_bits(28..=31) as u8),
        base_cycles: 1,
        ..InstructionDescriptor::default()
    };

    TABLE[dispatch_index(opcode)].run(opcode, &mut info);
    info
}

/// How a data-processing instruction encodes its second operand.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub(crate) enum AluOperand {
    /// Register run through the barrel shifter; bit 4 of the opcode picks
    /// between an immediate amount and a register-sourced amount.
    Shift(ShiftKind),

    /// 8-bit immediate rotated right by twice the 4-bit rotate field.
    Immediate,
}

/// How a single-register transfer encodes its offset.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub(crate) enum OffsetEncoding {
    /// Addressing mode 2: register shifted by an immediate amount.
    Mode2Shift(ShiftKind),

    /// Addressing mode 2: 12-bit immediate.
    Mode2Immediate,

    /// Addressing mode 3: plain register.
    Mode3Register,

    /// Addressing mode 3: 8-bit immediate split across two nibble fields.
    Mode3Immediate,
}

/// Addressing-time policy of one load/store table variant.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub(crate) struct Timing {
    pub indexing: Indexing,
    pub offsetting: Offsetting,
    pub writeback: bool,
}

/// One dispatch table slot: the variant parameters the family routines
/// need, fixed at construction time.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub(crate) enum DecodeEntry {
    Alu {
        op: Mnemonic,
        sets_flags: bool,
        operand: AluOperand,
    },
    Multiply {
        op: Mnemonic,
        sets_flags: bool,
    },
    MultiplyLong {
        op: Mnemonic,
        sets_flags: bool,
    },
    LoadStore {
        op: Mnemonic,
        width: AccessWidth,
        offset: OffsetEncoding,
        timing: Timing,
    },
    Block {
        op: Mnemonic,
        direction: BlockDirection,
        writeback: bool,
        psr_transfer: bool,
    },
    Swap {
        width: AccessWidth,
    },
    Branch {
        link: bool,
    },
    BranchExchange,
    StatusToRegister {
        psr: PsrKind,
    },
    RegisterToStatus {
        psr: PsrKind,
        immediate: bool,
    },
    SoftwareInterrupt,
    Breakpoint,
    Illegal,
}

impl DecodeEntry {
    fn run(self, opcode: u32, info: &mut InstructionDescriptor) {
        match self {
            Self::Alu {
                op,
                sets_flags,
                operand,
            } => alu::decode(op, sets_flags, operand, opcode, info),
            Self::Multiply { op, sets_flags } => multiply::decode(op, sets_flags, opcode, info),
            Self::MultiplyLong { op, sets_flags } => {
                multiply::decode_long(op, sets_flags, opcode, info);
            }
            Self::LoadStore {
                op,
                width,
                offset,
                timing,
            } => load_store::decode(op, width, offset, timing, opcode, info),
            Self::Block {
                op,
                direction,
                writeback,
                psr_transfer,
            } => block::decode(op, direction, writeback, psr_transfer, opcode, info),
            Self::Swap { width } => load_store::decode_swap(width, opcode, info),
            Self::Branch { link } => branch::decode(link, opcode, info),
            Self::BranchExchange => branch::decode_exchange(opcode, info),
            Self::StatusToRegister { psr } => psr::decode_mrs(psr, opcode, info),
            Self::RegisterToStatus { psr, immediate } => {
                psr::decode_msr(psr, immediate, opcode, info);
            }
            Self::SoftwareInterrupt => misc::decode_swi(opcode, info),
            Self::Breakpoint => misc::decode_breakpoint(info),
            Self::Illegal => misc::decode_illegal(opcode, info),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::Rng;

    #[test]
    fn dispatch_index_concatenates_the_two_fields() {
        // hi 8 = 0xE5, lo 4 = 0x3.
        assert_eq!(dispatch_index(0b1110_1110_0101_0000_0000_0000_0011_0000), 0xE53);
        assert_eq!(dispatch_index(0x0000_0000), 0x000);
        assert_eq!(dispatch_index(0xFFFF_FFFF), 0xFFF);
    }

    #[test]
    fn every_index_is_bound() {
        // The whole opcode class space decodes to something: either a real
        // variant or an explicit trap, never a gap.
        for index in 0..TABLE_SIZE {
            let opcode = ((index as u32 & 0xFF0) << 16) | ((index as u32 & 0xF) << 4);
            let info = decode(opcode);
            if info.traps {
                assert!(matches!(info.mnemonic, Mnemonic::Ill | Mnemonic::Bkpt));
                if info.mnemonic == Mnemonic::Ill {
                    assert!(info.format.is_empty());
                }
            }
        }
    }

    #[test]
    fn decoding_is_deterministic() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let opcode: u32 = rng.r#gen();
            assert_eq!(decode(opcode), decode(opcode));
        }
    }

    #[test]
    fn descriptor_carries_the_raw_word_and_condition() {
        let info = decode(0b0001_0000_0000_0000_0000_0000_0000_0000);
        assert_eq!(info.opcode, 0x1000_0000);
        assert_eq!(info.condition, crate::condition::Condition::NE);
        assert_eq!(info.base_cycles, 1);
    }
}
