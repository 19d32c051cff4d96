//! The instruction descriptor: the decode engine's only output.

use serde::{Deserialize, Serialize};

use crate::condition::Condition;
use crate::memory::MemoryDescriptor;
use crate::mnemonic::Mnemonic;
use crate::operand::Operand;

/// Register index of the program counter.
pub const PC: u32 = 15;

/// How an instruction can redirect control flow.
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub enum BranchKind {
    /// Falls through to the next instruction.
    #[default]
    None,

    /// Direct branch with a fixed, sign-extended word offset.
    Direct,

    /// Direct branch that also writes the return address to the link
    /// register.
    DirectLinked,

    /// Target comes from a register (BX, any write to r15, or a block load
    /// whose register list includes r15).
    Indirect,
}

/// Per-slot operand classification bits, one byte lane per slot.
///
/// The executor reads this to tell inputs from outputs without re-deriving
/// the information from the mnemonic. Slot queries are kept in sync with
/// the operand array by the family decode routines.
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct OperandFormat(u32);

impl OperandFormat {
    const REGISTER: u32 = 1 << 0;
    const IMMEDIATE: u32 = 1 << 1;
    const MEMORY: u32 = 1 << 2;
    const AFFECTED: u32 = 1 << 3;
    const SHIFT_REGISTER: u32 = 1 << 4;
    const SHIFT_IMMEDIATE: u32 = 1 << 5;

    const fn lane(slot: usize) -> u32 {
        debug_assert!(slot < 4);
        (slot * 8) as u32
    }

    pub fn mark_register(&mut self, slot: usize) {
        self.0 |= Self::REGISTER << Self::lane(slot);
    }

    pub fn mark_immediate(&mut self, slot: usize) {
        self.0 |= Self::IMMEDIATE << Self::lane(slot);
    }

    pub fn mark_memory(&mut self, slot: usize) {
        self.0 |= Self::MEMORY << Self::lane(slot);
    }

    /// Marks the slot as written back by the instruction (an output).
    pub fn mark_affected(&mut self, slot: usize) {
        self.0 |= Self::AFFECTED << Self::lane(slot);
    }

    pub fn mark_shift_register(&mut self, slot: usize) {
        self.0 |= Self::SHIFT_REGISTER << Self::lane(slot);
    }

    pub fn mark_shift_immediate(&mut self, slot: usize) {
        self.0 |= Self::SHIFT_IMMEDIATE << Self::lane(slot);
    }

    pub fn clear_shift_immediate(&mut self, slot: usize) {
        self.0 &= !(Self::SHIFT_IMMEDIATE << Self::lane(slot));
    }

    #[must_use]
    pub const fn is_register(self, slot: usize) -> bool {
        self.0 >> Self::lane(slot) & Self::REGISTER != 0
    }

    #[must_use]
    pub const fn is_immediate(self, slot: usize) -> bool {
        self.0 >> Self::lane(slot) & Self::IMMEDIATE != 0
    }

    #[must_use]
    pub const fn is_memory(self, slot: usize) -> bool {
        self.0 >> Self::lane(slot) & Self::MEMORY != 0
    }

    #[must_use]
    pub const fn is_affected(self, slot: usize) -> bool {
        self.0 >> Self::lane(slot) & Self::AFFECTED != 0
    }

    #[must_use]
    pub const fn is_present(self, slot: usize) -> bool {
        self.0 >> Self::lane(slot) & (Self::REGISTER | Self::IMMEDIATE | Self::MEMORY) != 0
    }

    /// True when no slot is populated (illegal encodings and BKPT).
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Fully decoded description of one instruction word.
///
/// Produced fresh by every decode call and never retained by the engine;
/// the caller owns it outright. Decoding fills it deterministically, so two
/// decodes of the same opcode yield bit-identical descriptors.
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct InstructionDescriptor {
    /// Raw instruction word, kept for diagnostics and re-decoding.
    pub opcode: u32,

    /// Predicate field (bits 31-28), extracted verbatim and never
    /// evaluated here.
    pub condition: Condition,

    pub mnemonic: Mnemonic,

    pub branch_kind: BranchKind,

    /// Up to four operand slots; unused slots stay [`Operand::Unused`].
    pub operands: [Operand; 4],

    /// Per-slot classification, kept consistent with `operands`.
    pub format: OperandFormat,

    /// S-bit semantics: the instruction (conditionally) updates the flags,
    /// or writes a status register outright.
    pub sets_flags: bool,

    /// Memory reference details; only meaningful when a slot is tagged as
    /// a memory operand.
    pub memory: MemoryDescriptor,

    /// True for undefined encodings and BKPT: the executor must raise a
    /// synchronous exception instead of interpreting the operands.
    pub traps: bool,

    /// Advisory base cycle count. Always 1 at this layer.
    pub base_cycles: u8,

    /// Advisory extra internal cycles (register-specified shift amounts,
    /// load latency). Never affects decode correctness.
    pub internal_cycles: u8,
}
