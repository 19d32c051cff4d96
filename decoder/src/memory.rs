//! Memory reference description for load, store, swap and block transfers.

use serde::{Deserialize, Serialize};

use crate::operand::RegisterShift;

/// When the offset is applied relative to the access.
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub enum Indexing {
    /// Apply the offset after the transfer (the base itself addresses the
    /// access, then moves).
    #[default]
    Post,

    /// Apply the offset before the transfer.
    Pre,
}

impl From<bool> for Indexing {
    fn from(state: bool) -> Self {
        match state {
            false => Self::Post,
            true => Self::Pre,
        }
    }
}

/// Whether the offset is added to or subtracted from the base.
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub enum Offsetting {
    /// Subtract the offset from the base.
    #[default]
    Down,

    /// Add the offset to the base.
    Up,
}

impl From<bool> for Offsetting {
    fn from(state: bool) -> Self {
        match state {
            false => Self::Down,
            true => Self::Up,
        }
    }
}

/// Access width and signedness.
///
/// The translated variants force user-mode address translation regardless
/// of the current privilege mode (the `LDRT`/`STRT` family).
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub enum AccessWidth {
    #[default]
    Word,
    Byte,
    Halfword,
    SignedByte,
    SignedHalfword,
    TranslatedWord,
    TranslatedByte,
}

/// Where the offset comes from.
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub enum OffsetSource {
    /// No offset; the base register addresses the access directly (SWP).
    #[default]
    None,

    /// Immediate offset: 12 bits for word/byte accesses, 8 bits split
    /// across two nibble fields for halfword/signed accesses.
    Immediate(u32),

    /// Register offset, optionally shifted by an immediate amount.
    Register { reg: u32, shift: RegisterShift },
}

/// Traversal order of a block transfer.
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub enum BlockDirection {
    #[default]
    IncrementAfter,
    IncrementBefore,
    DecrementAfter,
    DecrementBefore,
}

/// Addressing-time policy of a memory operand.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub enum AddressingPolicy {
    /// Single-register transfer (and SWP, which is always a zero-offset
    /// access with no writeback).
    Single {
        indexing: Indexing,
        offsetting: Offsetting,
        writeback: bool,
    },

    /// Block transfer. The register list travels here rather than in an
    /// operand slot: bit `r` set means register `r` is transferred.
    /// `psr_transfer` marks the S-bit variant that moves the banked user
    /// registers / SPSR instead, a distinct instruction rather than a
    /// post-hoc flag.
    Block {
        direction: BlockDirection,
        writeback: bool,
        psr_transfer: bool,
        register_list: u16,
    },
}

impl Default for AddressingPolicy {
    fn default() -> Self {
        Self::Single {
            indexing: Indexing::Post,
            offsetting: Offsetting::Down,
            writeback: false,
        }
    }
}

/// Memory descriptor, only meaningful when an operand slot is tagged as a
/// memory reference.
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct MemoryDescriptor {
    pub base_register: u32,
    pub width: AccessWidth,
    pub offset: OffsetSource,
    pub policy: AddressingPolicy,
}
