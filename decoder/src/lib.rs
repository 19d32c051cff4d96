//! # ARM7TDMI Instruction Decoding Front End
//!
//! Decodes raw 32-bit ARM instruction words into architecture-neutral
//! [`InstructionDescriptor`]s: mnemonic, operands, addressing mode, flag
//! effects, branch behavior and timing hints. Nothing is executed here;
//! the descriptor is handed to an interpreter or disassembler downstream.
//!
//! ```
//! use decoder::{Mnemonic, decode};
//!
//! // ADD r0, r1, r2
//! let info = decode(0xE081_0002);
//! assert_eq!(info.mnemonic, Mnemonic::Add);
//! ```
//!
//! Decoding is pure and total: every word yields a complete descriptor,
//! with undefined encodings flagged via `traps` instead of an error. The
//! dispatch table behind [`decode`] is built once and read-only after
//! that, so calls are safe from any number of threads.

#[allow(clippy::cast_possible_truncation)]
mod bitwise;

pub mod condition;

#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_possible_wrap)]
#[allow(clippy::cast_sign_loss)]
pub mod decode;

pub mod instruction;
pub mod memory;
pub mod mnemonic;
pub mod operand;

pub use condition::Condition;
pub use decode::{decode, dispatch_index};
pub use instruction::{BranchKind, InstructionDescriptor, OperandFormat, PC};
pub use memory::{
    AccessWidth, AddressingPolicy, BlockDirection, Indexing, MemoryDescriptor, OffsetSource,
    Offsetting,
};
pub use mnemonic::Mnemonic;
pub use operand::{Operand, PsrKind, RegisterShift, ShiftAmount, ShiftKind};
