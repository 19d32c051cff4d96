//! Status register transfers (MRS/MSR).
//!
//! The current and saved status registers get separate dispatch table
//! entries; nothing here branches on the privilege mode at decode time.

use crate::bitwise::{Bits, rotate_right};
use crate::instruction::InstructionDescriptor;
use crate::mnemonic::Mnemonic;
use crate::operand::{Operand, PsrKind};

/// MRS: move status register to a general purpose register.
pub(super) fn decode_mrs(psr: PsrKind, opcode: u32, info: &mut InstructionDescriptor) {
    info.mnemonic = Mnemonic::Mrs;

    info.operands[0] = Operand::register(opcode.get_bits(12..=15));
    info.format.mark_register(0);
    info.format.mark_affected(0);
    info.operands[1] = Operand::Psr { psr, field_mask: 0 };
    info.format.mark_register(1);
}

/// MSR: write the masked byte lanes of a status register from a register
/// or a rotated 8-bit immediate.
pub(super) fn decode_msr(
    psr: PsrKind,
    immediate: bool,
    opcode: u32,
    info: &mut InstructionDescriptor,
) {
    info.mnemonic = Mnemonic::Msr;
    info.sets_flags = true;

    info.operands[0] = Operand::Psr {
        psr,
        field_mask: opcode.get_bits(16..=19),
    };
    info.format.mark_register(0);
    info.format.mark_affected(0);

    if immediate {
        let rotate = opcode.get_bits(8..=11) * 2;
        let operand = rotate_right(opcode.get_bits(0..=7), rotate);
        info.operands[1] = Operand::Immediate(operand as i32);
        info.format.mark_immediate(1);
    } else {
        info.operands[1] = Operand::register(opcode.get_bits(0..=3));
        info.format.mark_register(1);
    }
}
