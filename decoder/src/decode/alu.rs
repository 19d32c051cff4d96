//! Data-processing family: the sixteen ALU operations and their
//! addressing-mode-1 second operand.

use super::AluOperand;
use crate::bitwise::{Bits, rotate_right};
use crate::instruction::{BranchKind, InstructionDescriptor, PC};
use crate::mnemonic::{AluShape, Mnemonic};
use crate::operand::{Operand, RegisterShift, ShiftAmount, ShiftKind};

pub(super) fn decode(
    op: Mnemonic,
    sets_flags: bool,
    operand: AluOperand,
    opcode: u32,
    info: &mut InstructionDescriptor,
) {
    info.mnemonic = op;
    info.sets_flags = sets_flags;

    let rd = opcode.get_bits(12..=15);
    let rn = opcode.get_bits(16..=19);

    // The three operand shapes build their slots through distinct paths:
    // the move form has no first source register, the compare form has no
    // destination. The second operand lands in the first free slot.
    match op.alu_shape() {
        AluShape::Full => {
            info.operands[0] = Operand::register(rd);
            info.format.mark_register(0);
            info.format.mark_affected(0);
            info.operands[1] = Operand::register(rn);
            info.format.mark_register(1);
            place_second_operand(operand, opcode, 2, info);
        }
        AluShape::Move => {
            info.operands[0] = Operand::register(rd);
            info.format.mark_register(0);
            info.format.mark_affected(0);
            place_second_operand(operand, opcode, 1, info);
        }
        AluShape::Compare => {
            info.operands[0] = Operand::register(rn);
            info.format.mark_register(0);
            place_second_operand(operand, opcode, 1, info);
        }
    }

    // Writing r15 turns the instruction into an indirect branch. Compare
    // forms have no destination, so they never redirect control flow.
    if op.alu_shape() != AluShape::Compare && rd == PC {
        info.branch_kind = BranchKind::Indirect;
    }
}

/// Resolves the addressing-mode-1 second operand into `slot`.
fn place_second_operand(
    operand: AluOperand,
    opcode: u32,
    slot: usize,
    info: &mut InstructionDescriptor,
) {
    match operand {
        AluOperand::Immediate => {
            let rotate = opcode.get_bits(8..=11) * 2;
            let immediate = rotate_right(opcode.get_bits(0..=7), rotate);
            info.operands[slot] = Operand::Immediate(immediate as i32);
            info.format.mark_immediate(slot);
        }
        AluOperand::Shift(kind) => {
            let reg = opcode.get_bits(0..=3);
            info.format.mark_register(slot);

            let shift = if opcode.get_bit(4) {
                // Register-sourced amount stalls the pipeline for a cycle.
                info.internal_cycles += 1;
                info.format.mark_shift_register(slot);
                RegisterShift {
                    kind,
                    amount: ShiftAmount::Register(opcode.get_bits(8..=11)),
                }
            } else {
                let amount = opcode.get_bits(7..=11);
                info.format.mark_shift_immediate(slot);
                let kind = match (kind, amount) {
                    // LSL #0 is a plain register operand; decoding it as a
                    // shift would wrongly touch the carry-out.
                    (ShiftKind::Lsl, 0) => {
                        info.format.clear_shift_immediate(slot);
                        ShiftKind::None
                    }
                    // There is no zero-amount rotate: the encoding means
                    // rotate-right-extended through the carry.
                    (ShiftKind::Ror, 0) => ShiftKind::Rrx,
                    _ => kind,
                };
                RegisterShift {
                    kind,
                    amount: ShiftAmount::Immediate(amount),
                }
            };

            info.operands[slot] = Operand::Register { reg, shift };
        }
    }
}
