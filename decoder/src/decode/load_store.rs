//! Single-register transfers (addressing modes 2 and 3) and the atomic
//! swap family.

use super::{OffsetEncoding, Timing};
use crate::bitwise::Bits;
use crate::instruction::InstructionDescriptor;
use crate::memory::{AccessWidth, AddressingPolicy, Indexing, OffsetSource, Offsetting};
use crate::mnemonic::Mnemonic;
use crate::operand::{Operand, RegisterShift, ShiftAmount, ShiftKind};

pub(super) fn decode(
    op: Mnemonic,
    width: AccessWidth,
    offset: OffsetEncoding,
    timing: Timing,
    opcode: u32,
    info: &mut InstructionDescriptor,
) {
    info.mnemonic = op;

    info.operands[0] = Operand::register(opcode.get_bits(12..=15));
    info.format.mark_register(0);
    if op == Mnemonic::Ldr {
        info.format.mark_affected(0);
        // Load-use latency.
        info.internal_cycles += 1;
    }

    info.operands[1] = Operand::Memory;
    info.format.mark_memory(1);
    info.memory.base_register = opcode.get_bits(16..=19);
    info.memory.width = width;
    info.memory.offset = decode_offset(offset, opcode);
    info.memory.policy = AddressingPolicy::Single {
        indexing: timing.indexing,
        offsetting: timing.offsetting,
        writeback: timing.writeback,
    };
}

fn decode_offset(encoding: OffsetEncoding, opcode: u32) -> OffsetSource {
    match encoding {
        OffsetEncoding::Mode2Immediate => OffsetSource::Immediate(opcode.get_bits(0..=11)),
        OffsetEncoding::Mode2Shift(kind) => {
            let amount = opcode.get_bits(7..=11);
            let (kind, amount) = match (kind, amount) {
                (ShiftKind::Lsl, 0) => (ShiftKind::None, 0),
                // Unlike addressing mode 1, a zero immediate here encodes
                // a shift by 32.
                (ShiftKind::Lsr | ShiftKind::Asr, 0) => (kind, 32),
                (ShiftKind::Ror, 0) => (ShiftKind::Rrx, 0),
                _ => (kind, amount),
            };

            OffsetSource::Register {
                reg: opcode.get_bits(0..=3),
                shift: RegisterShift {
                    kind,
                    amount: ShiftAmount::Immediate(amount),
                },
            }
        }
        OffsetEncoding::Mode3Register => OffsetSource::Register {
            reg: opcode.get_bits(0..=3),
            shift: RegisterShift::default(),
        },
        OffsetEncoding::Mode3Immediate => {
            OffsetSource::Immediate((opcode.get_bits(8..=11) << 4) | opcode.get_bits(0..=3))
        }
    }
}

/// SWP/SWPB: `Rd, Rm, [Rn]`, always a zero-offset access with no
/// writeback.
pub(super) fn decode_swap(width: AccessWidth, opcode: u32, info: &mut InstructionDescriptor) {
    info.mnemonic = Mnemonic::Swp;

    info.operands[0] = Operand::register(opcode.get_bits(12..=15));
    info.format.mark_register(0);
    info.format.mark_affected(0);
    info.operands[1] = Operand::register(opcode.get_bits(0..=3));
    info.format.mark_register(1);
    info.operands[2] = Operand::Memory;
    info.format.mark_memory(2);

    info.memory.base_register = opcode.get_bits(16..=19);
    info.memory.width = width;
    info.memory.offset = OffsetSource::None;
    info.memory.policy = AddressingPolicy::Single {
        indexing: Indexing::Pre,
        offsetting: Offsetting::Up,
        writeback: false,
    };
}
