//! Software interrupt, breakpoint and illegal encodings.

use crate::bitwise::Bits;
use crate::instruction::InstructionDescriptor;
use crate::mnemonic::Mnemonic;
use crate::operand::Operand;

/// SWI is a defined instruction, not a trap at this layer: the executor
/// enters the exception vector as part of normal interpretation. The
/// 24-bit comment field is ignored by hardware but preserved for tracing.
pub(super) fn decode_swi(opcode: u32, info: &mut InstructionDescriptor) {
    info.mnemonic = Mnemonic::Swi;
    info.operands[0] = Operand::Immediate(opcode.get_bits(0..=23) as i32);
    info.format.mark_immediate(0);
}

/// Not strictly ARMv4T, but kept reachable from the dispatch table as a
/// debugging convenience.
pub(super) fn decode_breakpoint(info: &mut InstructionDescriptor) {
    info.mnemonic = Mnemonic::Bkpt;
    info.traps = true;
}

pub(super) fn decode_illegal(opcode: u32, info: &mut InstructionDescriptor) {
    tracing::debug!("undefined instruction decode: opcode=0x{opcode:08X}");
    info.mnemonic = Mnemonic::Ill;
    info.traps = true;
}

#[cfg(test)]
mod tests {
    use crate::decode::decode;
    use crate::instruction::BranchKind;
    use crate::mnemonic::Mnemonic;
    use crate::operand::Operand;
    use pretty_assertions::assert_eq;

    #[test]
    fn swi_does_not_trap_and_keeps_its_comment() {
        // SWI 0x0B0000 (a BIOS call number)
        let info = decode(0b1110_1111_0000_1011_0000_0000_0000_0000);
        assert_eq!(info.mnemonic, Mnemonic::Swi);
        assert!(!info.traps);
        assert_eq!(info.operands[0], Operand::Immediate(0x0B_0000));
    }

    #[test]
    fn breakpoint_traps_with_no_operands() {
        // BKPT #0
        let info = decode(0b1110_0001_0010_0000_0000_0000_0111_0000);
        assert_eq!(info.mnemonic, Mnemonic::Bkpt);
        assert!(info.traps);
        assert!(info.format.is_empty());
    }

    #[test]
    fn reserved_coprocessor_encoding_traps_with_empty_format() {
        // CDP p15, ... : coprocessor decoding is out of scope, the whole
        // space resolves to a safe trapping descriptor.
        let info = decode(0b1110_1110_0001_0001_0000_1111_0001_0000);
        assert_eq!(info.mnemonic, Mnemonic::Ill);
        assert!(info.traps);
        assert!(info.format.is_empty());
        assert_eq!(info.branch_kind, BranchKind::None);
    }

    #[test]
    fn undefined_instruction_space_traps() {
        // Bits 27-25 = 011 with bit 4 set.
        let info = decode(0b1110_011_1_1_0_0_1_0001_0000_00000_011_1010);
        assert_eq!(info.mnemonic, Mnemonic::Ill);
        assert!(info.traps);
    }
}
