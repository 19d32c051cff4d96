//! Branch family: B, BL and BX.

use crate::bitwise::Bits;
use crate::instruction::{BranchKind, InstructionDescriptor};
use crate::mnemonic::Mnemonic;
use crate::operand::Operand;

/// B/BL: 24-bit signed word offset, scaled to bytes. The executor adds it
/// to the address of the *next* instruction plus 4 (the pipeline fetch
/// offset); this layer only supplies the raw displacement.
pub(super) fn decode(link: bool, opcode: u32, info: &mut InstructionDescriptor) {
    if link {
        info.mnemonic = Mnemonic::Bl;
        info.branch_kind = BranchKind::DirectLinked;
    } else {
        info.mnemonic = Mnemonic::B;
        info.branch_kind = BranchKind::Direct;
    }

    // Shift up to drop the condition/class bits, then arithmetic-shift
    // back down: sign extension and the x4 scaling in one move.
    let offset = ((opcode << 8) as i32) >> 6;
    info.operands[0] = Operand::Immediate(offset);
    info.format.mark_immediate(0);
}

/// BX: the interworking return-via-register is the same encoding, no
/// special case needed here; the executor handles the mode switch.
pub(super) fn decode_exchange(opcode: u32, info: &mut InstructionDescriptor) {
    info.mnemonic = Mnemonic::Bx;
    info.branch_kind = BranchKind::Indirect;

    info.operands[0] = Operand::register(opcode.get_bits(0..=3));
    info.format.mark_register(0);
}

#[cfg(test)]
mod tests {
    use crate::decode::decode;
    use crate::instruction::BranchKind;
    use crate::mnemonic::Mnemonic;
    use crate::operand::Operand;
    use pretty_assertions::assert_eq;

    #[test]
    fn branch_offset_is_sign_extended_and_scaled() {
        // BL with offset field 0x000001: one word forward.
        let info = decode(0b1110_1011_0000_0000_0000_0000_0000_0001);
        assert_eq!(info.mnemonic, Mnemonic::Bl);
        assert_eq!(info.branch_kind, BranchKind::DirectLinked);
        assert_eq!(info.operands[0], Operand::Immediate(4));
    }

    #[test]
    fn negative_branch_offset() {
        // B with offset field 0xFFFFFE: two words back.
        let info = decode(0b1110_1010_1111_1111_1111_1111_1111_1110);
        assert_eq!(info.mnemonic, Mnemonic::B);
        assert_eq!(info.branch_kind, BranchKind::Direct);
        assert_eq!(info.operands[0], Operand::Immediate(-8));
    }

    #[test]
    fn branch_exchange() {
        // BX r14
        let info = decode(0b1110_0001_0010_1111_1111_1111_0001_1110);
        assert_eq!(info.mnemonic, Mnemonic::Bx);
        assert_eq!(info.branch_kind, BranchKind::Indirect);
        assert_eq!(info.operands[0], Operand::register(14));
        assert!(!info.traps);
    }
}
