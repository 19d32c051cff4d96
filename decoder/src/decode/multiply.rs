//! Multiply and long-multiply families. Fixed register positions, no
//! addressing-mode variation.

use crate::bitwise::Bits;
use crate::instruction::{BranchKind, InstructionDescriptor, PC};
use crate::mnemonic::Mnemonic;
use crate::operand::Operand;

/// MUL (`Rd, Rm, Rs`) and MLA (`Rd, Rm, Rs, Rn`).
pub(super) fn decode(
    op: Mnemonic,
    sets_flags: bool,
    opcode: u32,
    info: &mut InstructionDescriptor,
) {
    info.mnemonic = op;
    info.sets_flags = sets_flags;

    let rd = opcode.get_bits(16..=19);
    info.operands[0] = Operand::register(rd);
    info.format.mark_register(0);
    info.format.mark_affected(0);
    info.operands[1] = Operand::register(opcode.get_bits(0..=3));
    info.format.mark_register(1);
    info.operands[2] = Operand::register(opcode.get_bits(8..=11));
    info.format.mark_register(2);

    if op == Mnemonic::Mla {
        info.operands[3] = Operand::register(opcode.get_bits(12..=15));
        info.format.mark_register(3);
    }

    // Architecturally unpredictable, but the PC-destination policy stays
    // consistent with the data-processing family.
    if rd == PC {
        info.branch_kind = BranchKind::Indirect;
    }
}

/// UMULL/UMLAL/SMULL/SMLAL: `RdLo, RdHi, Rm, Rs`, both halves of the 64-bit
/// accumulator marked as outputs.
pub(super) fn decode_long(
    op: Mnemonic,
    sets_flags: bool,
    opcode: u32,
    info: &mut InstructionDescriptor,
) {
    info.mnemonic = op;
    info.sets_flags = sets_flags;

    let rd_lo = opcode.get_bits(12..=15);
    info.operands[0] = Operand::register(rd_lo);
    info.format.mark_register(0);
    info.format.mark_affected(0);
    info.operands[1] = Operand::register(opcode.get_bits(16..=19));
    info.format.mark_register(1);
    info.format.mark_affected(1);
    info.operands[2] = Operand::register(opcode.get_bits(0..=3));
    info.format.mark_register(2);
    info.operands[3] = Operand::register(opcode.get_bits(8..=11));
    info.format.mark_register(3);

    if rd_lo == PC {
        info.branch_kind = BranchKind::Indirect;
    }
}

#[cfg(test)]
mod tests {
    use crate::decode::decode;
    use crate::mnemonic::Mnemonic;
    use crate::operand::Operand;
    use pretty_assertions::assert_eq;

    #[test]
    fn mul_takes_three_registers() {
        // MUL r3, r1, r2
        let info = decode(0b1110_000_0000_0_0011_0000_0010_1001_0001);
        assert_eq!(info.mnemonic, Mnemonic::Mul);
        assert_eq!(info.operands[0], Operand::register(3));
        assert_eq!(info.operands[1], Operand::register(1));
        assert_eq!(info.operands[2], Operand::register(2));
        assert_eq!(info.operands[3], Operand::Unused);
        assert!(info.format.is_affected(0));
    }

    #[test]
    fn mla_adds_the_accumulator_register() {
        // MLAS r4, r1, r2, r3
        let info = decode(0b1110_000_0001_1_0100_0011_0010_1001_0001);
        assert_eq!(info.mnemonic, Mnemonic::Mla);
        assert!(info.sets_flags);
        assert_eq!(info.operands[3], Operand::register(3));
        assert!(info.format.is_register(3));
        assert!(!info.format.is_affected(3));
    }

    #[test]
    fn long_multiply_marks_both_destinations_affected() {
        // UMULL r2, r5, r0, r1
        let info = decode(0b1110_000_0100_0_0101_0010_0001_1001_0000);
        assert_eq!(info.mnemonic, Mnemonic::Umull);
        assert_eq!(info.operands[0], Operand::register(2));
        assert_eq!(info.operands[1], Operand::register(5));
        assert_eq!(info.operands[2], Operand::register(0));
        assert_eq!(info.operands[3], Operand::register(1));
        assert!(info.format.is_affected(0));
        assert!(info.format.is_affected(1));
    }

    #[test]
    fn smlal_variant() {
        // SMLALS r2, r5, r0, r1
        let info = decode(0b1110_000_0111_1_0101_0010_0001_1001_0000);
        assert_eq!(info.mnemonic, Mnemonic::Smlal);
        assert!(info.sets_flags);
    }
}
