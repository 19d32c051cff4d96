//! Block transfer family (LDM/STM), sixteen variants per direction,
//! writeback and PSR-swap combination.

use crate::bitwise::Bits;
use crate::instruction::{BranchKind, InstructionDescriptor, PC};
use crate::memory::{AddressingPolicy, BlockDirection};
use crate::mnemonic::Mnemonic;
use crate::operand::Operand;

pub(super) fn decode(
    op: Mnemonic,
    direction: BlockDirection,
    writeback: bool,
    psr_transfer: bool,
    opcode: u32,
    info: &mut InstructionDescriptor,
) {
    info.mnemonic = op;

    let register_list = opcode.get_bits(0..=15) as u16;
    // A block load that pulls r15 out of memory redirects control flow;
    // storing r15 does not.
    if op == Mnemonic::Ldm && opcode.get_bit(PC as u8) {
        info.branch_kind = BranchKind::Indirect;
    }

    info.operands[0] = Operand::Memory;
    info.format.mark_memory(0);
    info.memory.base_register = opcode.get_bits(16..=19);
    info.memory.policy = AddressingPolicy::Block {
        direction,
        writeback,
        psr_transfer,
        register_list,
    };
}

#[cfg(test)]
mod tests {
    use crate::decode::decode;
    use crate::instruction::BranchKind;
    use crate::memory::{AddressingPolicy, BlockDirection};
    use crate::mnemonic::Mnemonic;
    use crate::operand::Operand;
    use pretty_assertions::assert_eq;

    #[test]
    fn stmdb_with_writeback() {
        // STMDB r13!, {r0, r4-r7, r14} (the common prologue push)
        let info = decode(0b1110_100_1_0_0_1_0_1101_0100_0000_1111_0001);
        assert_eq!(info.mnemonic, Mnemonic::Stm);
        assert_eq!(info.operands[0], Operand::Memory);
        assert!(info.format.is_memory(0));
        assert_eq!(info.memory.base_register, 13);
        assert_eq!(
            info.memory.policy,
            AddressingPolicy::Block {
                direction: BlockDirection::DecrementBefore,
                writeback: true,
                psr_transfer: false,
                register_list: 0b0100_0000_1111_0001,
            }
        );
        assert_eq!(info.branch_kind, BranchKind::None);
    }

    #[test]
    fn ldm_with_pc_in_the_list_is_an_indirect_branch() {
        // LDMIA r13!, {r0, r15}
        let info = decode(0b1110_100_0_1_0_1_1_1101_1000_0000_0000_0001);
        assert_eq!(info.mnemonic, Mnemonic::Ldm);
        assert_eq!(info.branch_kind, BranchKind::Indirect);
    }

    #[test]
    fn stm_with_pc_in_the_list_is_not_a_branch() {
        // STMIA r0, {r15}
        let info = decode(0b1110_100_0_1_0_0_0_0000_1000_0000_0000_0000);
        assert_eq!(info.branch_kind, BranchKind::None);
    }

    #[test]
    fn psr_transfer_variant_is_its_own_instruction() {
        // LDMDA r2, {r0-r3}^
        let info = decode(0b1110_100_0_0_1_0_1_0010_0000_0000_0000_1111);
        assert_eq!(
            info.memory.policy,
            AddressingPolicy::Block {
                direction: BlockDirection::DecrementAfter,
                writeback: false,
                psr_transfer: true,
                register_list: 0b1111,
            }
        );
    }
}
