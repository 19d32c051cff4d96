use serde::{Deserialize, Serialize};

/// Symbolic operation identifier, one variant per instruction family member.
///
/// Access width and addressing mode are deliberately *not* encoded here:
/// `LDRB` and `LDRH` both decode to [`Mnemonic::Ldr`] with the width carried
/// by the memory descriptor, which keeps the enumeration closed and small.
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub enum Mnemonic {
    // Data processing.
    And,
    Eor,
    Sub,
    Rsb,
    Add,
    Adc,
    Sbc,
    Rsc,
    Tst,
    Teq,
    Cmp,
    Cmn,
    Orr,
    Mov,
    Bic,
    Mvn,

    // Multiply.
    Mul,
    Mla,
    Umull,
    Umlal,
    Smull,
    Smlal,

    // Memory.
    Ldr,
    Str,
    Ldm,
    Stm,
    Swp,

    // Control flow.
    B,
    Bl,
    Bx,

    // Status register transfer.
    Mrs,
    Msr,

    // Exception generating.
    Swi,
    Bkpt,

    /// Undefined encoding. The executor must raise an undefined-instruction
    /// exception instead of interpreting the operands.
    #[default]
    Ill,
}

/// Operand shape of a data-processing instruction.
///
/// The three shapes build their descriptors through distinct paths: the
/// move and compare forms drop an unused register and re-slot the second
/// operand instead of leaving a hole in the operand list.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum AluShape {
    /// `<op> Rd, Rn, <operand2>` (AND, ADD, ...).
    Full,

    /// `<op> Rd, <operand2>` (MOV, MVN): no first source register.
    Move,

    /// `<op> Rn, <operand2>` (TST, TEQ, CMP, CMN): no destination, the
    /// result only reaches the flags.
    Compare,
}

impl Mnemonic {
    /// Maps the 4-bit ALU opcode field (bits 24-21) to its mnemonic.
    pub const fn from_alu_bits(bits: u32) -> Self {
        match bits & 0xF {
            0x0 => Self::And,
            0x1 => Self::Eor,
            0x2 => Self::Sub,
            0x3 => Self::Rsb,
            0x4 => Self::Add,
            0x5 => Self::Adc,
            0x6 => Self::Sbc,
            0x7 => Self::Rsc,
            0x8 => Self::Tst,
            0x9 => Self::Teq,
            0xA => Self::Cmp,
            0xB => Self::Cmn,
            0xC => Self::Orr,
            0xD => Self::Mov,
            0xE => Self::Bic,
            _ => Self::Mvn,
        }
    }

    /// Operand shape for data-processing mnemonics.
    pub const fn alu_shape(self) -> AluShape {
        match self {
            Self::Mov | Self::Mvn => AluShape::Move,
            Self::Tst | Self::Teq | Self::Cmp | Self::Cmn => AluShape::Compare,
            _ => AluShape::Full,
        }
    }

    /// True for TST, TEQ, CMP, CMN: the S bit is implicit in the encoding.
    pub const fn is_compare(self) -> bool {
        matches!(self, Self::Tst | Self::Teq | Self::Cmp | Self::Cmn)
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::And => "AND",
            Self::Eor => "EOR",
            Self::Sub => "SUB",
            Self::Rsb => "RSB",
            Self::Add => "ADD",
            Self::Adc => "ADC",
            Self::Sbc => "SBC",
            Self::Rsc => "RSC",
            Self::Tst => "TST",
            Self::Teq => "TEQ",
            Self::Cmp => "CMP",
            Self::Cmn => "CMN",
            Self::Orr => "ORR",
            Self::Mov => "MOV",
            Self::Bic => "BIC",
            Self::Mvn => "MVN",
            Self::Mul => "MUL",
            Self::Mla => "MLA",
            Self::Umull => "UMULL",
            Self::Umlal => "UMLAL",
            Self::Smull => "SMULL",
            Self::Smlal => "SMLAL",
            Self::Ldr => "LDR",
            Self::Str => "STR",
            Self::Ldm => "LDM",
            Self::Stm => "STM",
            Self::Swp => "SWP",
            Self::B => "B",
            Self::Bl => "BL",
            Self::Bx => "BX",
            Self::Mrs => "MRS",
            Self::Msr => "MSR",
            Self::Swi => "SWI",
            Self::Bkpt => "BKPT",
            Self::Ill => "ILL",
        };

        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn alu_bits_cover_all_sixteen_ops() {
        assert_eq!(Mnemonic::from_alu_bits(0x0), Mnemonic::And);
        assert_eq!(Mnemonic::from_alu_bits(0x4), Mnemonic::Add);
        assert_eq!(Mnemonic::from_alu_bits(0xA), Mnemonic::Cmp);
        assert_eq!(Mnemonic::from_alu_bits(0xF), Mnemonic::Mvn);
    }

    #[test]
    fn shapes() {
        assert_eq!(Mnemonic::Add.alu_shape(), AluShape::Full);
        assert_eq!(Mnemonic::Mov.alu_shape(), AluShape::Move);
        assert_eq!(Mnemonic::Teq.alu_shape(), AluShape::Compare);
    }
}
