//! Dispatch table construction.
//!
//! The original instruction set is a cross product of mnemonic family,
//! addressing-mode variant, S bit and writeback/direction combination.
//! Rather than hand-writing thousands of near-identical routines, the
//! table is built by classifying every 12-bit index into a
//! [`DecodeEntry`] carrying the variant parameters.

use super::{AluOperand, DecodeEntry, OffsetEncoding, TABLE_SIZE, Timing};
use crate::bitwise::Bits;
use crate::memory::{AccessWidth, BlockDirection};
use crate::mnemonic::Mnemonic;
use crate::operand::{PsrKind, ShiftKind};

pub(super) fn build() -> Box<[DecodeEntry; TABLE_SIZE]> {
    let mut table = Box::new([DecodeEntry::Illegal; TABLE_SIZE]);
    for (index, entry) in table.iter_mut().enumerate() {
        *entry = classify(index);
    }

    table
}

/// Classifies one dispatch index into its instruction variant.
///
/// `hi` is opcode bits 27-20, `lo` is opcode bits 7-4. Anything without a
/// defined ARMv4T meaning (plus BKPT) classifies as illegal, never a gap.
fn classify(index: usize) -> DecodeEntry {
    let hi = (index >> 4) as u32 & 0xFF;
    let lo = index as u32 & 0xF;

    match hi >> 5 {
        0b000 => classify_register_form(hi, lo),
        0b001 => classify_immediate_form(hi),
        0b010 => single_transfer(hi, OffsetEncoding::Mode2Immediate),
        0b011 if lo.get_bit(0) => DecodeEntry::Illegal,
        0b011 => single_transfer(
            hi,
            OffsetEncoding::Mode2Shift(ShiftKind::from_type_bits(lo >> 1)),
        ),
        0b100 => block_transfer(hi),
        0b101 => DecodeEntry::Branch {
            link: hi.get_bit(4),
        },
        // Coprocessor space (LDC/STC below, CDP/MCR/MRC at 0xE0-0xEF):
        // everything resolves to a defined trapping routine in this scope.
        0b110 => DecodeEntry::Illegal,
        _ if hi >= 0xF0 => DecodeEntry::SoftwareInterrupt,
        _ => DecodeEntry::Illegal,
    }
}

/// Bits 27-25 = 000: register-operand data processing, plus everything the
/// architecture tucks into the same class via the low-nibble discriminator
/// (multiplies, swaps, halfword transfers) and the S=0 compare slots that
/// host MRS/MSR/BX/BKPT.
fn classify_register_form(hi: u32, lo: u32) -> DecodeEntry {
    if lo == 0x9 {
        return multiply_or_swap(hi);
    }
    if lo & 0b1001 == 0b1001 {
        return halfword_transfer(hi, lo);
    }

    if matches!(hi, 0x10 | 0x12 | 0x14 | 0x16) {
        // A compare without the S bit computes nothing observable, so the
        // architecture reuses these encodings.
        return match (hi, lo) {
            (0x10, 0x0) => DecodeEntry::StatusToRegister { psr: PsrKind::Cpsr },
            (0x14, 0x0) => DecodeEntry::StatusToRegister { psr: PsrKind::Spsr },
            (0x12, 0x0) => DecodeEntry::RegisterToStatus {
                psr: PsrKind::Cpsr,
                immediate: false,
            },
            (0x16, 0x0) => DecodeEntry::RegisterToStatus {
                psr: PsrKind::Spsr,
                immediate: false,
            },
            (0x12, 0x1) => DecodeEntry::BranchExchange,
            (0x12, 0x7) => DecodeEntry::Breakpoint,
            _ => DecodeEntry::Illegal,
        };
    }

    DecodeEntry::Alu {
        op: Mnemonic::from_alu_bits(hi >> 1),
        sets_flags: hi.get_bit(0),
        operand: AluOperand::Shift(ShiftKind::from_type_bits(lo >> 1)),
    }
}

/// Bits 27-25 = 001: immediate-operand data processing, with the S=0
/// compare slots reused for the immediate MSR forms.
fn classify_immediate_form(hi: u32) -> DecodeEntry {
    let op = Mnemonic::from_alu_bits(hi >> 1);
    let sets_flags = hi.get_bit(0);

    if op.is_compare() && !sets_flags {
        return match hi {
            0x32 => DecodeEntry::RegisterToStatus {
                psr: PsrKind::Cpsr,
                immediate: true,
            },
            0x36 => DecodeEntry::RegisterToStatus {
                psr: PsrKind::Spsr,
                immediate: true,
            },
            _ => DecodeEntry::Illegal,
        };
    }

    DecodeEntry::Alu {
        op,
        sets_flags,
        operand: AluOperand::Immediate,
    }
}

fn multiply_or_swap(hi: u32) -> DecodeEntry {
    let sets_flags = hi.get_bit(0);
    match hi {
        0x00 | 0x01 => DecodeEntry::Multiply {
            op: Mnemonic::Mul,
            sets_flags,
        },
        0x02 | 0x03 => DecodeEntry::Multiply {
            op: Mnemonic::Mla,
            sets_flags,
        },
        0x08..=0x0F => DecodeEntry::MultiplyLong {
            op: match (hi >> 1) & 0b11 {
                0b00 => Mnemonic::Umull,
                0b01 => Mnemonic::Umlal,
                0b10 => Mnemonic::Smull,
                _ => Mnemonic::Smlal,
            },
            sets_flags,
        },
        0x10 => DecodeEntry::Swap {
            width: AccessWidth::Word,
        },
        0x14 => DecodeEntry::Swap {
            width: AccessWidth::Byte,
        },
        _ => DecodeEntry::Illegal,
    }
}

/// Addressing mode 3: halfword and signed transfers. `hi` carries the
/// P/U/I/W/L bits, `lo` (0xB, 0xD or 0xF) selects the width.
fn halfword_transfer(hi: u32, lo: u32) -> DecodeEntry {
    let load = hi.get_bit(0);
    let width = match (lo, load) {
        (0xB, _) => AccessWidth::Halfword,
        (0xD, true) => AccessWidth::SignedByte,
        (0xF, true) => AccessWidth::SignedHalfword,
        // Signed stores don't exist on ARMv4.
        _ => return DecodeEntry::Illegal,
    };

    let pre = hi.get_bit(4);
    let writeback = hi.get_bit(1);
    if !pre && writeback {
        // Mode 3 has no translated forms.
        return DecodeEntry::Illegal;
    }

    DecodeEntry::LoadStore {
        op: if load { Mnemonic::Ldr } else { Mnemonic::Str },
        width,
        offset: if hi.get_bit(2) {
            OffsetEncoding::Mode3Immediate
        } else {
            OffsetEncoding::Mode3Register
        },
        timing: timing_from_puw(pre, hi.get_bit(3), writeback),
    }
}

/// Addressing mode 2: word and byte transfers. The post-indexed encodings
/// with the W bit set are the translated (forced user-mode) LDRT/STRT
/// family.
fn single_transfer(hi: u32, offset: OffsetEncoding) -> DecodeEntry {
    let load = hi.get_bit(0);
    let byte = hi.get_bit(2);
    let pre = hi.get_bit(4);
    let writeback = hi.get_bit(1);
    let translated = !pre && writeback;

    let width = match (byte, translated) {
        (false, false) => AccessWidth::Word,
        (true, false) => AccessWidth::Byte,
        (false, true) => AccessWidth::TranslatedWord,
        (true, true) => AccessWidth::TranslatedByte,
    };

    DecodeEntry::LoadStore {
        op: if load { Mnemonic::Ldr } else { Mnemonic::Str },
        width,
        offset,
        timing: timing_from_puw(pre, hi.get_bit(3), writeback),
    }
}

fn timing_from_puw(pre: bool, up: bool, writeback: bool) -> Timing {
    Timing {
        indexing: pre.into(),
        offsetting: up.into(),
        // Post-indexed addressing always writes the new base back.
        writeback: if pre { writeback } else { true },
    }
}

fn block_transfer(hi: u32) -> DecodeEntry {
    let load = hi.get_bit(0);
    let direction = match (hi.get_bit(3), hi.get_bit(4)) {
        (true, false) => BlockDirection::IncrementAfter,
        (true, true) => BlockDirection::IncrementBefore,
        (false, false) => BlockDirection::DecrementAfter,
        (false, true) => BlockDirection::DecrementBefore,
    };

    DecodeEntry::Block {
        op: if load { Mnemonic::Ldm } else { Mnemonic::Stm },
        direction,
        writeback: hi.get_bit(1),
        psr_transfer: hi.get_bit(2),
    }
}
