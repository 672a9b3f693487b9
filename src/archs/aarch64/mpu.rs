// SPDX-License-Identifier: Unlicense

//! The physical ARMv8-R MPU register file at EL1.
//!
//! The protected-region registers (PRSELR, PRBAR, PRLAR, MPUIR) have no
//! named mnemonics, so they are addressed by their system-register
//! encodings.

use core::arch::asm;

use cortex_a::asm::barrier;

use crate::mpu::port::MpuPort;

/// The live register file.
///
/// The engine owns these registers for the duration of a configuration pass:
/// single core, interrupts masked.
pub struct MpuRegisters(());

impl MpuRegisters {
    /// Claim the register file.
    pub const fn new() -> Self {
        Self(())
    }
}

impl MpuPort for MpuRegisters {
    fn read_capability(&mut self) -> u32 {
        let mpuir: u64;
        unsafe {
            // MPUIR_EL1, REGION field
            asm!("mrs {}, S3_0_C0_C0_4", out(reg) mpuir);
        }
        (mpuir & 0xff) as u32
    }

    fn read_control(&mut self) -> u64 {
        let sctlr: u64;
        unsafe {
            asm!("mrs {}, sctlr_el1", out(reg) sctlr);
        }
        sctlr
    }

    fn write_control(&mut self, value: u64) {
        unsafe {
            asm!("msr sctlr_el1, {}", in(reg) value);
        }
    }

    fn select_region(&mut self, index: u32) {
        unsafe {
            // PRSELR_EL1
            asm!("msr S3_0_C6_C2_1, {}", in(reg) index as u64);
        }
    }

    fn write_region_base(&mut self, value: u64) {
        unsafe {
            // PRBAR_EL1 of the slot selected in PRSELR_EL1
            asm!("msr S3_0_C6_C8_0, {}", in(reg) value);
        }
    }

    fn write_region_limit(&mut self, value: u64) {
        unsafe {
            // PRLAR_EL1 of the slot selected in PRSELR_EL1
            asm!("msr S3_0_C6_C8_1, {}", in(reg) value);
        }
    }

    fn read_attribute_table(&mut self) -> u64 {
        let mair: u64;
        unsafe {
            asm!("mrs {}, mair_el1", out(reg) mair);
        }
        mair
    }

    fn write_attribute_table(&mut self, value: u64) {
        unsafe {
            asm!("msr mair_el1, {}", in(reg) value);
        }
    }

    fn barrier_data(&mut self) {
        unsafe { barrier::dsb(barrier::SY) };
    }

    fn barrier_instruction(&mut self) {
        unsafe { barrier::isb(barrier::SY) };
    }
}
