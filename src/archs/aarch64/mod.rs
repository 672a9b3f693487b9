// SPDX-License-Identifier: Unlicense

//! aarch64-specific plumbing for the system-control core.

pub mod mpu;

use core::arch::asm;

/// Unique identifier for each core
#[inline(always)]
pub fn core_id() -> u8 {
    use cortex_a::registers::MPIDR_EL1;
    use tock_registers::interfaces::Readable;

    (MPIDR_EL1.get() & 0xff) as u8
}

/// Scoped IRQ/FIQ mask.
///
/// Held across memory-protection reprogramming: nothing that depends on a
/// consistent region table may run between disable and re-enable.
pub struct MaskedInterrupts {
    saved: u64,
}

impl MaskedInterrupts {
    /// Mask IRQ and FIQ, remembering the mask state found.
    pub fn acquire() -> Self {
        let saved: u64;
        unsafe {
            asm!("mrs {}, daif", out(reg) saved);
            // DAIF: FIQ bit 6, IRQ bit 7
            asm!("msr daif, {}", in(reg) saved | (0b11 << 6));
        }
        Self { saved }
    }
}

impl Drop for MaskedInterrupts {
    fn drop(&mut self) {
        unsafe {
            asm!("msr daif, {}", in(reg) self.saved);
        }
    }
}

/// Park the core.
pub fn loop_forever() -> ! {
    loop {
        unsafe { asm!("wfe") };
    }
}
