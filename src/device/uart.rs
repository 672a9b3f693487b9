// SPDX-License-Identifier: Unlicense

//! A stream sink which writes to the serial port.

use core::fmt;

use tock_registers::interfaces::{Readable, Writeable};
use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::util::locked::Locked;

register_bitfields! {
    u32,
    FR [
        TXFF OFFSET(5) NUMBITS(1) []
    ]
}

register_structs! {
    UartRegisters {
        (0x000 => dr: ReadWrite<u32>),
        (0x004 => _reserved0),
        (0x018 => fr: ReadOnly<u32, FR::Register>),
        (0x01c => @END),
    }
}

/// Represents a UART end-point.
pub struct Uart {
    base: *mut UartRegisters,
}

impl Uart {
    /// The identity-mapped debug UART0.
    pub const fn uart0() -> Uart {
        Uart {
            base: 0x0900_0000 as *mut UartRegisters,
        }
    }

    fn regs(&self) -> &UartRegisters {
        unsafe { &*self.base }
    }

    /// Write one byte to the Uart.
    fn put(&self, b: u8) {
        let regs = self.regs();
        while regs.fr.is_set(FR::TXFF) {}
        regs.dr.set(b as u32);
    }
}

unsafe impl Sync for Uart {}
unsafe impl Send for Uart {}

/// The debug UART.
pub static UART0: Locked<Uart> = Locked::new(Uart::uart0());

impl fmt::Write for Uart {
    /// Writes a slice of bytes to Uart, as stream for formatted output.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for b in s.as_bytes() {
            self.put(*b)
        }
        Ok(())
    }
}
