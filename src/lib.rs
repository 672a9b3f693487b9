// SPDX-License-Identifier: Unlicense

//! Firmware library for an Arm system-control processor.
//!
//! Hosts the memory-protection configuration engine: boot commits the
//! platform's compiled-in region and attribute tables to the MPU before
//! anything else runs on the core.

#![no_std]
#![warn(missing_docs)]

#[cfg(test)]
extern crate std;

mod archs;
pub mod debug;
pub mod device;
pub mod mpu;
pub mod platform;
pub mod util;

pub use util::result::{Error, Result};

#[cfg(all(not(test), target_arch = "aarch64"))]
use archs::aarch64 as arch;

/// Boot entry: bring up logging, commit memory protection, park the core.
///
/// An [`Error::OutOfRange`] here means the tables were built for different
/// hardware than is present; that is fatal for this build, never a reduced
/// configuration.
#[cfg(all(not(test), target_arch = "aarch64"))]
pub fn boot() -> ! {
    use log::info;

    debug::uart_logger::init().expect("uart_logger");
    info!("core {} starting", arch::core_id());

    {
        let _masked = arch::MaskedInterrupts::acquire();
        let mut port = arch::mpu::MpuRegisters::new();
        mpu::Mpu::new(&mut port)
            .configure(&platform::mpu_config())
            .expect("memory protection configuration");
    }

    info!("done, looping");
    arch::loop_forever()
}
