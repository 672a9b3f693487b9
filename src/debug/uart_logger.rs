// SPDX-License-Identifier: Unlicense

//! Routes the `log` facade to the debug UART.

use crate::device::uart;
use crate::util::locked::Locked;

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

use core::fmt::Write;

impl log::Log for Locked<uart::Uart> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        use Level::*;
        let levels = [("mpu", Debug), ("platform", Info)];
        let level = levels.iter().fold(Trace, |base, (suffix, level)| {
            if metadata.target().ends_with(suffix) {
                *level
            } else {
                base
            }
        });
        metadata.level() <= level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut locked = self.lock();
            writeln!(
                locked,
                "{:5} [{:>30}] {}",
                record.level(),
                record.target(),
                record.args()
            )
            .unwrap_or(());
        }
    }

    fn flush(&self) {}
}

/// Install the UART logger behind the `log` facade.
pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&uart::UART0).map(|()| log::set_max_level(LevelFilter::Trace))
}
