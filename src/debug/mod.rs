// SPDX-License-Identifier: Unlicense

//! Debug logging to serial, available from boot.

pub mod uart_logger;
