// SPDX-License-Identifier: Unlicense

//! Memory-mapped devices.

pub mod uart;
