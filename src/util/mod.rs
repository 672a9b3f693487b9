// SPDX-License-Identifier: Unlicense

//! Shared plumbing.

pub mod locked;
pub mod result;
