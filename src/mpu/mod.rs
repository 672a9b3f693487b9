// SPDX-License-Identifier: Unlicense

//! Memory-protection configuration engine.
//!
//! Commits a static table of regions and memory attributes to the hardware
//! region slots, discovering the slot count at runtime. Callers supply
//! pre-encoded base/limit words; the engine only places them, it never
//! decodes them.

pub mod port;

use log::{debug, info, trace};

use crate::{Error, Result};
use port::MpuPort;

/// Byte lanes in the packed attribute register.
pub const ATTRIBUTE_LANES: usize = 8;

/// Protection enable bit in the control word (SCTLR.M).
const CONTROL_ENABLE: u64 = 1 << 0;

/// One pre-encoded region slot image.
#[derive(Copy, Clone, Debug)]
pub struct Region {
    /// Base word: base address plus shareability, access and execute-never.
    pub base: u64,
    /// Limit word: limit address, attribute index and the enable bit.
    pub limit: u64,
}

/// The tables committed by one configuration pass.
#[derive(Copy, Clone)]
pub struct MpuConfig<'a> {
    /// Attribute bytes by lane, at most [`ATTRIBUTE_LANES`] of them.
    pub attributes: &'a [u8],
    /// Region images by slot, at most the hardware slot count.
    pub regions: &'a [Region],
}

/// Progress of a configuration pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    /// Nothing committed by this engine.
    Unconfigured,
    /// Checking the tables against fixed and discovered limits.
    Validating,
    /// Protection disabled, tables being rewritten.
    Reprogramming,
    /// Configuration committed and protection enabled.
    Enabled,
}

/// The configuration engine, holding exclusive use of the register port.
pub struct Mpu<'p, P: MpuPort> {
    port: &'p mut P,
    state: State,
}

impl<'p, P: MpuPort> Mpu<'p, P> {
    /// Wrap the register port. No hardware access occurs until
    /// [`configure`](Mpu::configure).
    pub fn new(port: &'p mut P) -> Self {
        Self {
            port,
            state: State::Unconfigured,
        }
    }

    /// Progress of this engine.
    pub fn state(&self) -> State {
        self.state
    }

    /// Validate `config` and commit it to hardware.
    ///
    /// On [`Error::OutOfRange`] no register has been written and protection
    /// is exactly as found. Must run with interrupts masked: the sequence
    /// below is the whole of the ordering contract, and nothing that depends
    /// on a consistent region table may preempt it.
    pub fn configure(&mut self, config: &MpuConfig) -> Result<()> {
        self.state = State::Validating;
        let capacity = match self.validate(config) {
            Ok(capacity) => capacity,
            Err(e) => {
                self.state = State::Unconfigured;
                return Err(e);
            }
        };

        self.state = State::Reprogramming;
        trace!("reprogramming");

        // A slot pairs a base and a limit register; rewriting a live table
        // can transiently enforce a slot holding one old and one new word.
        let control = self.port.read_control();
        self.port.write_control(control & !CONTROL_ENABLE);

        // Attributes before regions: a limit-word write arms its slot, and
        // the attribute lane that slot references must already hold its
        // final value.
        self.program_attributes(config.attributes);
        self.program_regions(config.regions, capacity);
        self.port.barrier_data();

        let control = self.port.read_control();
        self.port.write_control(control | CONTROL_ENABLE);
        self.port.barrier_instruction();

        self.state = State::Enabled;
        info!(
            "protection enabled: {} of {} region slots, {} attributes",
            config.regions.len(),
            capacity,
            config.attributes.len()
        );
        Ok(())
    }

    /// Check the tables against the fixed lane count and the discovered slot
    /// count, in that order. The attribute check touches no hardware, so a
    /// statically malformed table reports without any observable access.
    fn validate(&mut self, config: &MpuConfig) -> Result<u32> {
        if config.attributes.len() > ATTRIBUTE_LANES {
            return Err(Error::OutOfRange);
        }
        let capacity = self.port.read_capability();
        if config.regions.len() > capacity as usize {
            return Err(Error::OutOfRange);
        }
        Ok(capacity)
    }

    /// Accumulate the attribute bytes into the packed table, one
    /// read-modify-write per lane in table order. Lanes beyond the table
    /// keep whatever the hardware holds.
    fn program_attributes(&mut self, attributes: &[u8]) {
        for (lane, attribute) in attributes.iter().enumerate() {
            let table = self.port.read_attribute_table();
            self.port
                .write_attribute_table(table | (u64::from(*attribute) << (8 * lane)));
            trace!("attribute lane {}: {:#04x}", lane, attribute);
        }
    }

    /// Place the configured regions in the lowest slots, then zero every
    /// remaining slot up to `capacity`. Slots arm on their limit-word write,
    /// lowest index first, in table order.
    fn program_regions(&mut self, regions: &[Region], capacity: u32) {
        for (slot, region) in regions.iter().enumerate() {
            self.port.select_region(slot as u32);
            self.port.write_region_base(region.base);
            self.port.write_region_limit(region.limit);
            debug!(
                "slot {}: base {:#010x} limit {:#010x}",
                slot, region.base, region.limit
            );
        }
        // Firmware that ran before us, or a permissive reset default, must
        // not leave a live slot behind.
        for slot in regions.len()..capacity as usize {
            self.port.select_region(slot as u32);
            self.port.write_region_base(0);
            self.port.write_region_limit(0);
        }
    }
}
