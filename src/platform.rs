// SPDX-License-Identifier: Unlicense

//! Compiled-in memory-protection tables for this platform.
//!
//! Encoding policy lives here, not in the engine: region words are the
//! PRBAR/PRLAR images the hardware expects. Base word is base address |
//! SH[5:4] | AP[2:1] | XN[0]; limit word is limit address | AttrIndx[3:1] |
//! EN[0].

use crate::mpu::{MpuConfig, Region};

/// Device-nGnRnE memory type.
pub const ATTR_DEVICE_NGNRNE: u8 = 0x00;

/// Normal write-back non-transient, read/write-allocate memory type.
pub const ATTR_NORMAL_WRITE_BACK: u8 = 0xff;

/// Attribute table: lane 0 device, lane 1 normal.
static ATTRIBUTES: [u8; 2] = [ATTR_DEVICE_NGNRNE, ATTR_NORMAL_WRITE_BACK];

/// Region table, in slot order.
static REGIONS: [Region; 2] = [
    // RAM 0x0000_0000..=0x7fff_ffff: normal memory (lane 1), enabled.
    Region {
        base: 0x0000_0000,
        limit: 0x7fff_ffc3,
    },
    // Peripherals 0x8000_0000..=0xffff_ffff: device memory (lane 0),
    // execute-never, enabled.
    Region {
        base: 0x8000_0001,
        limit: 0xffff_ffc1,
    },
];

/// The tables the boot path commits.
pub fn mpu_config() -> MpuConfig<'static> {
    MpuConfig {
        attributes: &ATTRIBUTES,
        regions: &REGIONS,
    }
}

#[cfg(test)]
mod tests {
    use claim::assert_ok;

    use super::*;
    use crate::archs::test::mpu::MockMpu;
    use crate::mpu::Mpu;

    #[test]
    fn platform_tables_commit() {
        let mut port = MockMpu::new(16);

        assert_ok!(Mpu::new(&mut port).configure(&mpu_config()));

        assert_eq!(port.attributes, 0xff00);
        assert_eq!(port.regions[0], (0x0000_0000, 0x7fff_ffc3));
        assert_eq!(port.regions[1], (0x8000_0001, 0xffff_ffc1));
        assert_eq!(port.regions[2], (0, 0));
        assert_ne!(port.control & 1, 0);
    }
}
