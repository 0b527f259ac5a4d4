//! Flat-address-space constants for the GBA memory map.

pub const WORK_RAM_SIZE: usize = 256 * 1024;
pub const INTERNAL_RAM_SIZE: usize = 32 * 1024;
pub const PALETTE_RAM_SIZE: usize = 1024;
pub const VRAM_SIZE: usize = 96 * 1024;
pub const OAM_SIZE: usize = 1024;

pub const BIOS_ADDR: u32 = 0x0000_0000;
pub const EWRAM_ADDR: u32 = 0x0200_0000;
pub const IWRAM_ADDR: u32 = 0x0300_0000;
pub const IOMEM_ADDR: u32 = 0x0400_0000;
pub const PALRAM_ADDR: u32 = 0x0500_0000;
pub const VRAM_ADDR: u32 = 0x0600_0000;
pub const OAM_ADDR: u32 = 0x0700_0000;
pub const GAMEPAK_WS0_LO: u32 = 0x0800_0000;
pub const GAMEPAK_WS0_HI: u32 = 0x0900_0000;
pub const GAMEPAK_WS1_LO: u32 = 0x0A00_0000;
pub const GAMEPAK_WS1_HI: u32 = 0x0B00_0000;
pub const GAMEPAK_WS2_LO: u32 = 0x0C00_0000;
pub const GAMEPAK_WS2_HI: u32 = 0x0D00_0000;
pub const SRAM_LO: u32 = 0x0E00_0000;
pub const SRAM_HI: u32 = 0x0F00_0000;

pub const PAGE_BIOS: usize = (BIOS_ADDR >> 24) as usize;
pub const PAGE_EWRAM: usize = (EWRAM_ADDR >> 24) as usize;
pub const PAGE_IWRAM: usize = (IWRAM_ADDR >> 24) as usize;
pub const PAGE_IOMEM: usize = (IOMEM_ADDR >> 24) as usize;
pub const PAGE_PALRAM: usize = (PALRAM_ADDR >> 24) as usize;
pub const PAGE_VRAM: usize = (VRAM_ADDR >> 24) as usize;
pub const PAGE_OAM: usize = (OAM_ADDR >> 24) as usize;
pub const PAGE_GAMEPAK_WS0: usize = (GAMEPAK_WS0_LO >> 24) as usize;
pub const PAGE_GAMEPAK_WS1: usize = (GAMEPAK_WS1_LO >> 24) as usize;
pub const PAGE_GAMEPAK_WS2: usize = (GAMEPAK_WS2_LO >> 24) as usize;
pub const PAGE_SRAM_LO: usize = (SRAM_LO >> 24) as usize;
pub const PAGE_SRAM_HI: usize = (SRAM_HI >> 24) as usize;

/// Number of distinct top-nibble pages; only 10 of these are populated.
pub const NUM_PAGES: usize = 16;

/// BIOS is only readable while the program counter sits below this address.
pub const BIOS_END: u32 = 0x3FFF;

/// Cart ROM space reloads the gamepak bus whenever a 128 KiB boundary is
/// crossed; non-sequential timing is forced at these addresses.
pub const CART_STRIDE_BOUNDARY: u32 = 0x1FFFF;

pub const EWRAM_MASK: u32 = 0x3_FFFF;
pub const IWRAM_MASK: u32 = 0x7FFF;
pub const PALRAM_MASK: u32 = 0x3FF;
pub const OAM_MASK: u32 = 0x3FF;

/// Display-mode-dependent boundary within VRAM past which 8-bit writes are
/// always dropped: tile modes (0-2) only permit them below the 64 KiB
/// char-base area, bitmap modes (3+) extend that to the 80 KiB frame area.
pub const VRAM_TILE_MODE_BOUNDARY: u32 = 0x1_0000;
pub const VRAM_BITMAP_MODE_BOUNDARY: u32 = 0x1_4000;

/// Cart-ROM-space register offsets (low 25 bits) that belong to the
/// cartridge GPIO port rather than ROM data.
pub const GPIO_PORT_DATA: u32 = 0xC4;
pub const GPIO_PORT_DIRECTION: u32 = 0xC6;
pub const GPIO_PORT_CONTROL: u32 = 0xC8;
pub const GPIO_WINDOW_MASK: u32 = 0x01FF_FFFF;
