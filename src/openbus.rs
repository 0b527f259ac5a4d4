//! Open-bus resolution: what a read of an unmapped or unreadable address
//! sees, derived only from CPU telemetry and DMA state.
//!
//! Grounded on `core/src/sysbus.rs`'s `SysBus::read_invalid`, which builds
//! the same region-keyed match over `cpu.get_reg(15)` and the two
//! most-recently-prefetched opcode words.

use super::collab::CpuView;
use super::error::{BusError, BusResult};
use super::region::Region;

/// `addr` is the original (possibly misaligned) address being read; the
/// returned value is already shifted so the caller only has to narrow it
/// to the access width.
pub fn resolve(addr: u32, cpu: &CpuView, was_dma: bool, dma_bus: u32) -> BusResult<u32> {
    let value = if was_dma {
        dma_bus
    } else if !cpu.thumb_mode {
        cpu.prefetch[1]
    } else {
        resolve_thumb(cpu)?
    };
    Ok(value >> (8 * (addr & 3)))
}

fn resolve_thumb(cpu: &CpuView) -> BusResult<u32> {
    use Region::*;
    let region = Region::decode(cpu.pc);
    let aligned = cpu.pc & 2 == 0;
    let value = match region {
        Ewram | Palette | Vram | CartRom(_) => cpu.prefetch[1] | (cpu.prefetch[1] << 16),
        Bios | Oam => {
            if aligned {
                cpu.prefetch[1] | (cpu.prefetch[1] << 16)
            } else {
                cpu.prefetch[0] | (cpu.prefetch[1] << 16)
            }
        }
        // IWRAM's alignment sense is inverted relative to every other
        // region: the high half comes from the older prefetch slot when
        // the PC is word-aligned, and from the newer slot otherwise.
        Iwram => {
            if aligned {
                cpu.prefetch[1] | (cpu.prefetch[0] << 16)
            } else {
                cpu.prefetch[0] | (cpu.prefetch[1] << 16)
            }
        }
        other => {
            error!(
                "open-bus resolution reached with pc={:#010x} in unreachable region {:?}",
                cpu.pc, other
            );
            return Err(BusError::UnreachableOpenBusRegion { pc: cpu.pc, region: other });
        }
    };
    Ok(value)
}
