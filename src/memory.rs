//! Width-composed read/write primitives over raw byte buffers.
//!
//! Mirrors `core/src/bus.rs`'s `Bus` trait shape (wide accesses default to
//! byte composition, a width-native override is free to replace that
//! default) and the little-endian slice helpers the project's original
//! `src/sysbus.rs` built on top of `byteorder`.

use byteorder::{ByteOrder, LittleEndian};

pub type Addr = u32;

pub trait Bus {
    #[inline]
    fn read_32(&mut self, addr: Addr) -> u32 {
        self.read_16(addr) as u32 | (self.read_16(addr + 2) as u32) << 16
    }

    #[inline]
    fn read_16(&mut self, addr: Addr) -> u16 {
        self.read_8(addr) as u16 | (self.read_8(addr + 1) as u16) << 8
    }

    fn read_8(&mut self, addr: Addr) -> u8;

    #[inline]
    fn write_32(&mut self, addr: Addr, value: u32) {
        self.write_16(addr, (value & 0xffff) as u16);
        self.write_16(addr + 2, (value >> 16) as u16);
    }

    #[inline]
    fn write_16(&mut self, addr: Addr, value: u16) {
        self.write_8(addr, (value & 0xff) as u8);
        self.write_8(addr + 1, ((value >> 8) & 0xff) as u8);
    }

    fn write_8(&mut self, addr: Addr, value: u8);
}

/// The caller is assumed to have already masked `addr` into range (region
/// mirroring happens before this is called); this impl trusts that and
/// skips bounds checks on the hot path.
impl Bus for Box<[u8]> {
    #[inline]
    fn read_32(&mut self, addr: Addr) -> u32 {
        LittleEndian::read_u32(&self[addr as usize..])
    }

    #[inline]
    fn read_16(&mut self, addr: Addr) -> u16 {
        LittleEndian::read_u16(&self[addr as usize..])
    }

    #[inline]
    fn read_8(&mut self, addr: Addr) -> u8 {
        unsafe { *self.get_unchecked(addr as usize) }
    }

    #[inline]
    fn write_32(&mut self, addr: Addr, value: u32) {
        LittleEndian::write_u32(&mut self[addr as usize..], value);
    }

    #[inline]
    fn write_16(&mut self, addr: Addr, value: u16) {
        LittleEndian::write_u16(&mut self[addr as usize..], value);
    }

    #[inline]
    fn write_8(&mut self, addr: Addr, value: u8) {
        unsafe {
            *self.get_unchecked_mut(addr as usize) = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_round_trips_little_endian() {
        let mut buf: Box<[u8]> = vec![0u8; 16].into_boxed_slice();
        buf.write_32(4, 0xAABBCCDD);
        assert_eq!(buf.read_8(4), 0xDD);
        assert_eq!(buf.read_8(5), 0xCC);
        assert_eq!(buf.read_32(4), 0xAABBCCDD);
    }

    #[test]
    fn halfword_composes_from_bytes() {
        let mut buf: Box<[u8]> = vec![0u8; 16].into_boxed_slice();
        buf.write_8(0, 0x11);
        buf.write_8(1, 0x22);
        assert_eq!(buf.read_16(0), 0x2211);
    }
}
