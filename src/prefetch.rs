//! The cartridge prefetch buffer: a stepwise state machine, not a coroutine.
//! `access` and `step` are its only two transitions, and each is a pure
//! function of the current snapshot plus its scalar input.
//!
//! Written in the project's idiom: plain derives, `#[inline]` on the hot
//! path, `log::trace!` for diagnosing prefetch behavior the way
//! `core/src/sysbus.rs` logs invalid accesses.

use super::collab::IdleSink;

const THUMB_INSN_LEN: u32 = 2;
const THUMB_CAPACITY: u32 = 8;
const ARM_INSN_LEN: u32 = 4;
const ARM_CAPACITY: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefetchBuffer {
    insn_len: u32,
    capacity: u32,
    reload: u32,
    countdown: u32,
    size: u32,
    head: u32,
    tail: u32,
    /// Armed only after the buffer has been engaged (re-armed) at least
    /// once since reset; before that, `reload`/`insn_len` aren't valid yet.
    armed: bool,
}

impl Default for PrefetchBuffer {
    fn default() -> PrefetchBuffer {
        PrefetchBuffer {
            insn_len: THUMB_INSN_LEN,
            capacity: THUMB_CAPACITY,
            reload: 0,
            countdown: 0,
            size: 0,
            head: 0,
            tail: 0,
            armed: false,
        }
    }
}

impl PrefetchBuffer {
    pub fn new() -> PrefetchBuffer {
        PrefetchBuffer::default()
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    #[inline]
    pub fn head(&self) -> u32 {
        self.head
    }

    #[inline]
    pub fn tail(&self) -> u32 {
        self.tail
    }

    /// Called by the access engine when the cart bus is active and
    /// prefetch is permitted. Returns nothing: all effects are either the
    /// mutated buffer state or `idle.advance(..)` calls.
    pub fn access(
        &mut self,
        addr: u32,
        intended_cycles: u32,
        thumb_mode: bool,
        reload_cycles: u32,
        idle: &mut dyn IdleSink,
        gamepak_bus_in_use: &mut bool,
    ) {
        if self.armed && self.tail == addr {
            self.hit(idle, gamepak_bus_in_use);
        } else {
            self.miss(addr, intended_cycles, thumb_mode, reload_cycles, idle);
        }
    }

    fn hit(&mut self, idle: &mut dyn IdleSink, gamepak_bus_in_use: &mut bool) {
        if self.size == 0 {
            // the front-most slot is still in flight: release the bus and
            // wait out the remainder of its fetch, then consume it the
            // instant it lands. `head` advances in lockstep with `tail` so
            // the FIFO stays empty (size stays 0) rather than going
            // negative, and `countdown` resets so the next slot's fetch
            // starts fresh the next time `step` runs.
            trace!("prefetch hit on in-flight slot, countdown={}", self.countdown);
            *gamepak_bus_in_use = false;
            idle.advance(self.countdown);
            self.tail += self.insn_len;
            self.head += self.insn_len;
            self.countdown = self.reload;
        } else {
            trace!("prefetch hit, size={} -> {}", self.size, self.size - 1);
            self.tail += self.insn_len;
            self.size -= 1;
            *gamepak_bus_in_use = false;
            idle.advance(1);
        }
    }

    fn miss(
        &mut self,
        addr: u32,
        intended_cycles: u32,
        thumb_mode: bool,
        reload_cycles: u32,
        idle: &mut dyn IdleSink,
    ) {
        trace!("prefetch miss at {:#010x}, penalty={}", addr, intended_cycles);
        idle.advance(intended_cycles);

        let (insn_len, capacity) = if thumb_mode {
            (THUMB_INSN_LEN, THUMB_CAPACITY)
        } else {
            (ARM_INSN_LEN, ARM_CAPACITY)
        };

        self.insn_len = insn_len;
        self.capacity = capacity;
        self.reload = reload_cycles;
        self.countdown = reload_cycles;
        self.tail = addr + insn_len;
        self.head = self.tail;
        self.size = 0;
        self.armed = true;
    }

    /// Called by the scheduler whenever the cart bus is not being used by
    /// the CPU, with the number of cycles that elapsed in the meantime.
    pub fn step(&mut self, mut cycles: u32) {
        if !self.armed {
            return;
        }
        while self.size < self.capacity && cycles >= self.countdown {
            cycles -= self.countdown;
            self.head += self.insn_len;
            self.countdown = self.reload;
            self.size += 1;
        }
        if self.size < self.capacity {
            self.countdown -= cycles;
        }
        // if the buffer is full, any remaining cycles are discarded: the
        // cart bus simply idles until the CPU consumes a slot.
        debug_assert_eq!(self.head - self.tail, self.size * self.insn_len);
    }
}
