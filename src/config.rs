//! Runtime configuration for the bus. Narrow and explicit, the way
//! `core/src/overrides.rs`'s `GameOverride` is, rather than a global
//! mutable settings singleton.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusConfig {
    /// Whether the cartridge prefetch buffer is engaged at all. When
    /// false, cart-bus accesses always charge the plain timing-table
    /// cycles and never enter the prefetch FIFO.
    pub prefetch_enabled: bool,
}

impl Default for BusConfig {
    fn default() -> BusConfig {
        BusConfig {
            prefetch_enabled: true,
        }
    }
}
