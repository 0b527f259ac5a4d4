#[macro_use]
extern crate serde;

#[macro_use]
extern crate enum_primitive_derive;

#[macro_use]
extern crate bitfield;

#[macro_use]
extern crate log;

#[macro_use]
extern crate smart_default;

pub mod bus;
pub mod collab;
pub mod config;
pub mod consts;
pub mod error;
pub mod memory;
pub mod openbus;
pub mod prefetch;
pub mod region;
pub mod timing;
pub mod waitcnt;

pub use bus::MemoryBus;
pub use collab::{
    AccessKind, AccessWidth, BackupKind, BackupStorage, CpuView, EepromWindow, Gpio, IdleSink,
    IoRegisters, NoWatchpoints, VideoModeSource, Watchpoints,
};
pub use config::BusConfig;
pub use error::{BusError, BusResult};
pub use memory::{Addr, Bus};
pub use region::{CartBank, Region};
pub use waitcnt::WaitControl;
