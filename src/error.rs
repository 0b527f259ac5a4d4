use std::error::Error;
use std::fmt;

use super::region::Region;

/// The one condition in this subsystem that is a programmer error rather
/// than a hardware quirk: every hardware-quirk path (invalid access,
/// illegal-width write, BIOS read outside BIOS, ROM past end) is total and
/// never reaches here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// Open-bus resolution was asked for a PC sitting in a region that
    /// cannot legally hold executing code (see the open-bus resolver).
    UnreachableOpenBusRegion { pc: u32, region: Region },
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusError::UnreachableOpenBusRegion { pc, region } => write!(
                f,
                "open-bus resolution reached with pc={:#010x} in unreachable region {:?}",
                pc, region
            ),
        }
    }
}

impl Error for BusError {}

pub type BusResult<T> = Result<T, BusError>;
