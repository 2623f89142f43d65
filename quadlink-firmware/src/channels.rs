//! Inter-task communication
//!
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use quadlink_core::control::LoopStatus;

/// Latest control loop status, published on phase changes and faults
pub static LINK_STATUS: Signal<CriticalSectionRawMutex, LoopStatus> = Signal::new();
