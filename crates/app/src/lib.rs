//! # remotehub-app
//!
//! Application layer — **port definitions** (traits) and the patterns built on them.
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `Device` — something that can be turned on and off
//!   - `DeviceFactory` — creates one concrete kind of device
//!   - `Console` — where devices announce what they did
//! - Define **commands** binding a device to an action (`TurnOnCommand`, `TurnOffCommand`)
//! - Define **remotes**: `CommandRemote` (swappable command slot) and
//!   `BridgeRemote` (direct forwarding to a fixed device)
//! - Provide the **showcase** driver that exercises all of the above
//! - Provide **in-process infrastructure** (`RecordingConsole`) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `remotehub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod command;
pub mod ports;
pub mod recording_console;
pub mod remote;
pub mod showcase;

#[cfg(test)]
mod testing;
