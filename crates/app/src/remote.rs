//! Remotes — caller-facing device controls.
//!
//! [`CommandRemote`] decouples invocation from execution through a swappable
//! command slot. [`BridgeRemote`] decouples the remote abstraction from the
//! device implementation by forwarding straight to a fixed device.

pub mod bridge_remote;
pub mod command_remote;

pub use bridge_remote::BridgeRemote;
pub use command_remote::CommandRemote;
