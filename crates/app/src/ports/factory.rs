//! Factory port — creates devices of one concrete kind.

use std::sync::Arc;

use super::Device;

/// Creator for a single device variant.
///
/// The associated [`Device`](Self::Device) type pins each factory to its
/// variant at compile time. Every call returns a new, fully-formed device
/// behind an [`Arc`] so remotes and commands can share it.
pub trait DeviceFactory {
    type Device: Device + 'static;

    /// Build a new device. Construction cannot fail.
    fn create_device(&self) -> Arc<Self::Device>;
}
