//! Bridge remote — forwards straight to the device it was built with.

use std::sync::Arc;

use remotehub_domain::error::RemoteError;

use crate::ports::Device;

/// Remote permanently attached to one device.
pub struct BridgeRemote<D: ?Sized> {
    device: Arc<D>,
}

impl<D: Device + ?Sized> BridgeRemote<D> {
    /// Attach a remote to `device` for its whole lifetime.
    #[must_use]
    pub fn new(device: Arc<D>) -> Self {
        Self { device }
    }

    /// # Errors
    ///
    /// Propagates the device's error (console write failure).
    pub fn turn_on(&self) -> Result<(), RemoteError> {
        self.device.turn_on()
    }

    /// # Errors
    ///
    /// Propagates the device's error (console write failure).
    pub fn turn_off(&self) -> Result<(), RemoteError> {
        self.device.turn_off()
    }
}
