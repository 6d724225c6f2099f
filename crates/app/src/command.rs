//! Commands — a device and an action bound together, executed later.

use std::sync::Arc;

use remotehub_domain::device::PowerAction;
use remotehub_domain::error::RemoteError;
use remotehub_domain::id::DeviceId;

use crate::ports::Device;

/// An invocable request against one device.
pub trait DeviceCommand {
    /// The device this command drives.
    fn target(&self) -> DeviceId;

    /// The action this command performs.
    fn action(&self) -> PowerAction;

    /// Perform the bound action on the bound device.
    ///
    /// # Errors
    ///
    /// Propagates the device's error (console write failure).
    fn execute(&self) -> Result<(), RemoteError>;
}

/// Turns its device on.
pub struct TurnOnCommand<D: ?Sized> {
    device: Arc<D>,
}

impl<D: Device + ?Sized> TurnOnCommand<D> {
    /// Bind a turn-on request to `device`.
    #[must_use]
    pub fn new(device: Arc<D>) -> Self {
        Self { device }
    }
}

impl<D: Device + ?Sized> DeviceCommand for TurnOnCommand<D> {
    fn target(&self) -> DeviceId {
        self.device.id()
    }

    fn action(&self) -> PowerAction {
        PowerAction::On
    }

    fn execute(&self) -> Result<(), RemoteError> {
        self.device.apply(self.action())
    }
}

/// Turns its device off.
pub struct TurnOffCommand<D: ?Sized> {
    device: Arc<D>,
}

impl<D: Device + ?Sized> TurnOffCommand<D> {
    /// Bind a turn-off request to `device`.
    #[must_use]
    pub fn new(device: Arc<D>) -> Self {
        Self { device }
    }
}

impl<D: Device + ?Sized> DeviceCommand for TurnOffCommand<D> {
    fn target(&self) -> DeviceId {
        self.device.id()
    }

    fn action(&self) -> PowerAction {
        PowerAction::Off
    }

    fn execute(&self) -> Result<(), RemoteError> {
        self.device.apply(self.action())
    }
}
