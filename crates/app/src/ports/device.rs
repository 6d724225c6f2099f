//! Device port — something a remote can turn on and off.

use remotehub_domain::device::{DeviceKind, PowerAction};
use remotehub_domain::error::RemoteError;
use remotehub_domain::id::DeviceId;

/// An on/off-capable device.
///
/// Implementations live in adapter crates (e.g. `adapter_virtual`). Each
/// operation performs exactly one side effect: announcing itself on the
/// console the device was created with.
pub trait Device: Send + Sync {
    /// Identity of this instance.
    fn id(&self) -> DeviceId;

    /// Which concrete variant this device is.
    fn kind(&self) -> DeviceKind;

    /// Turn the device on.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Output`] if the announcement could not be written.
    fn turn_on(&self) -> Result<(), RemoteError>;

    /// Turn the device off.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Output`] if the announcement could not be written.
    fn turn_off(&self) -> Result<(), RemoteError>;

    /// Dispatch `action` to [`turn_on`](Self::turn_on) or [`turn_off`](Self::turn_off).
    ///
    /// # Errors
    ///
    /// Propagates the error of the dispatched operation.
    fn apply(&self, action: PowerAction) -> Result<(), RemoteError> {
        match action {
            PowerAction::On => self.turn_on(),
            PowerAction::Off => self.turn_off(),
        }
    }
}
