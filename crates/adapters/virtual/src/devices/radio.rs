//! Virtual radio — announces `turn_on` / `turn_off`.

use std::sync::Arc;

use remotehub_app::ports::{Console, Device};
use remotehub_domain::announcement::Announcement;
use remotehub_domain::device::{DeviceKind, PowerAction};
use remotehub_domain::error::RemoteError;
use remotehub_domain::id::DeviceId;

/// A simulated radio.
pub struct Radio {
    id: DeviceId,
    console: Arc<dyn Console>,
}

impl Radio {
    /// A new radio announcing on `console`.
    #[must_use]
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self {
            id: DeviceId::new(),
            console,
        }
    }

    fn announce(&self, action: PowerAction) -> Result<(), RemoteError> {
        tracing::debug!(device_id = %self.id, %action, "radio");
        self.console
            .announce(Announcement::new(DeviceKind::Radio, action))
    }
}

impl Device for Radio {
    fn id(&self) -> DeviceId {
        self.id
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::Radio
    }

    fn turn_on(&self) -> Result<(), RemoteError> {
        self.announce(PowerAction::On)
    }

    fn turn_off(&self) -> Result<(), RemoteError> {
        self.announce(PowerAction::Off)
    }
}
