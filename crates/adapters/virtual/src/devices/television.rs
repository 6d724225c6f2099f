//! Virtual television — announces `turn_on` / `turn_off`.

use std::sync::Arc;

use remotehub_app::ports::{Console, Device};
use remotehub_domain::announcement::Announcement;
use remotehub_domain::device::{DeviceKind, PowerAction};
use remotehub_domain::error::RemoteError;
use remotehub_domain::id::DeviceId;

/// A simulated television. Stateless apart from its identity.
pub struct Television {
    id: DeviceId,
    console: Arc<dyn Console>,
}

impl Television {
    /// A new television announcing on `console`.
    #[must_use]
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self {
            id: DeviceId::new(),
            console,
        }
    }

    fn announce(&self, action: PowerAction) -> Result<(), RemoteError> {
        tracing::debug!(device_id = %self.id, %action, "television");
        self.console
            .announce(Announcement::new(DeviceKind::Television, action))
    }
}

impl Device for Television {
    fn id(&self) -> DeviceId {
        self.id
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::Television
    }

    fn turn_on(&self) -> Result<(), RemoteError> {
        self.announce(PowerAction::On)
    }

    fn turn_off(&self) -> Result<(), RemoteError> {
        self.announce(PowerAction::Off)
    }
}
