//! Test doubles shared by the unit tests of this crate.

use std::sync::Arc;

use remotehub_domain::announcement::Announcement;
use remotehub_domain::device::{DeviceKind, PowerAction};
use remotehub_domain::error::RemoteError;
use remotehub_domain::id::DeviceId;

use crate::ports::{Console, Device, DeviceFactory};

/// Device announcing itself as `kind` on an arbitrary console.
pub(crate) struct FakeDevice {
    id: DeviceId,
    kind: DeviceKind,
    console: Arc<dyn Console>,
}

impl FakeDevice {
    pub(crate) fn new(kind: DeviceKind, console: Arc<dyn Console>) -> Arc<Self> {
        Arc::new(Self {
            id: DeviceId::new(),
            kind,
            console,
        })
    }
}

impl Device for FakeDevice {
    fn id(&self) -> DeviceId {
        self.id
    }

    fn kind(&self) -> DeviceKind {
        self.kind
    }

    fn turn_on(&self) -> Result<(), RemoteError> {
        self.console
            .announce(Announcement::new(self.kind, PowerAction::On))
    }

    fn turn_off(&self) -> Result<(), RemoteError> {
        self.console
            .announce(Announcement::new(self.kind, PowerAction::Off))
    }
}

pub(crate) struct FakeFactory {
    pub(crate) kind: DeviceKind,
    pub(crate) console: Arc<dyn Console>,
}

impl DeviceFactory for FakeFactory {
    type Device = FakeDevice;

    fn create_device(&self) -> Arc<FakeDevice> {
        FakeDevice::new(self.kind, Arc::clone(&self.console))
    }
}

/// Console whose output stream is always closed.
pub(crate) struct BrokenConsole;

impl Console for BrokenConsole {
    fn announce(&self, _announcement: Announcement) -> Result<(), RemoteError> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed").into())
    }
}
