//! # remotehub-adapter-virtual
//!
//! Simulated devices and the factories that create them.
//!
//! ## Provided devices
//!
//! | Device | Factory | Announces |
//! |--------|---------|-----------|
//! | [`Television`] | [`TelevisionFactory`] | `Turning on the television` / `Turning off the television` |
//! | [`Radio`] | [`RadioFactory`] | `Turning on the radio` / `Turning off the radio` |
//!
//! ## Dependency rule
//!
//! Depends on `remotehub-app` (port traits) and `remotehub-domain` only.

mod devices;

use std::sync::Arc;

use remotehub_app::ports::{Console, DeviceFactory};

pub use devices::{Radio, Television};

/// Builds [`Television`]s announcing on a shared console.
#[derive(Clone)]
pub struct TelevisionFactory {
    console: Arc<dyn Console>,
}

impl TelevisionFactory {
    /// Factory whose televisions announce on `console`.
    #[must_use]
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

impl DeviceFactory for TelevisionFactory {
    type Device = Television;

    fn create_device(&self) -> Arc<Television> {
        Arc::new(Television::new(Arc::clone(&self.console)))
    }
}

/// Builds [`Radio`]s announcing on a shared console.
#[derive(Clone)]
pub struct RadioFactory {
    console: Arc<dyn Console>,
}

impl RadioFactory {
    /// Factory whose radios announce on `console`.
    #[must_use]
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

impl DeviceFactory for RadioFactory {
    type Device = Radio;

    fn create_device(&self) -> Arc<Radio> {
        Arc::new(Radio::new(Arc::clone(&self.console)))
    }
}
