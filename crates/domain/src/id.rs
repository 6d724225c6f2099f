//! Typed identifier newtypes backed by UUIDs.

use std::fmt;

/// Identity of a single device instance.
///
/// Two devices of the same kind created by the same factory still carry
/// distinct identifiers, which is what lets logs tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceId(uuid::Uuid);

impl Default for DeviceId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl DeviceId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
