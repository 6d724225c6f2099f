//! Console port — the sink devices announce their actions to.

use remotehub_domain::announcement::Announcement;
use remotehub_domain::error::RemoteError;

/// Output channel for device announcements.
///
/// Each call emits exactly one line. Implementations decide how the
/// announcement is rendered (language, destination).
pub trait Console: Send + Sync {
    /// Emit one announcement.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Output`] if the line could not be written.
    fn announce(&self, announcement: Announcement) -> Result<(), RemoteError>;
}
