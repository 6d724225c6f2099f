//! In-process console that records announcements instead of printing them.

use std::sync::{Mutex, MutexGuard, PoisonError};

use remotehub_domain::announcement::{Announcement, Language};
use remotehub_domain::error::RemoteError;

use crate::ports::Console;

/// [`Console`] keeping every announcement in memory, in emission order.
///
/// Used by tests and by anything that wants to inspect what devices said
/// without touching stdout. Recording never fails.
#[derive(Debug, Default)]
pub struct RecordingConsole {
    language: Language,
    announcements: Mutex<Vec<Announcement>>,
}

impl RecordingConsole {
    /// Create an empty console rendering lines in `language`.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            language,
            announcements: Mutex::default(),
        }
    }

    /// Snapshot of everything announced so far.
    #[must_use]
    pub fn announcements(&self) -> Vec<Announcement> {
        self.lock().clone()
    }

    /// Rendered lines, one per announcement.
    #[must_use]
    pub fn lines(&self) -> Vec<&'static str> {
        self.lock()
            .iter()
            .map(|announcement| announcement.render(self.language))
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Announcement>> {
        self.announcements
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Console for RecordingConsole {
    fn announce(&self, announcement: Announcement) -> Result<(), RemoteError> {
        self.lock().push(announcement);
        Ok(())
    }
}
