//! # remotehub-adapter-console
//!
//! Text console for device announcements. Each announcement becomes one
//! line, rendered in the configured [`Language`] and flushed immediately.
//!
//! ## Dependency rule
//!
//! Depends on `remotehub-app` (port traits) and `remotehub-domain` only.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use remotehub_app::ports::Console;
use remotehub_domain::announcement::{Announcement, Language};
use remotehub_domain::error::RemoteError;

/// [`Console`] writing rendered lines to `W`.
pub struct WriterConsole<W> {
    language: Language,
    writer: Mutex<W>,
}

impl WriterConsole<io::Stdout> {
    /// Console printing to the process's standard output.
    #[must_use]
    pub fn stdout(language: Language) -> Self {
        Self::new(io::stdout(), language)
    }
}

impl<W: Write> WriterConsole<W> {
    /// Console writing lines rendered in `language` to `writer`.
    #[must_use]
    pub fn new(writer: W, language: Language) -> Self {
        Self {
            language,
            writer: Mutex::new(writer),
        }
    }

    /// The language lines are rendered in.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Console for WriterConsole<W> {
    fn announce(&self, announcement: Announcement) -> Result<(), RemoteError> {
        let line = announcement.render(self.language);
        let mut writer = self.lock();
        writeln!(writer, "{line}")?;
        writer.flush()?;
        tracing::trace!(kind = %announcement.kind, action = %announcement.action, "announced");
        Ok(())
    }
}
