//! Command remote — runs whichever command is currently assigned.

use remotehub_domain::error::RemoteError;

use crate::command::DeviceCommand;

/// Remote holding at most one command at a time.
#[derive(Default)]
pub struct CommandRemote {
    command: Option<Box<dyn DeviceCommand>>,
}

impl CommandRemote {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `command`, replacing any previous one.
    pub fn set_command<C: DeviceCommand + 'static>(&mut self, command: C) {
        tracing::trace!(
            device_id = %command.target(),
            action = %command.action(),
            "command assigned"
        );
        self.command = Some(Box::new(command));
    }

    /// Empty the command slot.
    pub fn clear_command(&mut self) {
        self.command = None;
    }

    /// Whether a command is currently assigned.
    #[must_use]
    pub fn has_command(&self) -> bool {
        self.command.is_some()
    }

    /// Execute the assigned command.
    ///
    /// With an empty slot this is a silent no-op returning `Ok(false)`.
    /// Returns `Ok(true)` once the assigned command has run.
    ///
    /// # Errors
    ///
    /// Propagates the command's error (console write failure).
    pub fn execute_command(&self) -> Result<bool, RemoteError> {
        let Some(command) = &self.command else {
            tracing::debug!("no command assigned, nothing to execute");
            return Ok(false);
        };

        tracing::debug!(
            device_id = %command.target(),
            action = %command.action(),
            "executing command"
        );
        command.execute()?;
        Ok(true)
    }
}
