//! Showcase — the fixed demonstration sequence.
//!
//! Builds one device from each factory, drives both through a
//! [`BridgeRemote`], then drives both again through a [`CommandRemote`].
//! With a television factory and a radio factory the console receives
//! eight lines, in this order:
//!
//! 1. television on, television off, radio on, radio off (bridge)
//! 2. television on, television off, radio on, radio off (command)

use std::sync::Arc;

use remotehub_domain::error::RemoteError;

use crate::command::{TurnOffCommand, TurnOnCommand};
use crate::ports::{Device, DeviceFactory};
use crate::remote::{BridgeRemote, CommandRemote};

/// Run the showcase against the given factories.
///
/// # Errors
///
/// Stops at the first device operation that fails and returns its error.
#[tracing::instrument(skip_all)]
pub fn run<TF, RF>(tv_factory: &TF, radio_factory: &RF) -> Result<(), RemoteError>
where
    TF: DeviceFactory,
    RF: DeviceFactory,
{
    let tv = tv_factory.create_device();
    let radio = radio_factory.create_device();
    tracing::info!(
        tv_id = %tv.id(),
        tv_kind = %tv.kind(),
        radio_id = %radio.id(),
        radio_kind = %radio.kind(),
        "devices created"
    );

    tracing::info!("driving devices through bridge remotes");
    let tv_remote = BridgeRemote::new(Arc::clone(&tv));
    let radio_remote = BridgeRemote::new(Arc::clone(&radio));
    tv_remote.turn_on()?;
    tv_remote.turn_off()?;
    radio_remote.turn_on()?;
    radio_remote.turn_off()?;

    tracing::info!("driving devices through the command remote");
    let mut remote = CommandRemote::new();
    remote.set_command(TurnOnCommand::new(Arc::clone(&tv)));
    remote.execute_command()?;
    remote.set_command(TurnOffCommand::new(tv));
    remote.execute_command()?;
    remote.set_command(TurnOnCommand::new(Arc::clone(&radio)));
    remote.execute_command()?;
    remote.set_command(TurnOffCommand::new(radio));
    remote.execute_command()?;

    Ok(())
}
