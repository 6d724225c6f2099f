//! # remotehub — device remote showcase
//!
//! Composition root that wires the virtual devices to the console and runs
//! the showcase.
//!
//! ## Responsibilities
//! - Load configuration (`remotehub.toml`, env overrides)
//! - Initialise logging (stderr, so stdout carries only announcements)
//! - Construct the console adapter and the device factories
//! - Run the showcase sequence
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use remotehub_adapter_console::WriterConsole;
use remotehub_adapter_virtual::{RadioFactory, TelevisionFactory};
use remotehub_app::ports::Console;
use remotehub_app::showcase;

use crate::config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(config.logging.env_filter()?)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(language = %config.console.language, "remotehub starting");

    // Console
    let console: Arc<dyn Console> = Arc::new(WriterConsole::stdout(config.console.language));

    // Factories
    let tv_factory = TelevisionFactory::new(Arc::clone(&console));
    let radio_factory = RadioFactory::new(console);

    showcase::run(&tv_factory, &radio_factory)?;

    tracing::info!("remotehub finished");
    Ok(())
}
