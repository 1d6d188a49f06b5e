//! Run the reminder watcher until interrupted.
//!
//! The watcher evaluates the session's events once per minute and sends a
//! desktop notification for anything starting in fifteen minutes. Ctrl-C
//! cancels the token, which tears the interval down before we exit.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use sprintcal_core::reminder::{ReminderWatcher, DEFAULT_TICK};
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::notify::DesktopNotifier;
use crate::seed;

pub async fn run(every: Option<&str>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let tick = match every {
        Some(input) => humantime::parse_duration(input)
            .with_context(|| format!("Could not parse interval: \"{}\"", input))?,
        None => DEFAULT_TICK,
    };

    let store = seed::sample_store();
    info!(events = store.len(), tick_secs = tick.as_secs(), "reminder watcher starting");
    println!("  Watching {} events. Press Ctrl-C to stop.", store.len());

    let watcher =
        ReminderWatcher::new(store.events().to_vec(), DesktopNotifier).with_tick(tick);

    let cancel = CancellationToken::new();
    let handle = tokio::spawn(watcher.run(cancel.clone()));

    tokio::signal::ctrl_c().await.context("Failed to listen for Ctrl-C")?;
    cancel.cancel();
    handle.await.context("Watcher task failed")?;

    println!("{}", "  Watcher stopped".dimmed());
    Ok(())
}
