//! The event color legend.

use anyhow::Result;
use owo_colors::OwoColorize;
use sprintcal_core::config::Preferences;

use crate::render;

pub fn run() -> Result<()> {
    let theme = Preferences::load()?.effective_theme();

    println!("{}", render::header("Event Color Legend", theme));
    for (kind, description) in render::legend_entries() {
        println!(
            "  {} {} {}",
            render::colorize_kind(kind, "●"),
            render::kind_label(kind),
            format!("({description})").dimmed()
        );
    }

    Ok(())
}
