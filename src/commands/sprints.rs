//! The sprint tag bar: every sprint with its event count.

use anyhow::Result;
use owo_colors::OwoColorize;
use sprintcal_core::config::Preferences;

use crate::render;
use crate::seed;

pub fn run() -> Result<()> {
    let theme = Preferences::load()?.effective_theme();
    let store = seed::sample_store();

    println!("{}", render::header("Sprints", theme));
    println!("  {} {}", "all".bold(), format!("({})", store.len()).dimmed());

    for (tag, count) in store.sprint_counts() {
        println!("  {} {}", tag.bold(), format!("({count})").dimmed());
    }

    Ok(())
}
