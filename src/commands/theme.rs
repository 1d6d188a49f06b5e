//! Show or change the persisted color theme.

use anyhow::Result;
use owo_colors::OwoColorize;
use sprintcal_core::config::{Preferences, Theme};

pub fn run(action: Option<&str>) -> Result<()> {
    let mut prefs = Preferences::load()?;

    let theme = match action {
        None => {
            let theme = prefs.effective_theme();
            let source = if prefs.theme.is_some() { "" } else { " (default)" };
            println!("  {}{}", themed_label(theme), source.dimmed());
            return Ok(());
        }
        Some("toggle") => prefs.toggle_theme()?,
        Some(input) => {
            let theme = input.parse::<Theme>().map_err(|e| anyhow::anyhow!(e))?;
            prefs.set_theme(theme)?;
            theme
        }
    };

    println!("{}", format!("  Theme set to {}", themed_label(theme)).green());
    Ok(())
}

fn themed_label(theme: Theme) -> String {
    match theme {
        Theme::Light => format!("☀ {}", theme),
        Theme::Dark => format!("🌙 {}", theme),
    }
}
