mod commands;
mod notify;
mod render;
mod seed;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sprintcal")]
#[command(about = "Team sprint calendar: agenda, events, and reminders in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the sidebar: events for a day plus the next five upcoming
    Agenda {
        /// Day to show (YYYY-MM-DD or natural language, e.g. "tomorrow")
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List events, optionally scoped to one sprint
    Events {
        /// Sprint tag to filter by, or "all"
        #[arg(short, long)]
        sprint: Option<String>,

        /// Emit the list as JSON for other tools
        #[arg(long)]
        json: bool,
    },
    /// Show sprint tags with their event counts
    Sprints,
    /// Add an event (prompts for anything not given as a flag)
    Add {
        /// Event title
        #[arg(short, long)]
        title: Option<String>,

        /// Day of the event (YYYY-MM-DD or natural language)
        #[arg(short, long)]
        date: Option<String>,

        /// Start time of day (HH:MM)
        #[arg(long)]
        start: Option<String>,

        /// End time of day (HH:MM)
        #[arg(long)]
        end: Option<String>,

        /// Event type: meeting, planning, review, deadline, standup
        #[arg(short, long)]
        kind: Option<String>,

        /// Status: pending, in-progress, completed
        #[arg(long)]
        status: Option<String>,

        /// Sprint tag (defaults to "Sprint 1")
        #[arg(long)]
        sprint: Option<String>,

        /// Location (meeting room, video call link, ...)
        #[arg(short, long)]
        location: Option<String>,

        /// Comma-separated attendees
        #[arg(short, long)]
        attendees: Option<String>,
    },
    /// Edit an event in place by id
    Edit {
        /// Id of the event to edit
        id: i64,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        date: Option<String>,

        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        end: Option<String>,

        #[arg(short, long)]
        kind: Option<String>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        sprint: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        #[arg(short, long)]
        attendees: Option<String>,
    },
    /// Delete an event by id
    Delete {
        /// Id of the event to delete
        id: i64,
    },
    /// Show the event color legend
    Legend,
    /// Show or change the color theme (light, dark, toggle)
    Theme {
        /// "light", "dark", or "toggle"; omit to show the current theme
        action: Option<String>,
    },
    /// Watch for events starting in fifteen minutes until interrupted
    Watch {
        /// Evaluation cadence (e.g. "60s", "1m"); defaults to one minute
        #[arg(long)]
        every: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Agenda { date } => commands::agenda::run(date.as_deref()),
        Commands::Events { sprint, json } => commands::events::run(sprint.as_deref(), json),
        Commands::Sprints => commands::sprints::run(),
        Commands::Add {
            title,
            date,
            start,
            end,
            kind,
            status,
            sprint,
            location,
            attendees,
        } => commands::add::run(commands::add::AddArgs {
            title,
            date,
            start,
            end,
            kind,
            status,
            sprint,
            location,
            attendees,
        }),
        Commands::Edit {
            id,
            title,
            date,
            start,
            end,
            kind,
            status,
            sprint,
            location,
            attendees,
        } => commands::edit::run(
            id.into(),
            commands::edit::EditArgs {
                title,
                date,
                start,
                end,
                kind,
                status,
                sprint,
                location,
                attendees,
            },
        ),
        Commands::Delete { id } => commands::delete::run(id.into()),
        Commands::Legend => commands::legend::run(),
        Commands::Theme { action } => commands::theme::run(action.as_deref()),
        Commands::Watch { every } => commands::watch::run(every.as_deref()).await,
    }
}
