pub mod add;
pub mod agenda;
pub mod delete;
pub mod edit;
pub mod events;
pub mod legend;
pub mod sprints;
pub mod theme;
pub mod watch;
