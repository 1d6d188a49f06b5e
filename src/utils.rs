//! Small input-parsing helpers shared by the commands.

use anyhow::Result;
use chrono::NaiveDate;
use sprintcal_core::draft;

/// Parse a day from user input: ISO "YYYY-MM-DD" first, then natural
/// language ("tomorrow", "next friday") via fuzzydate.
pub fn parse_day(input: &str) -> Result<NaiveDate> {
    if let Ok(date) = draft::parse_date(input) {
        return Ok(date);
    }

    fuzzydate::parse(input)
        .map(|dt| dt.date())
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))
}
