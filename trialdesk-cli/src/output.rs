//! Shared terminal output helpers

use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::*;
use serde::Serialize;

/// Print any DTO as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a "nothing found" notice
pub fn print_empty(what: &str) {
    println!("{}", format!("No {what} found.").yellow());
}

/// Print a success line
pub fn print_success(message: &str) {
    println!("{}", format!("✓ {message}").green().bold());
}

/// Print an optional labelled field, skipping it when absent
pub fn print_field(label: &str, value: Option<&str>) {
    if let Some(value) = value {
        println!("    {:<14}{}", format!("{label}:"), value);
    }
}

/// Print an optional timestamp field
pub fn print_timestamp(label: &str, value: Option<&DateTime<Utc>>) {
    if let Some(value) = value {
        println!(
            "    {:<14}{}",
            format!("{label}:"),
            value.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
        );
    }
}
