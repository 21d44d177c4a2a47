//! Shared utilities for CLI commands.

use anyhow::Context;
use attn_core::form::parse_date;
use chrono::{Local, NaiveDate};

/// Splits a `START..END` vacation argument into its raw endpoints.
///
/// Either side may be blank (`2025-05-01..`), which leaves the vacation
/// incomplete and therefore inert.
pub fn split_vacation(raw: &str) -> anyhow::Result<(&str, &str)> {
    raw.split_once("..").with_context(|| {
        format!("Invalid vacation: {raw}. Use START..END (e.g., 2025-05-01..2025-05-10)")
    })
}

/// Splits every vacation argument.
pub fn split_vacations(raw: &[String]) -> anyhow::Result<Vec<(&str, &str)>> {
    raw.iter().map(|v| split_vacation(v)).collect()
}

/// Resolves the date to calculate as of: the given date, or the local date.
pub fn resolve_today(raw: Option<&str>) -> anyhow::Result<NaiveDate> {
    raw.map_or_else(
        || Ok(Local::now().date_naive()),
        |raw| parse_date("today", raw).context("failed to parse --today"),
    )
}

/// Formats a percentage with two decimals, or `n/a`.
pub fn format_percentage(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}%"))
}
