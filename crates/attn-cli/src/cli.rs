//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Attendance calculator.
///
/// Works out attendance percentages and projections from working days,
/// holidays taken and the semester start date, skipping Sundays, national
/// holidays and vacations.
#[derive(Debug, Parser)]
#[command(name = "attn", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show current and projected attendance for the semester.
    Project(ProjectArgs),

    /// Estimate holidays used from an attendance percentage.
    Estimate(EstimateArgs),

    /// List the configured holiday calendar.
    Holidays {
        /// Only show holidays in this year.
        #[arg(long)]
        year: Option<i32>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Fields of the attendance form, taken as typed.
#[derive(Debug, Clone, Args)]
pub struct ProjectArgs {
    /// Total working days in the semester.
    #[arg(long)]
    pub total_working_days: String,

    /// Number of days missed so far.
    #[arg(long)]
    pub holidays_taken: String,

    /// Extra public holidays not in the holiday calendar.
    #[arg(long, default_value = "0")]
    pub extra_holidays: String,

    /// Semester start date (YYYY-MM-DD).
    #[arg(long)]
    pub semester_start: String,

    /// Vacation period as START..END (repeatable).
    #[arg(long = "vacation", value_name = "START..END")]
    pub vacations: Vec<String>,

    /// Target attendance percentage.
    #[arg(long)]
    pub target: Option<String>,

    /// Date to calculate as of (defaults to the local date).
    #[arg(long)]
    pub today: Option<String>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Fields of the holiday estimate form, taken as typed.
#[derive(Debug, Clone, Args)]
pub struct EstimateArgs {
    /// First day of the period (YYYY-MM-DD).
    #[arg(long)]
    pub start: String,

    /// Last day of the period (YYYY-MM-DD).
    #[arg(long)]
    pub end: String,

    /// Attendance percentage over the period.
    #[arg(long)]
    pub percentage: String,

    /// Vacation period as START..END (repeatable).
    #[arg(long = "vacation", value_name = "START..END")]
    pub vacations: Vec<String>,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn vacation_flag_repeats() {
        let cli = Cli::parse_from([
            "attn",
            "estimate",
            "--start",
            "2025-01-01",
            "--end",
            "2025-03-31",
            "--percentage",
            "80",
            "--vacation",
            "2025-02-10..2025-02-14",
            "--vacation",
            "2025-03-03..",
        ]);
        let Some(Commands::Estimate(args)) = cli.command else {
            panic!("expected estimate command");
        };
        assert_eq!(
            args.vacations,
            vec!["2025-02-10..2025-02-14".to_string(), "2025-03-03..".to_string()]
        );
    }

    #[test]
    fn extra_holidays_default_to_zero() {
        let cli = Cli::parse_from([
            "attn",
            "project",
            "--total-working-days",
            "90",
            "--holidays-taken",
            "3",
            "--semester-start",
            "2025-01-01",
        ]);
        let Some(Commands::Project(args)) = cli.command else {
            panic!("expected project command");
        };
        assert_eq!(args.extra_holidays, "0");
        assert!(args.target.is_none());
    }
}
