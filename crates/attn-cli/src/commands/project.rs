//! Project command for current and projected attendance.

use std::io::Write;

use anyhow::{Context, Result};
use attn_core::AttendanceResult;
use attn_core::form::AttendanceForm;
use chrono::NaiveDate;

use crate::Config;
use crate::cli::ProjectArgs;
use crate::commands::util::{format_percentage, split_vacations};

/// Runs the project command.
pub fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    args: &ProjectArgs,
    today: NaiveDate,
) -> Result<()> {
    let target = args
        .target
        .clone()
        .or_else(|| config.default_target.map(|t| t.to_string()))
        .unwrap_or_default();

    let form = AttendanceForm {
        total_working_days: &args.total_working_days,
        holidays_taken: &args.holidays_taken,
        extra_holidays: &args.extra_holidays,
        semester_start: &args.semester_start,
        vacations: split_vacations(&args.vacations)?,
        target_percentage: &target,
    };
    let input = form.parse().context("invalid attendance input")?;
    tracing::debug!(?input, %today, "projecting attendance");

    let result = attn_core::project(&input, &config.holidays, today)
        .context("failed to calculate attendance")?;

    if args.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        write_result(writer, &result, today)?;
    }
    Ok(())
}

fn write_result<W: Write>(writer: &mut W, result: &AttendanceResult, today: NaiveDate) -> Result<()> {
    writeln!(writer, "Attendance as of {today}")?;
    writeln!(writer, "Working days so far:  {}", result.working_days_so_far)?;
    writeln!(writer, "Attended days:        {}", result.attended_days)?;
    writeln!(
        writer,
        "Current attendance:   {}",
        format_percentage(result.attendance_percentage)
    )?;
    if result.projected_percentage.is_some() {
        writeln!(
            writer,
            "Projected attendance: {}",
            format_percentage(result.projected_percentage)
        )?;
    }
    writeln!(writer, "Status: {}", result.status_message)?;
    if let Some(message) = &result.target_message {
        writeln!(writer, "Target: {message}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    fn args() -> ProjectArgs {
        ProjectArgs {
            total_working_days: "100".to_string(),
            holidays_taken: "0".to_string(),
            extra_holidays: "0".to_string(),
            semester_start: "2025-01-01".to_string(),
            vacations: Vec::new(),
            target: None,
            today: None,
            json: false,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 8).unwrap()
    }

    fn render(config: &Config, args: &ProjectArgs) -> String {
        let mut output = Vec::new();
        run(&mut output, config, args, today()).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn project_command_reports_perfect_attendance() {
        let output = render(&Config::default(), &args());
        assert_snapshot!(output, @r"
        Attendance as of 2025-01-08
        Working days so far:  6
        Attended days:        6
        Current attendance:   100.00%
        Projected attendance: 100.00%
        Status: Excellent attendance.
        ");
    }

    #[test]
    fn project_command_reports_days_to_target() {
        let args = ProjectArgs {
            holidays_taken: "3".to_string(),
            target: Some("80".to_string()),
            ..args()
        };
        let output = render(&Config::default(), &args);
        assert_snapshot!(output, @r"
        Attendance as of 2025-01-08
        Working days so far:  6
        Attended days:        3
        Current attendance:   50.00%
        Projected attendance: 97.00%
        Status: Below 75% now, but attending every remaining day gets you there.
        Target: Attend 9 more consecutive day(s) to reach 80.00%.
        ");
    }

    #[test]
    fn project_command_uses_configured_default_target() {
        let config = Config {
            default_target: Some(80.0),
            ..Config::default()
        };
        let args = ProjectArgs {
            holidays_taken: "1".to_string(),
            ..args()
        };
        let output = render(&config, &args);
        assert!(output.contains("Target: Already at or above 80.00%."));
    }

    #[test]
    fn project_command_reports_deficit_without_percentages() {
        let args = ProjectArgs {
            holidays_taken: "7".to_string(),
            ..args()
        };
        let output = render(&Config::default(), &args);
        assert_snapshot!(output, @r"
        Attendance as of 2025-01-08
        Working days so far:  6
        Attended days:        -1
        Current attendance:   n/a
        Status: More holidays taken than working days so far. Check the numbers.
        ");
    }

    #[test]
    fn project_command_skips_vacations() {
        let args = ProjectArgs {
            vacations: vec!["2025-01-06..2025-01-07".to_string(), "2025-01-02..".to_string()],
            ..args()
        };
        let output = render(&Config::default(), &args);
        assert!(output.contains("Working days so far:  4"));
    }

    #[test]
    fn project_command_outputs_json() {
        let args = ProjectArgs {
            json: true,
            ..args()
        };
        let output = render(&Config::default(), &args);
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["working_days_so_far"], 6);
        assert_eq!(json["attendance_percentage"], 100.0);
        assert_eq!(json["status"], "excellent");
        assert!(json["target"].is_null());
    }

    #[test]
    fn project_command_rejects_blank_counts() {
        let args = ProjectArgs {
            holidays_taken: " ".to_string(),
            ..args()
        };
        let mut output = Vec::new();
        let err = run(&mut output, &Config::default(), &args, today()).unwrap_err();
        assert_eq!(err.to_string(), "invalid attendance input");
        assert_eq!(err.root_cause().to_string(), "holidays taken is required");
        assert!(output.is_empty());
    }

    #[test]
    fn project_command_guards_empty_elapsed_period() {
        let args = ProjectArgs {
            semester_start: "2025-01-05".to_string(),
            ..args()
        };
        let mut output = Vec::new();
        let today = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let err = run(&mut output, &Config::default(), &args, today).unwrap_err();
        assert_eq!(
            err.root_cause().to_string(),
            "cannot compute a percentage: working days so far is zero"
        );
    }
}
