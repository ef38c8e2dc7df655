use colored::{Color, Colorize};
use serde::Serialize;

use crate::casebook::{CaseOutcome, CaseStatus, Counts, RunSummary};

// =============================================================================
// Console and JSON reports for a case run
// =============================================================================

pub struct ReportFormatter;

#[derive(Serialize)]
struct JsonReport<'a> {
    counts: Counts,
    stopped_early: bool,
    outcomes: &'a [CaseOutcome],
}

impl ReportFormatter {
    pub fn format_text(summary: &RunSummary, color: bool) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{}\n{}\n",
            paint("Array Puzzle Results", Color::White, color, true),
            "=".repeat(60)
        ));

        for outcome in &summary.outcomes {
            let line = match &outcome.status {
                CaseStatus::Passed { actual } => format!(
                    "{} [{}] {} -> {}",
                    paint("PASS    ", Color::Green, color, true),
                    outcome.problem,
                    outcome.name,
                    actual
                ),
                CaseStatus::Failed { expected, actual } => format!(
                    "{} [{}] {} -> expected {}, got {}",
                    paint("FAIL    ", Color::Red, color, true),
                    outcome.problem,
                    outcome.name,
                    expected,
                    actual
                ),
                CaseStatus::Computed { actual } => format!(
                    "{} [{}] {} -> {}",
                    paint("RESULT  ", Color::Blue, color, true),
                    outcome.problem,
                    outcome.name,
                    actual
                ),
                CaseStatus::Rejected { error } => format!(
                    "{} [{}] {} -> {}",
                    paint("REJECTED", Color::Yellow, color, true),
                    outcome.problem,
                    outcome.name,
                    error
                ),
            };
            output.push_str(&line);
            output.push('\n');
        }

        if summary.stopped_early {
            output.push_str(&paint(
                "Stopped at first failure; remaining cases skipped\n",
                Color::Yellow,
                color,
                false,
            ));
        }

        output.push('\n');
        output.push_str(&Self::format_summary(&summary.counts()));
        output
    }

    pub fn format_summary(counts: &Counts) -> String {
        let plural = if counts.total == 1 { "" } else { "s" };
        format!(
            "Summary: {} case{plural}, {} passed, {} failed, {} rejected, {} computed\n",
            counts.total, counts.passed, counts.failed, counts.rejected, counts.computed
        )
    }

    pub fn format_json(summary: &RunSummary) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&JsonReport {
            counts: summary.counts(),
            stopped_early: summary.stopped_early,
            outcomes: &summary.outcomes,
        })
    }

    pub fn should_use_colors() -> bool {
        std::env::var("NO_COLOR").is_err()
    }
}

fn paint(text: &str, color: Color, enabled: bool, bold: bool) -> String {
    match (enabled, bold) {
        (false, _) => text.to_string(),
        (true, true) => text.color(color).bold().to_string(),
        (true, false) => text.color(color).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casebook::{run_cases, CaseFile, SpecialArrayCase};

    fn failing_summary() -> RunSummary {
        let file = CaseFile {
            special_array: vec![
                SpecialArrayCase {
                    name: Some("ok".to_string()),
                    nums: vec![1, 2],
                    expected: Some(true),
                },
                SpecialArrayCase {
                    name: Some("wrong".to_string()),
                    nums: vec![1, 3],
                    expected: Some(true),
                },
                SpecialArrayCase {
                    name: Some("empty".to_string()),
                    nums: vec![],
                    expected: None,
                },
            ],
            ..CaseFile::default()
        };
        run_cases(&file)
    }

    #[test]
    fn test_plain_text_report() {
        let report = ReportFormatter::format_text(&failing_summary(), false);
        assert!(report.starts_with("Array Puzzle Results\n"));
        assert!(report.contains("PASS     [special_array] ok -> true"));
        assert!(report.contains("FAIL     [special_array] wrong -> expected true, got false"));
        assert!(report.contains("REJECTED [special_array] empty -> special array check requires"));
        assert!(report.contains("Summary: 3 cases, 1 passed, 1 failed, 1 rejected, 0 computed"));
    }

    #[test]
    fn test_summary_singular() {
        let counts = Counts {
            total: 1,
            passed: 1,
            ..Counts::default()
        };
        assert!(ReportFormatter::format_summary(&counts).starts_with("Summary: 1 case,"));
    }

    #[test]
    fn test_json_report() {
        let json = ReportFormatter::format_json(&failing_summary()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["counts"]["total"], 3);
        assert_eq!(value["counts"]["failed"], 1);
        assert_eq!(value["outcomes"][1]["status"], "failed");
        assert_eq!(value["outcomes"][1]["expected"], true);
        assert_eq!(value["outcomes"][1]["actual"], false);
        assert_eq!(value["stopped_early"], false);
    }

    #[test]
    fn test_prefix_counts_render_as_list() {
        let report = ReportFormatter::format_text(&run_cases(&CaseFile::builtin()), false);
        assert!(report.contains("[prefix_common] permutation -> [0, 2, 3, 4]"));
    }
}
