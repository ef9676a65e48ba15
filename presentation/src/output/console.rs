//! Console output formatting for solve reports

use ballot_domain::{SolveReport, StepState};
use colored::Colorize;

/// Formats solve reports for terminal output
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Full report: step table, warnings, then the solution
    pub fn format(report: &SolveReport) -> String {
        let mut out = String::new();

        out.push_str(&format!("{}\n", "Steps".bold()));
        for step in &report.steps {
            let tag = match step.state {
                StepState::Validated => "validated".green().to_string(),
                StepState::Repaired => "repaired".yellow().to_string(),
                StepState::Skipped => "skipped".red().to_string(),
                other => other.to_string(),
            };
            out.push_str(&format!(
                "  {}. [{}] [{}] {}\n",
                step.index + 1,
                step.profile,
                tag,
                step.instruction
            ));
        }

        let warnings: Vec<_> = report.warnings().collect();
        if !warnings.is_empty() {
            out.push_str(&format!("\n{}\n", "Warnings".bold().yellow()));
            for (step, diagnostic) in warnings {
                out.push_str(&format!("  step {}: {diagnostic}\n", step.index + 1));
            }
        }

        out.push_str(&format!("\n{}\n\n", "Result".bold()));
        out.push_str(&report.solution);
        out.push('\n');
        out
    }

    /// Only the solution text
    pub fn format_solution_only(report: &SolveReport) -> String {
        report.solution.clone()
    }

    /// The whole report as JSON
    pub fn format_json(report: &SolveReport) -> String {
        serde_json::to_string_pretty(report)
            .unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballot_domain::{Profile, StepRecord};

    fn report() -> SolveReport {
        let mut step = StepRecord::new(0, "Research X", Profile::Reasoning);
        step.resolve(StepState::Validated, "Logic Valid");
        SolveReport::new("goal", "the solution text", vec![step], false)
    }

    #[test]
    fn test_format_contains_steps_and_solution() {
        let rendered = ConsoleFormatter::format(&report());
        assert!(rendered.contains("Research X"));
        assert!(rendered.contains("the solution text"));
    }

    #[test]
    fn test_solution_only() {
        assert_eq!(
            ConsoleFormatter::format_solution_only(&report()),
            "the solution text"
        );
    }

    #[test]
    fn test_json_roundtrips() {
        let json = ConsoleFormatter::format_json(&report());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["solution"], "the solution text");
        assert_eq!(value["steps"][0]["state"], "Validated");
    }
}
