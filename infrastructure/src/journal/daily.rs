//! Daily log parsing and merging
//!
//! A day's log is re-openable: running the workflow again parses the
//! existing file, merges the new bullets into each section, and supersedes
//! the old productivity score by striking it through and appending the new
//! one, preserving the day's score history.

use std::collections::HashMap;

/// Section order of a daily log file
pub const DAILY_SECTIONS: [&str; 5] = [
    "What I did",
    "What's next",
    "What broke or got weird",
    "Productivity Score",
    "Quick Insights",
];

/// Newly collected entries for one day
#[derive(Debug, Clone, Default)]
pub struct DailyInput {
    pub did: Vec<String>,
    pub next_up: Vec<String>,
    pub broke: Vec<String>,
    /// Self-rated score, 1-5
    pub score: u8,
    pub insights: Vec<String>,
}

impl DailyInput {
    fn new_items(&self, section: &str) -> &[String] {
        match section {
            "What I did" => &self.did,
            "What's next" => &self.next_up,
            "What broke or got weird" => &self.broke,
            "Quick Insights" => &self.insights,
            _ => &[],
        }
    }
}

fn header_for(section: &str) -> String {
    format!("## {section}")
}

/// Whether a line is an unstruck score entry like `- 4/5`
fn is_score_line(line: &str) -> bool {
    line.strip_prefix("- ")
        .is_some_and(|rest| {
            rest.len() == 3
                && rest.ends_with("/5")
                && rest.chars().next().is_some_and(|c| c.is_ascii_digit())
        })
}

/// Parse an existing daily file into its bullet lines per section.
///
/// Only `- ` bullet lines under a known header are kept; anything else is
/// ignored and regenerated on render.
pub fn parse_sections(content: &str) -> HashMap<&'static str, Vec<String>> {
    let mut sections: HashMap<&'static str, Vec<String>> =
        DAILY_SECTIONS.iter().map(|s| (*s, Vec::new())).collect();

    let mut current: Option<&'static str> = None;
    for line in content.lines() {
        let stripped = line.trim();

        if let Some(section) = DAILY_SECTIONS
            .iter()
            .copied()
            .find(|s| stripped == header_for(s))
        {
            current = Some(section);
            continue;
        }

        if let Some(section) = current
            && stripped.starts_with("- ")
        {
            sections.get_mut(section).unwrap().push(stripped.to_string());
        }
    }

    sections
}

/// Render a daily log, merging existing content with new input.
pub fn render(
    existing: &HashMap<&'static str, Vec<String>>,
    input: &DailyInput,
    date_label: &str,
) -> String {
    let mut out = format!("# Daily Log - {date_label}\n\n");
    let empty = Vec::new();

    for section in DAILY_SECTIONS {
        let old_lines = existing.get(section).unwrap_or(&empty);
        let mut lines: Vec<String> = Vec::new();

        if section == "Productivity Score" {
            for old in old_lines {
                if is_score_line(old) {
                    // Supersede the previous score but keep it visible
                    lines.push(format!("- ~~{}~~", &old[2..]));
                } else if old != "- N/A" {
                    lines.push(old.clone());
                }
            }
            lines.push(format!("- {}/5", input.score));
        } else {
            lines.extend(old_lines.iter().cloned());
            for item in input.new_items(section) {
                lines.push(format!("- {item}"));
            }
        }

        if section == "Quick Insights" && lines.is_empty() {
            continue;
        }

        out.push_str(&header_for(section));
        out.push('\n');
        if lines.is_empty() {
            out.push_str("- N/A\n");
        } else {
            for line in &lines {
                out.push_str(line);
                out.push('\n');
            }
        }
        out.push('\n');
    }

    out
}
