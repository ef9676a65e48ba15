//! Weekly log rendering
//!
//! Start-of-week planning creates (or overwrites) the week's file; the
//! end-of-week review is appended below a divider. The Logseq layout
//! carries every block as an outline bullet.

use super::store::{JournalLayout, week_bounds};
use chrono::{Datelike, NaiveDate};

/// Start-of-week planning input
#[derive(Debug, Clone, Default)]
pub struct WeekPlan {
    pub goals: Vec<String>,
    pub next_steps: Vec<String>,
    pub other_tasks: Vec<String>,
}

/// End-of-week review input
#[derive(Debug, Clone, Default)]
pub struct WeekReview {
    pub went_well: String,
    pub happy_about: String,
    pub made_laugh: String,
    pub progress: String,
}

fn bullet_list(out: &mut String, header: &str, items: &[String], layout: JournalLayout) {
    let prefix = match layout {
        JournalLayout::Flat => "",
        JournalLayout::Logseq => "- ",
    };
    out.push_str(&format!("{prefix}## {header}\n"));
    if items.is_empty() {
        out.push_str("- N/A\n");
    } else {
        for item in items {
            out.push_str(&format!("- {item}\n"));
        }
    }
    out.push('\n');
}

/// Render a fresh weekly file for the week containing `date`
pub fn render_week_plan(date: NaiveDate, plan: &WeekPlan, layout: JournalLayout) -> String {
    let iso = date.iso_week();
    let (start, end) = week_bounds(date);

    let mut out = String::new();
    match layout {
        JournalLayout::Flat => {
            out.push_str(&format!("# Weekly Log for {}, Week {}\n", iso.year(), iso.week()));
        }
        JournalLayout::Logseq => {
            out.push_str("exclude-from-graph-view:: true\n\n");
            out.push_str(&format!("- # Weekly Log for {}, Week {}\n", iso.year(), iso.week()));
        }
    }
    out.push_str(&format!(
        "_{} - {}_\n\n",
        start.format("%B %d"),
        end.format("%B %d, %Y")
    ));

    bullet_list(&mut out, "My Goals for the Week", &plan.goals, layout);
    bullet_list(&mut out, "Next Steps", &plan.next_steps, layout);
    bullet_list(&mut out, "Other Tasks", &plan.other_tasks, layout);

    out
}

fn review_section(out: &mut String, header: &str, body: &str, layout: JournalLayout) {
    let body = if body.trim().is_empty() { "N/A" } else { body };
    match layout {
        JournalLayout::Flat => out.push_str(&format!("### {header}\n{body}\n\n")),
        JournalLayout::Logseq => out.push_str(&format!(" - ### {header}\n{body}\n\n")),
    }
}

/// Render the review block appended to an existing weekly file
pub fn render_week_review(review: &WeekReview, layout: JournalLayout) -> String {
    let mut out = String::new();
    match layout {
        JournalLayout::Flat => out.push_str("\n---\n\n## End of Week Review\n\n"),
        JournalLayout::Logseq => out.push_str("\n- ---\n- ## End of Week Review\n"),
    }

    review_section(&mut out, "What went well?", &review.went_well, layout);
    review_section(&mut out, "What are you happy about?", &review.happy_about, layout);
    review_section(&mut out, "What made you laugh?", &review.made_laugh, layout);
    review_section(
        &mut out,
        "Please describe any progress that you have observed.",
        &review.progress,
        layout,
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 4).unwrap()
    }

    #[test]
    fn test_flat_plan_layout() {
        let plan = WeekPlan {
            goals: vec!["ship feature".to_string()],
            next_steps: vec![],
            other_tasks: vec!["tidy backlog".to_string()],
        };

        let rendered = render_week_plan(monday(), &plan, JournalLayout::Flat);
        assert!(rendered.starts_with("# Weekly Log for 2025, Week 32\n"));
        assert!(rendered.contains("_August 04 - August 10, 2025_"));
        assert!(rendered.contains("## My Goals for the Week\n- ship feature\n"));
        assert!(rendered.contains("## Next Steps\n- N/A\n"));
        assert!(rendered.contains("## Other Tasks\n- tidy backlog\n"));
    }

    #[test]
    fn test_logseq_plan_layout() {
        let rendered = render_week_plan(monday(), &WeekPlan::default(), JournalLayout::Logseq);
        assert!(rendered.starts_with("exclude-from-graph-view:: true\n\n"));
        assert!(rendered.contains("- # Weekly Log for 2025, Week 32\n"));
        assert!(rendered.contains("- ## My Goals for the Week\n- N/A\n"));
    }

    #[test]
    fn test_review_blank_fields_become_na() {
        let review = WeekReview {
            went_well: "shipped the thing".to_string(),
            ..Default::default()
        };

        let rendered = render_week_review(&review, JournalLayout::Flat);
        assert!(rendered.starts_with("\n---\n\n## End of Week Review\n\n"));
        assert!(rendered.contains("### What went well?\nshipped the thing\n"));
        assert!(rendered.contains("### What are you happy about?\nN/A\n"));
        assert!(rendered.contains("### What made you laugh?\nN/A\n"));
    }

    #[test]
    fn test_logseq_review_bullets() {
        let rendered = render_week_review(&WeekReview::default(), JournalLayout::Logseq);
        assert!(rendered.contains("- ## End of Week Review\n"));
        assert!(rendered.contains(" - ### What went well?\nN/A\n"));
    }
}
