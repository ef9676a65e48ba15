//! Monthly log aggregation
//!
//! Collects the daily files of a target month plus the weekly files whose
//! ISO week overlaps it, producing the opaque context block a summary run
//! feeds to the solver. The solver core never sees file names or layouts —
//! only the aggregated text.

use super::store::{JournalError, JournalLayout, JournalStore};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// The previous full month relative to `today`
pub fn previous_month(today: NaiveDate) -> (i32, u32) {
    let first_of_month = today.with_day(1).unwrap_or(today);
    let last_of_previous = first_of_month - chrono::Duration::days(1);
    (last_of_previous.year(), last_of_previous.month())
}

/// ISO week numbers overlapping a month
fn weeks_in_month(year: i32, month: u32) -> HashSet<u32> {
    let mut weeks = HashSet::new();
    let mut day = NaiveDate::from_ymd_opt(year, month, 1);
    while let Some(d) = day {
        if d.month() != month || d.year() != year {
            break;
        }
        weeks.insert(d.iso_week().week());
        day = d.succ_opt();
    }
    weeks
}

fn collect_dir(
    dir: &Path,
    mut include: impl FnMut(&str) -> bool,
    entries: &mut Vec<(String, String)>,
) -> Result<(), JournalError> {
    if !dir.is_dir() {
        return Ok(());
    }
    let listing = fs::read_dir(dir).map_err(|source| JournalError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in listing {
        let entry = entry.map_err(|source| JournalError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if path.extension().and_then(|e| e.to_str()) != Some("md") || !include(name) {
            continue;
        }
        let content = fs::read_to_string(&path).map_err(|source| JournalError::Io {
            path: path.clone(),
            source,
        })?;
        entries.push((name.to_string(), content));
    }
    Ok(())
}

/// Aggregate all log entries for a month, sorted by file name.
///
/// Returns an empty list when no file matched — the caller decides whether
/// an empty month aborts the workflow.
pub fn aggregate_month(
    store: &JournalStore,
    year: i32,
    month: u32,
) -> Result<Vec<(String, String)>, JournalError> {
    if !(1..=12).contains(&month) {
        return Err(JournalError::InvalidMonth(month));
    }

    let weeks = weeks_in_month(year, month);
    let mut entries = Vec::new();

    match store.layout() {
        JournalLayout::Flat => {
            let daily_prefix = format!("daily-log-{year}-{month:02}");
            let weekly = Regex::new(r"^(\d{4})-W(\d{2})\.md$").expect("static regex");

            collect_dir(
                store.root(),
                |name| {
                    if name.starts_with(&daily_prefix) {
                        return true;
                    }
                    weekly.captures(name).is_some_and(|c| {
                        c[1].parse::<i32>().is_ok_and(|y| y == year)
                            && c[2].parse::<u32>().is_ok_and(|w| weeks.contains(&w))
                    })
                },
                &mut entries,
            )?;
        }
        JournalLayout::Logseq => {
            let daily_prefix = format!("{year}_{month:02}");
            collect_dir(
                &store.journals_dir(),
                |name| name.starts_with(&daily_prefix),
                &mut entries,
            )?;

            let weekly = Regex::new(r"^(\d{4})___W(\d{2})___\(.*\)\.md$").expect("static regex");
            collect_dir(
                &store.pages_dir(),
                |name| {
                    weekly.captures(name).is_some_and(|c| {
                        c[1].parse::<i32>().is_ok_and(|y| y == year)
                            && c[2].parse::<u32>().is_ok_and(|w| weeks.contains(&w))
                    })
                },
                &mut entries,
            )?;
        }
    }

    entries.sort_by(|a, b| a.0.cmp(&b.0));
    debug!("Aggregated {} log files for {year}-{month:02}", entries.len());
    Ok(entries)
}

/// Join aggregated entries into the single context block
pub fn render_aggregate(entries: &[(String, String)]) -> String {
    entries
        .iter()
        .map(|(name, content)| format!("\n--- Content from {name} ---\n{content}"))
        .collect::<Vec<_>>()
        .join("\n")
}
