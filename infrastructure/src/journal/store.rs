//! Journal directory layout and file access

use chrono::{Datelike, Duration, NaiveDate};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Journal directory layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalLayout {
    /// One flat folder of markdown files
    Flat,
    /// Logseq graph: daily files under journals/, everything else under pages/
    Logseq,
}

/// Errors from journal file operations
#[derive(Error, Debug)]
pub enum JournalError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Weekly log {0} not found. Run start-of-week planning first.")]
    MissingWeekly(PathBuf),

    #[error("Invalid month number {0}. Provide a number between 1 and 12.")]
    InvalidMonth(u32),
}

/// English month name for a 1-based month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Monday and Sunday of the week containing `date`
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    (start, start + Duration::days(6))
}

/// Handle to a journal directory
#[derive(Debug, Clone)]
pub struct JournalStore {
    root: PathBuf,
    layout: JournalLayout,
}

impl JournalStore {
    pub fn new(root: impl Into<PathBuf>, layout: JournalLayout) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    /// Create the store, ensuring its directories exist
    pub fn open(root: impl Into<PathBuf>, layout: JournalLayout) -> Result<Self, JournalError> {
        let store = Self::new(root, layout);
        store.ensure_dirs()?;
        Ok(store)
    }

    /// Default journal root: `~/daily_logs`
    pub fn default_root() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("daily_logs")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layout(&self) -> JournalLayout {
        self.layout
    }

    /// Directory holding daily files
    pub fn journals_dir(&self) -> PathBuf {
        match self.layout {
            JournalLayout::Flat => self.root.clone(),
            JournalLayout::Logseq => self.root.join("journals"),
        }
    }

    /// Directory holding weekly files and summaries
    pub fn pages_dir(&self) -> PathBuf {
        match self.layout {
            JournalLayout::Flat => self.root.clone(),
            JournalLayout::Logseq => self.root.join("pages"),
        }
    }

    fn ensure_dirs(&self) -> Result<(), JournalError> {
        for dir in [self.root.clone(), self.journals_dir(), self.pages_dir()] {
            fs::create_dir_all(&dir).map_err(|source| JournalError::Io { path: dir, source })?;
        }
        Ok(())
    }

    /// Path of the daily log for `date`
    pub fn daily_path(&self, date: NaiveDate) -> PathBuf {
        match self.layout {
            JournalLayout::Flat => self
                .root
                .join(format!("daily-log-{}.md", date.format("%Y-%m-%d"))),
            JournalLayout::Logseq => self
                .journals_dir()
                .join(format!("{}.md", date.format("%Y_%m_%d"))),
        }
    }

    /// Path of the weekly log for the ISO week containing `date`
    pub fn weekly_path(&self, date: NaiveDate) -> PathBuf {
        let iso = date.iso_week();
        match self.layout {
            JournalLayout::Flat => self
                .root
                .join(format!("{}-W{:02}.md", iso.year(), iso.week())),
            JournalLayout::Logseq => {
                let (start, end) = week_bounds(date);
                self.pages_dir().join(format!(
                    "{}___W{:02}___({} - {}).md",
                    iso.year(),
                    iso.week(),
                    start.format("%d.%m."),
                    end.format("%d.%m.")
                ))
            }
        }
    }

    /// Path of the monthly summary file
    pub fn summary_path(&self, year: i32, month: u32) -> PathBuf {
        self.pages_dir()
            .join(format!("{year}___Progress___{}.md", month_name(month)))
    }

    /// Read a file, treating a missing file as empty
    pub fn read_if_exists(&self, path: &Path) -> Result<Option<String>, JournalError> {
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(path)
            .map(Some)
            .map_err(|source| JournalError::Io {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Overwrite a file
    pub fn write(&self, path: &Path, content: &str) -> Result<(), JournalError> {
        fs::write(path, content).map_err(|source| JournalError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Append to an existing file; errors if it does not exist
    pub fn append(&self, path: &Path, content: &str) -> Result<(), JournalError> {
        if !path.exists() {
            return Err(JournalError::MissingWeekly(path.to_path_buf()));
        }
        let mut file = fs::OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|source| JournalError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        file.write_all(content.as_bytes())
            .map_err(|source| JournalError::Io {
                path: path.to_path_buf(),
                source,
            })
    }
}
