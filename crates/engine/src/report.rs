use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    Converted { columns: usize, rows: usize },
    Skipped { reason: String },
    Failed { error: String },
}

/// What happened to one input file.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileOutcome {
    #[must_use]
    pub const fn is_converted(&self) -> bool {
        matches!(self.status, FileStatus::Converted { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub target_dir: PathBuf,
    pub started_at: DateTime<Local>,
    pub files: Vec<FileOutcome>,
}

impl RunReport {
    #[must_use]
    pub fn new(target_dir: PathBuf) -> Self {
        Self {
            target_dir,
            started_at: Local::now(),
            files: Vec::new(),
        }
    }

    #[must_use]
    pub fn converted(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Converted { .. }))
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Skipped { .. }))
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Failed { .. }))
    }

    /// Every eligible file was converted (vacuously true for an empty batch).
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.files.iter().all(FileOutcome::is_converted)
    }

    fn count(&self, pred: impl Fn(&FileStatus) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.status)).count()
    }
}
