use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::git_commands;

/// A single commit touching the analyzed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Full commit hash.
    pub id: String,
    /// Parent hashes in the order git reports them. Empty for root commits,
    /// two or more entries for merges.
    pub parents: Vec<String>,
}

/// Source of parent edges for the commits touching one file.
///
/// Abstracts the external history query so tests can substitute canned
/// records without a real repository.
pub trait HistorySource {
    /// Return one record per commit touching `file`, newest first.
    fn parent_edges(&self, file: &str) -> Result<Vec<CommitRecord>>;
}

/// History source backed by `git log` in a repository on disk.
pub struct GitLog {
    repo: PathBuf,
}

impl GitLog {
    pub fn new(repo: &Path) -> Self {
        GitLog {
            repo: repo.to_path_buf(),
        }
    }
}

impl HistorySource for GitLog {
    fn parent_edges(&self, file: &str) -> Result<Vec<CommitRecord>> {
        let output = git_commands::log_parents(&self.repo, file)?;
        Ok(parse_records(&output))
    }
}

/// Parse `git log --pretty=format:%H %P` output into commit records.
///
/// Each line holds the commit hash followed by its parent hashes, separated
/// by whitespace. Root commits leave a trailing space and no parent tokens.
/// Blank lines (an empty log) are skipped.
pub fn parse_records(output: &str) -> Vec<CommitRecord> {
    let mut records = Vec::new();
    for line in output.lines() {
        let mut tokens = line.split_whitespace();
        let Some(id) = tokens.next() else {
            continue;
        };
        records.push(CommitRecord {
            id: id.to_string(),
            parents: tokens.map(str::to_string).collect(),
        });
    }
    records
}

#[cfg(test)]
#[path = "history_test.rs"]
mod tests;
