//! Repository state records produced by the status parser.
//!
//! # Public API
//! - [`RepositoryStatus`]: Everything one status run reports about a work tree
//! - [`ChangeArea`]: Per-kind change counts for the index or the work tree
//! - [`RepoState`]: Boolean summary handed to the presenter
//! - [`INITIAL_COMMIT`]: Commit id used while the current branch has no commits
//!
//! A fresh [`RepositoryStatus`] is built for every parse and handed to the
//! caller by value. Counts only ever grow while the parser fills it in.

use crate::core::record::ChangeKind;
use serde::Serialize;

/// Commit id of a repository whose current branch has no commits yet
pub const INITIAL_COMMIT: &str = "(initial)";

/// Change counts for one area (staged or unstaged)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChangeArea {
    pub modified: u32,
    pub added: u32,
    pub deleted: u32,
    pub renamed: u32,
    pub copied: u32,
}

impl ChangeArea {
    /// Count one change of the given kind
    pub fn record(&mut self, kind: ChangeKind) {
        match kind {
            ChangeKind::Modified => self.modified += 1,
            ChangeKind::Added => self.added += 1,
            ChangeKind::Deleted => self.deleted += 1,
            ChangeKind::Renamed => self.renamed += 1,
            ChangeKind::Copied => self.copied += 1,
        }
    }

    pub fn has_changes(&self) -> bool {
        self.total() > 0
    }

    pub fn total(&self) -> u32 {
        self.modified + self.added + self.deleted + self.renamed + self.copied
    }

    /// Field-wise sum of two areas
    pub fn combined(&self, other: &ChangeArea) -> ChangeArea {
        ChangeArea {
            modified: self.modified + other.modified,
            added: self.added + other.added,
            deleted: self.deleted + other.deleted,
            renamed: self.renamed + other.renamed,
            copied: self.copied + other.copied,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepositoryStatus {
    pub branch_name: String,
    pub commit_id: String,
    pub upstream_name: String,
    pub ahead_count: u32,
    pub behind_count: u32,
    pub untracked_count: u32,
    pub unmerged_count: u32,
    pub staged_changes: ChangeArea,
    pub unstaged_changes: ChangeArea,
}

impl RepositoryStatus {
    /// Conflicted entries exist, or the caller knows a merge is in progress.
    ///
    /// Pass `false` to get the count-only answer.
    pub fn is_unmerged(&self, merge_in_progress: bool) -> bool {
        self.unmerged_count > 0 || merge_in_progress
    }

    /// The work tree has changes that are not staged
    pub fn is_modified(&self) -> bool {
        self.unstaged_changes.has_changes()
    }

    /// The index has staged but uncommitted changes
    pub fn is_dirty(&self) -> bool {
        self.staged_changes.has_changes()
    }

    pub fn is_clean(&self) -> bool {
        !self.is_dirty()
    }

    pub fn has_untracked(&self) -> bool {
        self.untracked_count > 0
    }

    /// HEAD points at a branch without commits
    pub fn is_initial(&self) -> bool {
        self.commit_id == INITIAL_COMMIT
    }

    /// Abbreviated commit id; the initial-commit marker is never cut
    pub fn short_commit(&self, len: usize) -> &str {
        if self.is_initial() {
            return &self.commit_id;
        }
        match self.commit_id.char_indices().nth(len) {
            Some((end, _)) => &self.commit_id[..end],
            None => &self.commit_id,
        }
    }
}

/// Flattened view of a [`RepositoryStatus`] for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoState {
    pub branch: String,
    pub commit: String,
    pub ahead: u32,
    pub behind: u32,
    pub untracked: bool,
    pub unmerged: bool,
    pub unstaged: bool,
    pub staged: bool,
    pub clean: bool,
}

impl RepoState {
    pub fn from_status(status: &RepositoryStatus, merge_in_progress: bool, short_len: usize) -> Self {
        Self {
            branch: status.branch_name.clone(),
            commit: status.short_commit(short_len).to_string(),
            ahead: status.ahead_count,
            behind: status.behind_count,
            untracked: status.has_untracked(),
            unmerged: status.is_unmerged(merge_in_progress),
            unstaged: status.is_modified(),
            staged: status.is_dirty(),
            clean: status.is_clean(),
        }
    }
}
