//! Parser for `git status --porcelain=v2 --branch` output.
//!
//! This module provides [`StatusParser`] which turns the raw status text into a
//! [`RepositoryStatus`]. The parser is best-effort: a malformed line is logged and
//! recorded in the [`ParseReport`], and the scan carries on with the next line.
//!
//! # Public API
//! - [`StatusParser`]: Parses status text; holds only the initial branch name
//! - [`ParseReport`]: The accumulated status plus every line-level error
//! - [`DEFAULT_INITIAL_BRANCH`]: Branch name used when git does not report one
//!
//! # Line Grammar
//! - **`# <key> <value>...`**: Branch headers (`branch.oid`, `branch.head`,
//!   `branch.upstream`, `branch.ab`)
//! - **`1 <XY> ...`**: Ordinary changed entry
//! - **`2 <XY> ...`**: Renamed or copied entry
//! - **`u <XY> ...`**: Unmerged entry
//! - **`? <path>`**: Untracked entry
//!
//! Fields are separated by runs of whitespace. Unknown record types and unknown
//! header keys are skipped.

use crate::core::error::ParseError;
use crate::core::record::{ChangeKind, HeaderKey, RecordKind};
use crate::core::state::{RepositoryStatus, INITIAL_COMMIT};
use std::str::SplitWhitespace;

/// Branch name git uses for a new repository unless `init.defaultBranch` is set
pub const DEFAULT_INITIAL_BRANCH: &str = "master";

type LineResult = std::result::Result<(), ParseError>;

/// Outcome of one parse: the status and every error met on the way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub status: RepositoryStatus,
    pub errors: Vec<ParseError>,
}

impl ParseReport {
    /// The last line-level error, if any line failed
    pub fn last_error(&self) -> Option<&ParseError> {
        self.errors.last()
    }

    /// Split into the status and the last error
    pub fn into_parts(self) -> (RepositoryStatus, Option<ParseError>) {
        let last = self.errors.into_iter().last();
        (self.status, last)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusParser {
    initial_branch: String,
}

impl Default for StatusParser {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_BRANCH)
    }
}

impl StatusParser {
    pub fn new(initial_branch: impl Into<String>) -> Self {
        Self {
            initial_branch: initial_branch.into(),
        }
    }

    /// Parse a complete status report into a fresh [`RepositoryStatus`]
    pub fn parse(&self, raw: &str) -> ParseReport {
        log::debug!("parsing git status output ({} bytes)", raw.len());

        let mut status = RepositoryStatus::default();
        let mut errors = Vec::new();
        let mut records = 0usize;

        for line in raw.lines() {
            if line.trim().is_empty() {
                continue;
            }
            records += 1;

            if let Err(e) = self.parse_line(&mut status, line) {
                log::warn!("error parsing {line:?}: {e}");
                errors.push(e);
            }
        }

        // An empty report comes from a repository without commits
        if records == 0 || status.commit_id == INITIAL_COMMIT {
            self.apply_initial_defaults(&mut status);
        }

        log::debug!(
            "parsed {} records with {} errors (branch={:?}, untracked={}, unmerged={})",
            records,
            errors.len(),
            status.branch_name,
            status.untracked_count,
            status.unmerged_count
        );

        ParseReport { status, errors }
    }

    /// Parse one status line into `status`
    pub fn parse_line(&self, status: &mut RepositoryStatus, line: &str) -> LineResult {
        let mut fields = line.split_whitespace();
        let Some(prefix) = fields.next() else {
            return Ok(());
        };

        match RecordKind::from_token(prefix) {
            RecordKind::Header => parse_header(status, line, fields),
            RecordKind::Changed | RecordKind::RenamedOrCopied => {
                // Rename/copy records carry extra trailing fields we never read
                parse_changed_entry(status, line, fields)
            }
            RecordKind::Unmerged => {
                status.unmerged_count += 1;
                Ok(())
            }
            RecordKind::Untracked => {
                status.untracked_count += 1;
                Ok(())
            }
            RecordKind::Ignored | RecordKind::Unknown => {
                log::trace!("skipping record {line:?}");
                Ok(())
            }
        }
    }

    fn apply_initial_defaults(&self, status: &mut RepositoryStatus) {
        status.commit_id = INITIAL_COMMIT.to_string();
        if status.branch_name.is_empty() {
            status.branch_name = self.initial_branch.clone();
        }
    }
}

fn parse_header(status: &mut RepositoryStatus, line: &str, mut fields: SplitWhitespace) -> LineResult {
    let Some(key) = fields.next() else {
        return Ok(());
    };

    match HeaderKey::from_token(key) {
        HeaderKey::Oid => {
            status.commit_id = header_value(line, HeaderKey::Oid, &mut fields)?.to_string();
        }
        HeaderKey::Head => {
            status.branch_name = header_value(line, HeaderKey::Head, &mut fields)?.to_string();
        }
        HeaderKey::Upstream => {
            status.upstream_name =
                header_value(line, HeaderKey::Upstream, &mut fields)?.to_string();
        }
        HeaderKey::AheadBehind => parse_ahead_behind(status, line, fields)?,
        HeaderKey::Unknown => log::trace!("skipping header {line:?}"),
    }

    Ok(())
}

fn header_value<'a>(
    line: &str,
    key: HeaderKey,
    fields: &mut SplitWhitespace<'a>,
) -> std::result::Result<&'a str, ParseError> {
    fields
        .next()
        .ok_or_else(|| ParseError::malformed_header(line, format!("{key} has no value")))
}

/// `+<ahead> -<behind>`; the sign picks the counter, so order does not matter.
/// A rejected header leaves both counters untouched.
fn parse_ahead_behind(status: &mut RepositoryStatus, line: &str, fields: SplitWhitespace) -> LineResult {
    let mut ahead = None;
    let mut behind = None;

    for token in fields {
        if let Some(digits) = token.strip_prefix('+') {
            ahead = Some(parse_count(line, token, digits)?);
        } else if let Some(digits) = token.strip_prefix('-') {
            behind = Some(parse_count(line, token, digits)?);
        } else {
            return Err(ParseError::malformed_header(
                line,
                format!("missing sign in '{token}'"),
            ));
        }
    }

    if ahead.is_none() && behind.is_none() {
        return Err(ParseError::malformed_header(
            line,
            "missing ahead/behind counts",
        ));
    }

    if let Some(ahead) = ahead {
        status.ahead_count = ahead;
    }
    if let Some(behind) = behind {
        status.behind_count = behind;
    }
    Ok(())
}

fn parse_count(line: &str, token: &str, digits: &str) -> std::result::Result<u32, ParseError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::malformed_header(
            line,
            format!("invalid count '{token}'"),
        ));
    }
    digits
        .parse()
        .map_err(|e| ParseError::malformed_header(line, format!("invalid count '{token}': {e}")))
}

/// Only the XY code is read: X counts toward the staged area, Y toward the
/// unstaged area.
fn parse_changed_entry(status: &mut RepositoryStatus, line: &str, mut fields: SplitWhitespace) -> LineResult {
    let xy = fields
        .next()
        .ok_or_else(|| ParseError::malformed_entry(line, "missing XY status code"))?;

    let mut codes = xy.chars();
    let (Some(x), Some(y)) = (codes.next(), codes.next()) else {
        return Err(ParseError::malformed_entry(
            line,
            format!("XY code '{xy}' is shorter than two characters"),
        ));
    };

    if let Some(kind) = ChangeKind::from_code(x) {
        status.staged_changes.record(kind);
    }
    if let Some(kind) = ChangeKind::from_code(y) {
        status.unstaged_changes.record(kind);
    }
    Ok(())
}
