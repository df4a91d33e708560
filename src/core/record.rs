//! Type-safe tags for porcelain v2 status records.
//!
//! The status text is dispatched on three small closed vocabularies: the record
//! prefix that starts every line, the key of a `#` header line, and the single
//! characters of an XY status code. Each one gets an enum here so the parser
//! matches exhaustively instead of comparing strings.
//!
//! # Public API
//! - [`RecordKind`]: What a status line describes (`#`, `1`, `2`, `u`, `?`, `!`)
//! - [`HeaderKey`]: Which branch header a `#` line carries
//! - [`ChangeKind`]: The change an XY character reports for one area

use std::fmt;

/// Kind of a status line, selected by its first token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Branch header metadata (#)
    Header,
    /// Ordinary changed tracked entry (1)
    Changed,
    /// Renamed or copied tracked entry (2)
    RenamedOrCopied,
    /// Unmerged entry (u)
    Unmerged,
    /// Untracked entry (?)
    Untracked,
    /// Ignored entry (!), only present with --ignored
    Ignored,
    /// Any record type this version does not know about
    Unknown,
}

impl RecordKind {
    pub fn from_token(token: &str) -> Self {
        match token {
            "#" => RecordKind::Header,
            "1" => RecordKind::Changed,
            "2" => RecordKind::RenamedOrCopied,
            "u" => RecordKind::Unmerged,
            "?" => RecordKind::Untracked,
            "!" => RecordKind::Ignored,
            _ => RecordKind::Unknown,
        }
    }
}

/// Key of a `# branch.*` header line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderKey {
    /// branch.oid <commit> | (initial)
    Oid,
    /// branch.head <branch> | (detached)
    Head,
    /// branch.upstream <upstream-branch>
    Upstream,
    /// branch.ab +<ahead> -<behind>
    AheadBehind,
    /// Headers such as `stash` that carry nothing we report
    Unknown,
}

impl HeaderKey {
    pub fn from_token(token: &str) -> Self {
        match token {
            "branch.oid" => HeaderKey::Oid,
            "branch.head" => HeaderKey::Head,
            "branch.upstream" => HeaderKey::Upstream,
            "branch.ab" => HeaderKey::AheadBehind,
            _ => HeaderKey::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderKey::Oid => "branch.oid",
            HeaderKey::Head => "branch.head",
            HeaderKey::Upstream => "branch.upstream",
            HeaderKey::AheadBehind => "branch.ab",
            HeaderKey::Unknown => "unknown",
        }
    }
}

impl fmt::Display for HeaderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Change reported by one side of an XY status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Modified (M)
    Modified,
    /// Added (A)
    Added,
    /// Deleted (D)
    Deleted,
    /// Renamed (R)
    Renamed,
    /// Copied (C)
    Copied,
}

impl ChangeKind {
    /// Classify one XY character.
    ///
    /// `.` means unchanged. Characters outside the table (for example `T` for a
    /// type change, or `U` which only appears on unmerged records) are not
    /// counted and are not an error.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'M' => Some(ChangeKind::Modified),
            'A' => Some(ChangeKind::Added),
            'D' => Some(ChangeKind::Deleted),
            'R' => Some(ChangeKind::Renamed),
            'C' => Some(ChangeKind::Copied),
            _ => None,
        }
    }
}
