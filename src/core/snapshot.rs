//! One prompt render's worth of repository state.
//!
//! [`Snapshot::collect`] runs the whole pipeline for a single invocation: ask the
//! provider for status text, parse it, and attach the merge-in-progress signal.
//! Every call builds its own parser and status; nothing is shared between calls.

use crate::core::{
    config::PromptConfig,
    error::{ParseError, Result},
    git::StatusProvider,
    parser::StatusParser,
    state::RepositoryStatus,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub status: RepositoryStatus,
    /// Merge signal after the config's fallback policy was applied
    pub merge_in_progress: bool,
    pub last_error: Option<ParseError>,
}

impl Snapshot {
    /// Read, parse and summarize the repository behind `provider`.
    ///
    /// Only provider failures are returned as errors. Malformed lines end up in
    /// `last_error` next to the best-effort status.
    pub fn collect<P: StatusProvider + ?Sized>(provider: &P, config: &PromptConfig) -> Result<Self> {
        let text = provider.status_text()?;

        let initial_branch = config
            .initial_branch
            .clone()
            .unwrap_or_else(|| provider.initial_branch());
        let parser = StatusParser::new(initial_branch);

        let (status, last_error) = parser.parse(&text).into_parts();
        if let Some(e) = &last_error {
            log::warn!("status parsed with errors, last one: {e}");
        }

        let merge_in_progress = config.merge_marker_fallback && provider.merge_in_progress();

        Ok(Snapshot {
            status,
            merge_in_progress,
            last_error,
        })
    }
}
