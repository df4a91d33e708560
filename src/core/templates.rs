//! Template system for the prompt line.
//!
//! This module renders a parsed [`RepositoryStatus`] into the text the shell
//! embeds in its prompt. Rendering is a single pass over the template with
//! `{placeholder}` substitution; the output is plain text, the shell decides how
//! to color it.
//!
//! # Public API
//! - [`TemplateContext`]: Status counts plus the [`RepoState`] summary
//! - [`render_template`]: Placeholder substitution for the `fmt` output
//! - [`render_basic`]: Comma separated counts for scripts
//! - [`render_json`]: JSON dump of the full status
//! - [`DEFAULT_TEMPLATE`]: Template used when the config does not set one
//!
//! # Placeholders
//! - **`{branch}` `{commit}` `{upstream}`**: Names, commit abbreviated
//! - **`{ahead}` `{behind}` `{ahead_behind}`**: Divergence from upstream
//! - **`{untracked}` `{unmerged}` `{staged}` `{unstaged}`**: Entry counts
//! - **`{state}`**: Markers `?` untracked, `!` unmerged, `*` unstaged,
//!   `+` staged, or `clean`
//!
//! Unknown placeholders are kept as-is.

use crate::core::{
    error::Result,
    state::{RepoState, RepositoryStatus},
};
use serde::Serialize;
use std::fmt::Write;

pub const DEFAULT_TEMPLATE: &str = "{branch}@{commit}{ahead_behind}{state}";

/// Context for template rendering
///
/// Names, divergence and markers come from `state`; per-kind counts are read
/// from `status` directly.
#[derive(Debug, Clone)]
pub struct TemplateContext<'a> {
    pub status: &'a RepositoryStatus,
    pub state: RepoState,
    pub merge_in_progress: bool,
}

impl<'a> TemplateContext<'a> {
    pub fn new(status: &'a RepositoryStatus, merge_in_progress: bool, short_len: usize) -> Self {
        Self {
            status,
            state: RepoState::from_status(status, merge_in_progress, short_len),
            merge_in_progress,
        }
    }
}

/// Render a template with the context's values
pub fn render_template(template: &str, context: &TemplateContext) -> String {
    let estimated_capacity = template.len()
        + context.state.branch.len()
        + context.status.upstream_name.len()
        + context.state.commit.len()
        + 32;

    let mut output = String::with_capacity(estimated_capacity);
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            output.push(ch);
            continue;
        }

        let mut placeholder = String::new();
        let mut found_closing = false;

        for next_ch in chars.by_ref() {
            if next_ch == '}' {
                found_closing = true;
                break;
            }
            placeholder.push(next_ch);
        }

        if found_closing {
            if !push_placeholder(&mut output, &placeholder, context) {
                // Unknown placeholder, keep as-is
                output.push('{');
                output.push_str(&placeholder);
                output.push('}');
            }
        } else {
            // No closing brace found, treat as literal
            output.push(ch);
            output.push_str(&placeholder);
        }
    }

    output
}

/// Write the value of `name`; false if the placeholder is unknown
fn push_placeholder(output: &mut String, name: &str, context: &TemplateContext) -> bool {
    let status = context.status;
    let state = &context.state;
    match name {
        "branch" => output.push_str(&state.branch),
        "commit" => output.push_str(&state.commit),
        "upstream" => output.push_str(&status.upstream_name),
        "ahead" => {
            let _ = write!(output, "{}", state.ahead);
        }
        "behind" => {
            let _ = write!(output, "{}", state.behind);
        }
        "ahead_behind" => push_ahead_behind(output, state),
        "untracked" => {
            let _ = write!(output, "{}", status.untracked_count);
        }
        "unmerged" => {
            let _ = write!(output, "{}", status.unmerged_count);
        }
        "staged" => {
            let _ = write!(output, "{}", status.staged_changes.total());
        }
        "unstaged" => {
            let _ = write!(output, "{}", status.unstaged_changes.total());
        }
        "state" => push_state(output, state),
        _ => return false,
    }
    true
}

fn push_ahead_behind(output: &mut String, state: &RepoState) {
    if state.ahead == 0 && state.behind == 0 {
        return;
    }
    output.push(' ');
    if state.ahead > 0 {
        let _ = write!(output, "+{}", state.ahead);
    }
    if state.behind > 0 {
        let _ = write!(output, "-{}", state.behind);
    }
}

fn push_state(output: &mut String, state: &RepoState) {
    let mut markers = String::with_capacity(4);

    if state.untracked {
        markers.push('?');
    }
    if state.unmerged {
        markers.push('!');
    }
    if state.unstaged {
        markers.push('*');
    }
    if state.staged {
        markers.push('+');
    }

    output.push(' ');
    if markers.is_empty() {
        output.push_str("clean");
    } else {
        output.push_str(&markers);
    }
}

/// `commit,branch,upstream,ahead,behind,untracked,added,modified,deleted,renamed,copied`
///
/// The change columns add up both areas.
pub fn render_basic(context: &TemplateContext) -> String {
    let status = context.status;
    let changes = status.staged_changes.combined(&status.unstaged_changes);
    format!(
        "{},{},{},{},{},{},{},{},{},{},{}",
        context.state.commit,
        context.state.branch,
        status.upstream_name,
        status.ahead_count,
        status.behind_count,
        status.untracked_count,
        changes.added,
        changes.modified,
        changes.deleted,
        changes.renamed,
        changes.copied
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    status: &'a RepositoryStatus,
    merge_in_progress: bool,
}

pub fn render_json(context: &TemplateContext) -> Result<String> {
    let report = JsonReport {
        status: context.status,
        merge_in_progress: context.merge_in_progress,
    };
    Ok(serde_json::to_string(&report)?)
}
