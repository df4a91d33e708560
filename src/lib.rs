//! Porcelain - a fast git status line for shell prompts.
//!
//! This library parses the output of `git status --porcelain=v2 --branch` into a
//! structured [`RepositoryStatus`] and renders it as a single line of text. It
//! is built to run once per prompt render and to stay silent outside a
//! repository.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - The status parser and its report
//! - Repository state records and derived predicates
//! - Git repository discovery and status retrieval
//! - Error handling and result types
//! - Prompt templates
//!
//! ```
//! use porcelain::StatusParser;
//!
//! let report = StatusParser::default().parse("# branch.head main\n# branch.ab +2 -0\n? notes.txt\n");
//! assert_eq!(report.status.branch_name, "main");
//! assert_eq!(report.status.ahead_count, 2);
//! assert_eq!(report.status.untracked_count, 1);
//! assert!(report.last_error().is_none());
//! ```

pub mod core;

// Re-export the core public API for external users
pub use crate::core::{
    // Rendering
    render_basic,
    render_json,
    render_template,
    // Git operations
    status_text,

    ChangeArea,
    ChangeKind,
    GitRepo,
    HeaderKey,

    // Error handling
    ParseError,
    // Parsing
    ParseReport,
    PorcelainError,
    // Configuration
    PromptConfig,
    RecordKind,
    RepoState,
    // State
    RepositoryStatus,
    Result,

    Snapshot,
    StatusParser,
    StatusProvider,

    TemplateContext,
    DEFAULT_INITIAL_BRANCH,
    DEFAULT_TEMPLATE,
    INITIAL_COMMIT,
};
