//! Core functionality for the porcelain tool.
//!
//! This module provides the status parser and the pieces around it: repository
//! discovery, configuration, error handling and prompt rendering.

pub mod config;
pub mod dirs;
pub mod error;
pub mod git;
pub mod output;
pub mod parser;
pub mod record;
pub mod snapshot;
pub mod state;
pub mod templates;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{ParseError, PorcelainError, Result};

// === Status parsing ===
// Porcelain v2 parser producing a fresh RepositoryStatus per call
pub use parser::{ParseReport, StatusParser, DEFAULT_INITIAL_BRANCH};

// === Record tags ===
// Closed vocabularies for line prefixes, header keys and XY codes
pub use record::{ChangeKind, HeaderKey, RecordKind};

// === State ===
// Parsed repository state and the presenter's boolean summary
pub use state::{ChangeArea, RepoState, RepositoryStatus, INITIAL_COMMIT};

// === Git operations ===
// Repository discovery and status text retrieval
pub use git::{status_text, GitRepo, StatusProvider};

// === Snapshot ===
// Provider + parser + merge signal for one prompt render
pub use snapshot::Snapshot;

// === Configuration ===
pub use config::PromptConfig;

// === Rendering ===
pub use templates::{render_basic, render_json, render_template, TemplateContext, DEFAULT_TEMPLATE};

// === Output formatting ===
pub use output::{print_error, write_line};
