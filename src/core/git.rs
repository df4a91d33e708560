//! Git repository discovery and status text retrieval.
//!
//! This module provides the [`StatusProvider`] seam between the parser and git
//! itself, and [`GitRepo`], the implementation backed by `git2` for discovery and
//! the `git` binary for the porcelain report.
//!
//! # Public API
//! - [`StatusProvider`]: Source of raw status text and repository signals
//! - [`GitRepo`]: Provider for a repository discovered from a path
//! - [`status_text`]: One-shot helper returning the status text for a path
//!
//! # Key Features
//! - **Silent outside repositories**: Discovery failures, bare repositories and
//!   paths inside the git directory map to [`PorcelainError::NotARepository`]
//! - **Lock free**: git runs with `GIT_OPTIONAL_LOCKS=0` so a prompt never
//!   contends for the index lock
//! - **Merge detection**: `MERGE_HEAD` is reported through `git2`'s repository
//!   state

use crate::core::{
    error::{PorcelainError, Result},
    parser::DEFAULT_INITIAL_BRANCH,
};
use git2::{Repository, RepositoryState};
use std::path::Path;
use std::process::Command;

/// Arguments for the machine-readable status report with branch headers
pub const STATUS_ARGS: [&str; 3] = ["status", "--porcelain=v2", "--branch"];

/// Where the parser gets its input from
pub trait StatusProvider {
    /// Raw `git status --porcelain=v2 --branch` output
    fn status_text(&self) -> Result<String>;

    /// A merge is in progress (`MERGE_HEAD` exists)
    fn merge_in_progress(&self) -> bool;

    /// Branch name a repository without commits starts on
    fn initial_branch(&self) -> String;
}

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|e| {
            log::debug!("no repository at {}: {e}", path.display());
            PorcelainError::NotARepository
        })?;

        if repo.is_bare() {
            log::debug!("{} is a bare repository", repo.path().display());
            return Err(PorcelainError::NotARepository);
        }

        if is_inside_git_dir(path, repo.path()) {
            log::debug!("{} is inside the git directory", path.display());
            return Err(PorcelainError::NotARepository);
        }

        Ok(GitRepo { repo })
    }

    /// Run git in the repository's working directory and return its stdout
    fn run_git(&self, args: &[&str]) -> Result<String> {
        let workdir = self.repo.workdir().ok_or(PorcelainError::NotARepository)?;

        let mut cmd = Command::new("git");
        cmd.args(args)
            .current_dir(workdir)
            .env("GIT_OPTIONAL_LOCKS", "0");
        log::debug!("running git {:?} in {}", args, workdir.display());

        let output = cmd.output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if stderr.contains("not a git repository") {
                return Err(PorcelainError::NotARepository);
            }
            return Err(PorcelainError::git_command_failed(stderr.trim()));
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}

/// `path` is the git directory itself or somewhere below it
fn is_inside_git_dir(path: &Path, git_dir: &Path) -> bool {
    match (path.canonicalize(), git_dir.canonicalize()) {
        (Ok(path), Ok(git_dir)) => path.starts_with(git_dir),
        _ => false,
    }
}

impl StatusProvider for GitRepo {
    fn status_text(&self) -> Result<String> {
        self.run_git(&STATUS_ARGS)
    }

    fn merge_in_progress(&self) -> bool {
        matches!(self.repo.state(), RepositoryState::Merge)
    }

    fn initial_branch(&self) -> String {
        self.repo
            .config()
            .and_then(|config| config.get_string("init.defaultBranch"))
            .unwrap_or_else(|_| DEFAULT_INITIAL_BRANCH.to_string())
    }
}

/// Status text for the repository containing `path`
pub fn status_text<P: AsRef<Path>>(path: P) -> Result<String> {
    GitRepo::open(path)?.status_text()
}
