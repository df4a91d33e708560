//! Common assertion helpers for test output validation
//!
//! Provides predicates and command builders for validating porcelain output.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;

/// The porcelain binary running in `dir`, isolated from the user's config
pub fn porcelain_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("porcelain").expect("porcelain binary is built");
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", "/nonexistent/porcelain-test-config")
        .env("NO_COLOR", "1")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("RUST_LOG");
    cmd
}

/// Stdout of a successful porcelain run
pub fn prompt_line(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("prompt line is UTF-8")
}

/// Stderr of a failed porcelain run
pub fn error_output(cmd: &mut Command) -> String {
    let output = cmd.assert().failure().get_output().stderr.clone();
    String::from_utf8(output).expect("error output is UTF-8")
}

/// Writes `content` as the default-location config below `config_home`
pub fn write_default_config(config_home: &Path, content: &str) -> std::io::Result<()> {
    let dir = config_home.join("porcelain");
    std::fs::create_dir_all(&dir)?;
    std::fs::write(dir.join("config.json"), content)
}

/// Creates a predicate that checks for the clean marker
pub fn is_clean() -> impl Predicate<str> {
    predicates::str::ends_with(" clean")
}

/// Creates a predicate that checks for config error messages
pub fn config_error() -> impl Predicate<str> {
    predicates::str::contains("Failed to parse config file")
        .or(predicates::str::contains("Failed to read config file"))
}
