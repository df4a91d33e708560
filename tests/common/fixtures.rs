//! Test data generation utilities and predefined scenarios
//!
//! Provides functions for creating repositories with specific file states
//! and configurations to test various git scenarios consistently.

#![allow(dead_code)]

use super::repository::*;
use porcelain::core::error::Result;

/// Status report covering every record type, as git prints it
pub const FULL_STATUS: &str = "\
# branch.oid 51c9c58e2175b768137c1e38865f394c76a7d49d
# branch.head master
# branch.upstream origin/master
# branch.ab +1 -10
1 .M N... 100644 100644 100644 3e2ceb914cf9be46bf235432781840f4145363fd 3e2ceb914cf9be46bf235432781840f4145363fd Gopkg.lock
1 .M N... 100644 100644 100644 cecb683e6e626bcba909ddd36d3357d49f0cfd09 cecb683e6e626bcba909ddd36d3357d49f0cfd09 Gopkg.toml
1 .M N... 100644 100644 100644 aea984b7df090ce3a5826a854f3e5364cd8f2ccd aea984b7df090ce3a5826a854f3e5364cd8f2ccd porcelain.go
1 .D N... 100644 100644 000000 6d9532ba55b84ec4faf214f9cdb9ce70ec8f4f5b 6d9532ba55b84ec4faf214f9cdb9ce70ec8f4f5b porcelain_test.go
2 R. N... 100644 100644 100644 44d0a25072ee3706a8015bef72bdd2c4ab6da76d 44d0a25072ee3706a8015bef72bdd2c4ab6da76d R100 hm.rb\thw.rb
u UU N... 100644 100644 100644 100644 ac51efdc3df4f4fd328d1a02ad05331d8e2c9111 36c06c8752c78d2aff89571132f3bf7841a7b5c3 e85207e04dfdd5eb0a1e9febbc67fd837c44a1cd hw.rb
? _porcelain_test.go
? git.go
? git_test.go
? goreleaser.yml
? vendor/
";

/// Scenario: committed file modified in the work tree, a second one staged,
/// and one untracked file
pub fn create_mixed_changes_repo() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;

    create_file(&repo.path, "staged.txt", "staged\n")?;
    git_add(&repo.path, "staged.txt")?;
    create_file(&repo.path, "initial.txt", "changed content\n")?;
    create_file(&repo.path, "untracked.txt", "untracked\n")?;

    Ok(repo)
}

/// Scenario: `main` and `other` both change "conflict.txt" and `other` is merged
/// into `main`, leaving one conflicted entry and MERGE_HEAD behind
pub fn create_conflicted_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "conflict.txt", "base\n")?;
    git_add(&repo.path, "conflict.txt")?;
    git_commit(&repo.path, "Base")?;

    git(&repo.path, &["checkout", "-b", "other"])?;
    create_file(&repo.path, "conflict.txt", "other side\n")?;
    git_commit_all(&repo, "Other side")?;

    git(&repo.path, &["checkout", "main"])?;
    create_file(&repo.path, "conflict.txt", "main side\n")?;
    git_commit_all(&repo, "Main side")?;

    git(&repo.path, &["merge", "other"])?;

    Ok(repo)
}

fn git_commit_all(repo: &TestRepo, message: &str) -> Result<()> {
    git(&repo.path, &["commit", "-am", message])?;
    Ok(())
}
