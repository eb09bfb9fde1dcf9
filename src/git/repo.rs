// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Reading commit messages from a repository.

use crate::error::{CclintError, GitError, Result};
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            CclintError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open the repository containing `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                CclintError::Git(GitError::NotARepository)
            } else {
                CclintError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;
        tracing::debug!("Opened repository at {:?}", repo.path());
        Ok(Self { inner: repo })
    }

    /// Get a commit by reference (SHA, branch name, etc.).
    pub fn get_commit(&self, reference: &str) -> Result<git2::Commit<'_>> {
        let obj = self.inner.revparse_single(reference).map_err(|e| {
            CclintError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        obj.peel_to_commit().map_err(|e| {
            CclintError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })
    }

    /// Get commits for a single reference or an `a..b` range, newest first.
    pub fn get_commits_in_range(&self, range: &str) -> Result<Vec<(Oid, String)>> {
        let Some((from, to)) = range.split_once("..") else {
            let commit = self.get_commit(range)?;
            return Ok(vec![(commit.id(), message_text(&commit))]);
        };

        let mut revwalk = self.inner.revwalk().map_err(|e| walk_error("revwalk", e))?;
        let to = self.get_commit(if to.is_empty() { "HEAD" } else { to })?;
        revwalk
            .push(to.id())
            .map_err(|e| walk_error("revwalk.push", e))?;
        if !from.is_empty() {
            let from = self.get_commit(from)?;
            revwalk
                .hide(from.id())
                .map_err(|e| walk_error("revwalk.hide", e))?;
        }

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result.map_err(|e| walk_error("revwalk", e))?;
            let commit = self.inner.find_commit(oid).map_err(|e| {
                CclintError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", oid, e.message()),
                })
            })?;
            commits.push((oid, message_text(&commit)));
        }

        tracing::debug!("Found {} commits in {}", commits.len(), range);
        Ok(commits)
    }
}

/// Commit message text, with invalid UTF-8 sequences replaced.
fn message_text(commit: &git2::Commit<'_>) -> String {
    let bytes = commit.message_bytes();
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            tracing::warn!("Commit {} has a message that is not valid UTF-8", commit.id());
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}

fn walk_error(command: &str, e: git2::Error) -> CclintError {
    CclintError::Git(GitError::CommandFailed {
        command: command.to_string(),
        message: e.message().to_string(),
    })
}

/// Get `(sha, message)` pairs for a reference or range in the current repository.
pub fn get_commit_range(range: &str) -> Result<Vec<(String, String)>> {
    let repo = Repository::open_current()?;
    let commits = repo.get_commits_in_range(range)?;
    Ok(commits
        .into_iter()
        .map(|(oid, msg)| (oid.to_string(), msg))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn commit(repo: &Git2Repo, message: &str) -> Oid {
        let sig = git2::Signature::now("Test", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parents: Vec<git2::Commit<'_>> = repo
            .head()
            .ok()
            .and_then(|h| h.peel_to_commit().ok())
            .into_iter()
            .collect();
        let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
            .unwrap()
    }

    fn create_test_repo(messages: &[&str]) -> (TempDir, Repository) {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        for message in messages {
            commit(&repo, message);
        }
        let wrapper = Repository::open(dir.path()).unwrap();
        (dir, wrapper)
    }

    #[test]
    fn test_not_a_repo() {
        let dir = TempDir::new().unwrap();
        let result = Repository::open(dir.path());
        assert!(matches!(
            result,
            Err(CclintError::Git(GitError::NotARepository))
        ));
    }

    #[test]
    fn test_invalid_reference() {
        let (_dir, repo) = create_test_repo(&["feat: first"]);
        assert!(matches!(
            repo.get_commits_in_range("no-such-branch"),
            Err(CclintError::Git(GitError::InvalidReference { .. }))
        ));
    }

    #[test]
    fn test_non_utf8_message_keeps_header() {
        let dir = TempDir::new().unwrap();
        let git = Git2Repo::init(dir.path()).unwrap();
        let tree_id = git.index().unwrap().write_tree().unwrap();

        let mut raw = format!(
            "tree {}\nauthor Test <test@example.com> 0 +0000\ncommitter Test <test@example.com> 0 +0000\n\n",
            tree_id
        )
        .into_bytes();
        raw.extend_from_slice(b"feat(cli): add init command\n\nlatin-1 caf\xe9 \xff\n");
        let oid = git.odb().unwrap().write(git2::ObjectType::Commit, &raw).unwrap();
        git.set_head_detached(oid).unwrap();

        let repo = Repository::open(dir.path()).unwrap();
        let commits = repo.get_commits_in_range("HEAD").unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].0, oid);
        assert!(commits[0].1.starts_with("feat(cli): add init command\n"));

        let linter =
            crate::rules::Linter::with_builtin_rules(&crate::config::conventional_rules()).unwrap();
        let result = linter.lint(&commits[0].1);
        assert!(result.is_valid(), "{:?}", result.outcomes);
    }

    #[test]
    fn test_get_commits_in_range() {
        let (_dir, repo) = create_test_repo(&["feat: first", "fix: second", "docs: third"]);
        let commits = repo.get_commits_in_range("HEAD~2..HEAD").unwrap();
        let messages: Vec<&str> = commits.iter().map(|(_, m)| m.as_str()).collect();
        assert_eq!(messages, vec!["docs: third", "fix: second"]);

        let single = repo.get_commits_in_range("HEAD~2").unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].1, "feat: first");
    }
}
