// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{GitError, GuardianError, Result};
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with additional functionality.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            GuardianError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository from a path.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GuardianError::Git(GitError::NotARepository)
            } else {
                GuardianError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        Ok(Self { inner: repo })
    }

    /// Get the git directory path (.git).
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }

    /// Get a commit by reference (SHA, branch name, etc.).
    pub fn get_commit(&self, reference: &str) -> Result<git2::Commit<'_>> {
        let obj = self.inner.revparse_single(reference).map_err(|e| {
            GuardianError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        let commit = obj.peel_to_commit().map_err(|e| {
            GuardianError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        Ok(commit)
    }

    /// Get commits in a range, newest first. A bare reference yields one commit.
    pub fn get_commits_in_range(&self, range: &str) -> Result<Vec<(Oid, String)>> {
        let Some((from, to)) = range.split_once("..") else {
            let commit = self.get_commit(range)?;
            return Ok(vec![(
                commit.id(),
                commit.message().unwrap_or("").to_string(),
            )]);
        };

        let mut revwalk = self.inner.revwalk().map_err(|e| revwalk_error("revwalk", e))?;

        let to = self.get_commit(if to.is_empty() { "HEAD" } else { to })?;
        revwalk
            .push(to.id())
            .map_err(|e| revwalk_error("revwalk.push", e))?;

        if !from.is_empty() {
            let from = self.get_commit(from)?;
            revwalk
                .hide(from.id())
                .map_err(|e| revwalk_error("revwalk.hide", e))?;
        }

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result.map_err(|e| revwalk_error("revwalk", e))?;
            let commit = self.inner.find_commit(oid).map_err(|e| {
                GuardianError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", oid, e.message()),
                })
            })?;
            let message = commit.message().unwrap_or("").to_string();
            commits.push((oid, message));
        }

        Ok(commits)
    }
}

fn revwalk_error(command: &str, e: git2::Error) -> GuardianError {
    GuardianError::Git(GitError::CommandFailed {
        command: command.to_string(),
        message: e.message().to_string(),
    })
}

/// Open the repository from the current directory.
pub fn open_repo() -> Result<Repository> {
    Repository::open_current()
}

/// Get commits in a range.
pub fn get_commit_range(range: &str) -> Result<Vec<(String, String)>> {
    let repo = Repository::open_current()?;
    let commits = repo.get_commits_in_range(range)?;
    Ok(commits
        .into_iter()
        .map(|(oid, msg)| (oid.to_string(), msg))
        .collect())
}
