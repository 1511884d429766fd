//! # Git Module
//!
//! This module contains the git plumbing used by the pre-commit hook:
//! listing staged files, reading index content, detecting reverted files,
//! re-staging paths, and reading hook configuration from the repository
//! config store.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use git2::{Delta, DiffOptions, ErrorCode, Repository};
use tracing::{debug, trace};

/// Opens the repository enclosing the current directory, honoring the git
/// environment variables.
///
/// Honoring `GIT_INDEX_FILE` matters: for partial commits and `commit -a`
/// git prepares a temporary index and points hooks at it through that
/// variable. All index reads and writes have to address this index, not
/// `.git/index`, or the hook would reconcile content git is not about to
/// commit.
///
/// # Errors
///
/// Returns an error if the current directory is not inside a git
/// repository.
pub fn open_repository() -> Result<Repository> {
  Repository::open_from_env().with_context(|| "Failed to open git repository")
}

/// Lists the files staged for the next commit.
///
/// Only Added and Modified entries are of interest; deleted files have no
/// content to normalize. An unborn HEAD (first commit) is treated as an
/// empty tree, so every staged file shows up as Added.
pub fn staged_files(repo: &Repository) -> Result<Vec<PathBuf>> {
  let head_tree = match repo.head() {
    Ok(head) => Some(head.peel_to_tree().with_context(|| "Failed to resolve HEAD tree")?),
    Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => None,
    Err(e) => return Err(e).with_context(|| "Failed to resolve HEAD"),
  };

  let diff = repo
    .diff_tree_to_index(head_tree.as_ref(), None, None)
    .with_context(|| "Failed to diff HEAD against the index")?;

  let mut files = Vec::new();
  for delta in diff.deltas() {
    if matches!(delta.status(), Delta::Added | Delta::Modified)
      && let Some(path) = delta.new_file().path()
    {
      trace!("Staged file: {}", path.display());
      files.push(path.to_path_buf());
    }
  }

  Ok(files)
}

/// Lists the files changed by the HEAD commit.
///
/// As with [`staged_files`], only Added and Modified entries are reported;
/// a root commit is diffed against the empty tree.
pub fn committed_files(repo: &Repository) -> Result<Vec<PathBuf>> {
  let head = repo
    .head()
    .and_then(|head| head.peel_to_commit())
    .with_context(|| "Failed to resolve the HEAD commit")?;

  let parent_tree = if head.parent_count() > 0 {
    let parent = head.parent(0).with_context(|| "Failed to resolve the HEAD parent")?;
    Some(parent.tree().with_context(|| "Failed to resolve the HEAD parent tree")?)
  } else {
    None
  };
  let head_tree = head.tree().with_context(|| "Failed to resolve the HEAD tree")?;

  let diff = repo
    .diff_tree_to_tree(parent_tree.as_ref(), Some(&head_tree), None)
    .with_context(|| "Failed to diff the HEAD commit against its parent")?;

  let mut files = Vec::new();
  for delta in diff.deltas() {
    if matches!(delta.status(), Delta::Added | Delta::Modified)
      && let Some(path) = delta.new_file().path()
    {
      trace!("Committed file: {}", path.display());
      files.push(path.to_path_buf());
    }
  }

  Ok(files)
}

/// The commit time of HEAD, in seconds since the epoch.
pub fn head_commit_time(repo: &Repository) -> Result<i64> {
  let head = repo
    .head()
    .and_then(|head| head.peel_to_commit())
    .with_context(|| "Failed to resolve the HEAD commit")?;

  Ok(head.time().seconds())
}

/// Retrieves a file's index (staged) content, independent of any unstaged
/// on-disk edits.
///
/// Returns `None` when the path has no index entry.
pub fn staged_content(repo: &Repository, path: &Path) -> Result<Option<Vec<u8>>> {
  let index = repo.index().with_context(|| "Failed to open the index")?;

  let Some(entry) = index.get_path(path, 0) else {
    return Ok(None);
  };

  let blob = repo
    .find_blob(entry.id)
    .with_context(|| format!("Failed to read index blob for {}", path.display()))?;

  Ok(Some(blob.content().to_vec()))
}

/// Checks whether the staged changes for `path` revert the changes of the
/// HEAD commit, i.e. whether the index content equals the content at
/// `HEAD^`.
///
/// Any failure (for example a missing `HEAD^` commit) means the commit
/// should go ahead, so the answer is then `false`.
pub fn staged_changes_revert_head(repo: &Repository, path: &Path) -> bool {
  fn check(repo: &Repository, path: &Path) -> Result<bool, git2::Error> {
    let parent = repo.revparse_single("HEAD^")?;
    let parent_tree = parent.peel_to_tree()?;

    let mut opts = DiffOptions::new();
    opts.pathspec(path);
    opts.disable_pathspec_match(true);

    let diff = repo.diff_tree_to_index(Some(&parent_tree), None, Some(&mut opts))?;
    Ok(diff.deltas().len() == 0)
  }

  match check(repo, path) {
    Ok(reverted) => reverted,
    Err(e) => {
      trace!("Revert check for {} inconclusive: {}", path.display(), e);
      false
    }
  }
}

/// Stages a file, recording its current on-disk content in the index.
pub fn stage_file(repo: &Repository, path: &Path) -> Result<()> {
  let mut index = repo.index().with_context(|| "Failed to open the index")?;
  index
    .add_path(path)
    .with_context(|| format!("Failed to stage {}", path.display()))?;
  index.write().with_context(|| "Failed to write the index")?;
  debug!("Staged {}", path.display());
  Ok(())
}

/// Reads a string value from the repository configuration.
///
/// Returns `None` when the key is not set.
pub fn config_string(repo: &Repository, key: &str) -> Result<Option<String>> {
  let config = repo
    .config()
    .and_then(|mut c| c.snapshot())
    .with_context(|| "Failed to read git configuration")?;

  match config.get_string(key) {
    Ok(value) => Ok(Some(value)),
    Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
    Err(e) => Err(e).with_context(|| format!("Failed to read config key {key}")),
  }
}

/// Reads a boolean value from the repository configuration.
///
/// Returns `None` when the key is not set; an unparsable value is an
/// error.
pub fn config_bool(repo: &Repository, key: &str) -> Result<Option<bool>> {
  let config = repo
    .config()
    .and_then(|mut c| c.snapshot())
    .with_context(|| "Failed to read git configuration")?;

  match config.get_bool(key) {
    Ok(value) => Ok(Some(value)),
    Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
    Err(e) => Err(e).with_context(|| format!("Failed to read config key {key}")),
  }
}

/// Reads all values of a repeatable configuration key, in definition order.
pub fn config_multivar(repo: &Repository, key: &str) -> Result<Vec<String>> {
  let config = repo
    .config()
    .and_then(|mut c| c.snapshot())
    .with_context(|| "Failed to read git configuration")?;

  let mut values = Vec::new();
  match config.multivar(key, None) {
    Ok(entries) => {
      entries
        .for_each(|entry| {
          if let Some(value) = entry.value() {
            values.push(value.to_string());
          }
        })
        .with_context(|| format!("Failed to read config key {key}"))?;
    }
    Err(e) if e.code() == ErrorCode::NotFound => {}
    Err(e) => return Err(e).with_context(|| format!("Failed to read config key {key}")),
  }

  Ok(values)
}
