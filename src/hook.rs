//! # Hook Module
//!
//! This module implements the pre-commit reconciliation procedure. For every
//! staged file it normalizes the index content and the working-tree content
//! independently: the normalized index content is what gets committed, while
//! the working copy keeps its own unstaged edits with a separately
//! normalized header. Hook behavior is configured through the repository's
//! git config under the `copyright` section.

use std::fmt;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use git2::Repository;
use owo_colors::{OwoColorize, Stream};
use tracing::debug;

use crate::normalize::{Normalizer, Policy};
use crate::{diff, git};

/// The git config section holding the hook configuration.
pub const CONFIG_SECTION: &str = "copyright";

const KEY_ACTION: &str = "copyright.action";
const KEY_POLICY: &str = "copyright.policy";
const KEY_REQUIRED: &str = "copyright.copyright-required";
const KEY_IGNORE: &str = "copyright.ignore";

/// Error type for an unknown action name.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unsupported action: \"{0}\" (supported actions are: fixup, check, and warn)")]
pub struct UnsupportedActionError(pub String);

/// What to do when a staged file's copyright years are not normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Action {
  /// Fix up any discrepancies automatically.
  #[default]
  Fixup,

  /// Report files whose years are not normalized and abort the commit.
  Check,

  /// Report files whose years are not normalized, then fix them up anyway.
  Warn,
}

impl FromStr for Action {
  type Err = UnsupportedActionError;

  fn from_str(string: &str) -> Result<Self, Self::Err> {
    match string {
      "fixup" => Ok(Self::Fixup),
      "check" => Ok(Self::Check),
      "warn" => Ok(Self::Warn),
      other => Err(UnsupportedActionError(other.to_string())),
    }
  }
}

impl fmt::Display for Action {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Fixup => write!(f, "fixup"),
      Self::Check => write!(f, "check"),
      Self::Warn => write!(f, "warn"),
    }
  }
}

/// Per-file failures that carry their own user-facing message.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
  /// Check action found a file whose years need normalization.
  #[error("copyright years in {} are not properly normalized", .path.display())]
  NotNormalized { path: PathBuf },

  /// A required copyright header is missing.
  #[error("no copyright header found in {}", .path.display())]
  MissingHeader { path: PathBuf },
}

/// Hook configuration, read from the repository's git config.
#[derive(Debug)]
pub struct HookConfig {
  /// Action on unnormalized staged content.
  pub action: Action,

  /// Rewrite policy for all normalization passes.
  pub policy: Policy,

  /// Whether every processed file must carry a copyright header.
  pub required: bool,

  /// Patterns exempting matched header text from rewriting.
  pub ignore_patterns: Vec<String>,
}

impl HookConfig {
  /// Reads the hook configuration from a repository.
  ///
  /// Absent keys fall back to their defaults: fixup action, plain policy,
  /// header required.
  ///
  /// # Errors
  ///
  /// Returns an error when a configured action or policy name is unknown,
  /// or when the config store cannot be read.
  pub fn from_repository(repo: &Repository) -> Result<Self> {
    let action = match git::config_string(repo, KEY_ACTION)? {
      Some(value) => value.parse::<Action>()?,
      None => Action::default(),
    };

    let policy = match git::config_string(repo, KEY_POLICY)? {
      Some(value) => value.parse::<Policy>()?,
      None => Policy::default(),
    };

    let required = git::config_bool(repo, KEY_REQUIRED)?.unwrap_or(true);
    let ignore_patterns = git::config_multivar(repo, KEY_IGNORE)?;

    Ok(Self {
      action,
      policy,
      required,
      ignore_patterns,
    })
  }
}

/// The reconciliation outcome for a single staged file.
enum FileOutcome {
  /// The file was not text and was left completely alone.
  Skipped,

  /// The file was processed; `headers_found` counts the rewritten (or
  /// already-canonical) headers in its staged content.
  Processed { headers_found: usize },
}

/// Runs the pre-commit hook against a repository.
///
/// `year` is the year the commit's copyright annotations are extended
/// with, normally the current year.
///
/// # Errors
///
/// Returns an error when the check action finds unnormalized content, when
/// a required header is missing, or when any per-file processing step
/// fails; the commit must then be aborted.
pub fn run(repo: &Repository, year: i32) -> Result<()> {
  let config = HookConfig::from_repository(repo)?;
  let workdir = repo
    .workdir()
    .with_context(|| "Repository has no working tree")?
    .to_path_buf();

  let normalizer =
    Normalizer::new(config.policy, Some(year)).with_ignore_patterns(config.ignore_patterns.clone());

  for path in git::staged_files(repo)? {
    // When amending, all changes to a file may have been reverted. Such a
    // file was effectively not changed by this commit, so its header must
    // not be touched either.
    if git::staged_changes_revert_head(repo, &path) {
      debug!("Skipping: {} (staged changes revert HEAD)", path.display());
      continue;
    }

    let outcome = match reconcile_file(repo, &workdir, &path, &normalizer, config.action) {
      Ok(outcome) => outcome,
      // HookError carries its own user-facing message; everything else
      // gets the offending path attached.
      Err(e) => {
        return Err(match e.downcast::<HookError>() {
          Ok(hook_error) => hook_error.into(),
          Err(other) => other.context(format!("Failed to process {}", path.display())),
        });
      }
    };

    if let FileOutcome::Processed { headers_found } = outcome
      && config.required
      && headers_found == 0
    {
      return Err(HookError::MissingHeader { path }.into());
    }
  }

  Ok(())
}

/// Reconciles a single staged file.
///
/// The staged (index) content is normalized and, when it changed, written
/// to the real path and re-staged; the original working-tree content is
/// then restored, normalized independently, so that unstaged edits
/// survive with their own header. The working content is backed up into a
/// scoped temporary file beforehand, which is removed on every exit path.
fn reconcile_file(
  repo: &Repository,
  workdir: &Path,
  path: &Path,
  normalizer: &Normalizer,
  action: Action,
) -> Result<FileOutcome> {
  let Some(staged_bytes) = git::staged_content(repo, path)? else {
    debug!("Skipping: {} (no index entry)", path.display());
    return Ok(FileOutcome::Skipped);
  };

  // Only text files are handled; binary content is silently skipped.
  let Ok(staged) = String::from_utf8(staged_bytes) else {
    debug!("Skipping: {} (binary content)", path.display());
    return Ok(FileOutcome::Skipped);
  };

  let (normalized, headers_found) = normalizer.normalize(&staged)?;

  // In most commits normalization changes nothing; the found count is
  // still reported for the required-header check, but no I/O happens.
  if headers_found == 0 || normalized == staged {
    return Ok(FileOutcome::Processed { headers_found });
  }

  if action == Action::Check || action == Action::Warn {
    let message = format!("Copyright years in {} are not properly normalized", path.display());
    eprintln!("{}", message.if_supports_color(Stream::Stderr, |m| m.yellow()));
    diff::print_diff(path, &staged, &normalized);

    if action == Action::Check {
      return Err(HookError::NotNormalized { path: path.to_path_buf() }.into());
    }
  }

  let file_path = workdir.join(path);
  let working_bytes =
    std::fs::read(&file_path).with_context(|| format!("Failed to read file: {}", file_path.display()))?;

  let Ok(working) = String::from_utf8(working_bytes) else {
    debug!("Skipping: {} (binary working copy)", path.display());
    return Ok(FileOutcome::Skipped);
  };

  // Back up the working copy outside the repository before mutating the
  // real path. An in-memory copy would do, but having the bytes on disk
  // means a crash mid-reconciliation cannot lose unstaged edits.
  let mut backup = tempfile::Builder::new()
    .prefix(&backup_prefix(path))
    .tempfile()
    .with_context(|| "Failed to create backup file")?;
  backup
    .write_all(working.as_bytes())
    .with_context(|| "Failed to write backup file")?;

  // First write: the normalized index content, staged for the commit.
  std::fs::write(&file_path, &normalized)
    .with_context(|| format!("Failed to write file: {}", file_path.display()))?;
  git::stage_file(repo, path)?;

  // Second write: the original working content, normalized independently,
  // which is what remains on disk (unstaged) after the commit.
  let (working_normalized, _) = normalizer.normalize(&working)?;
  std::fs::write(&file_path, working_normalized)
    .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

  Ok(FileOutcome::Processed { headers_found })
}

fn backup_prefix(path: &Path) -> String {
  path
    .file_name()
    .map_or_else(|| "yearstamp".to_string(), |name| name.to_string_lossy().into_owned())
}
