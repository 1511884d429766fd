//! # Normalize Module
//!
//! This module rewrites the copyright headers found in file content into
//! canonical form: year lists are parsed, optionally extended with a new
//! year, merged, and spliced back. Two rewrite policies exist; they share
//! the locate/filter/replace loop and differ only in how the suffix text is
//! treated.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::debug;

use crate::header::HeaderPattern;
use crate::range::{Range, RangeError};
use crate::ranges::{normalize_ranges, parse_ranges, stringify_ranges};

/// Error type for an unknown policy name.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unsupported policy: \"{0}\" (supported policies are: plain and pad)")]
pub struct UnsupportedPolicyError(pub String);

/// The rewrite policy applied to each matched header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Policy {
  /// Replace the year list and leave the surrounding text untouched.
  #[default]
  Plain,

  /// Replace the year list and adjust whitespace in the trailing text so
  /// that fixed-width header framing keeps its alignment.
  #[value(name = "pad")]
  Padded,
}

impl FromStr for Policy {
  type Err = UnsupportedPolicyError;

  fn from_str(string: &str) -> Result<Self, Self::Err> {
    match string {
      "plain" => Ok(Self::Plain),
      "pad" => Ok(Self::Padded),
      other => Err(UnsupportedPolicyError(other.to_string())),
    }
  }
}

impl fmt::Display for Policy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Plain => write!(f, "plain"),
      Self::Padded => write!(f, "pad"),
    }
  }
}

/// Rewrites copyright headers in text content.
///
/// The normalizer repeatedly locates headers through [`HeaderPattern`],
/// skips occurrences matched by an ignore pattern, and rewrites each
/// remaining match's year list via the range machinery.
pub struct Normalizer {
  policy: Policy,
  extend_year: Option<i32>,
  ignore_patterns: Vec<String>,
}

impl Normalizer {
  /// Creates a normalizer for the given policy.
  ///
  /// When `extend_year` is set, every rewritten year list is extended with
  /// that year before merging; when absent, existing years are only
  /// normalized.
  pub const fn new(policy: Policy, extend_year: Option<i32>) -> Self {
    Self {
      policy,
      extend_year,
      ignore_patterns: Vec::new(),
    }
  }

  /// Sets the ignore patterns.
  ///
  /// A header occurrence is skipped, untouched and uncounted, when its
  /// exact matched text contains any of the patterns.
  pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
    self.ignore_patterns = patterns;
    self
  }

  /// Normalizes all copyright headers in `content`.
  ///
  /// Returns the rewritten content and the number of rewritten headers.
  /// Callers should only persist the content when the count is positive
  /// and the content actually differs: a header can be found yet already
  /// be in canonical form.
  ///
  /// # Errors
  ///
  /// Returns a [`RangeError`] when a matched year list is malformed. A
  /// broken header aborts the whole normalization rather than being
  /// silently half-fixed.
  pub fn normalize(&self, content: &str) -> Result<(String, usize), RangeError> {
    let mut output = String::with_capacity(content.len());
    let mut cursor = 0;
    let mut found = 0;

    while let Some(matched) = HeaderPattern::find_at(content, cursor) {
      let matched_text = &content[matched.start()..matched.end()];

      if self.is_ignored(matched_text) {
        output.push_str(&content[cursor..matched.end()]);
        cursor = matched.end();
        continue;
      }

      let (new_years, new_suffix) = self.rewrite(matched.years, matched.suffix)?;

      output.push_str(&content[cursor..matched.start()]);
      output.push_str(matched.prefix);
      output.push_str(&new_years);
      output.push_str(&new_suffix);

      cursor = matched.end();
      found += 1;
    }

    output.push_str(&content[cursor..]);
    Ok((output, found))
  }

  /// Rewrites a single match's year list and suffix.
  fn rewrite(&self, years: &str, suffix: &str) -> Result<(String, String), RangeError> {
    let mut ranges = parse_ranges(years)?;
    if let Some(year) = self.extend_year {
      ranges.push(Range::single(year));
    }
    normalize_ranges(&mut ranges);
    let new_years = stringify_ranges(&ranges);

    let new_suffix = match self.policy {
      Policy::Plain => suffix.to_string(),
      Policy::Padded => repad_suffix(suffix, new_years.len() as isize - years.len() as isize),
    };

    Ok((new_years, new_suffix))
  }

  fn is_ignored(&self, matched_text: &str) -> bool {
    self
      .ignore_patterns
      .iter()
      .any(|pattern| matched_text.contains(pattern.as_str()))
  }
}

/// Adjusts suffix whitespace to compensate for a year list length change.
///
/// When the year text grew, single spaces are reclaimed by collapsing
/// double-space occurrences left to right until the delta is covered or no
/// slack remains; insufficient slack is not an error, alignment is then
/// preserved as well as possible. When the year text shrank, the missing
/// characters are inserted as spaces at the first double-space occurrence;
/// without one, no padding is inserted. Only literal double-space runs count
/// as reclaimable slack, headers padded with tabs keep their alignment
/// unadjusted.
fn repad_suffix(suffix: &str, delta: isize) -> String {
  if delta > 0 {
    let mut removals = delta as usize;
    let mut output = String::with_capacity(suffix.len());
    let mut chars = suffix.chars().peekable();

    while let Some(c) = chars.next() {
      if c == ' ' && removals > 0 && chars.peek() == Some(&' ') {
        chars.next();
        removals -= 1;
      }
      output.push(c);
    }
    output
  } else if delta < 0 {
    match suffix.find("  ") {
      Some(position) => {
        let mut output = String::with_capacity(suffix.len() + (-delta) as usize);
        output.push_str(&suffix[..position]);
        output.extend(std::iter::repeat_n(' ', (-delta) as usize));
        output.push_str(&suffix[position..]);
        output
      }
      None => suffix.to_string(),
    }
  } else {
    suffix.to_string()
  }
}

/// Normalizes the copyright headers of each file in place.
///
/// A file is only rewritten when at least one header was found and the
/// normalized content differs from what is on disk. Files whose content is
/// not valid UTF-8 are skipped silently; the tool only works on text.
///
/// # Errors
///
/// Returns an error if a file cannot be read or written, or if one of its
/// headers carries a malformed year list.
pub fn normalize_files<P: AsRef<Path>>(paths: &[P], normalizer: &Normalizer) -> Result<()> {
  for path in paths {
    let path = path.as_ref();
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

    let Ok(content) = String::from_utf8(bytes) else {
      debug!("Skipping: {} (not valid UTF-8)", path.display());
      continue;
    };

    let (normalized, found) = normalizer
      .normalize(&content)
      .with_context(|| format!("Failed to normalize {}", path.display()))?;

    if found > 0 && normalized != content {
      std::fs::write(path, normalized).with_context(|| format!("Failed to write file: {}", path.display()))?;
      debug!("Normalized {} header(s) in {}", found, path.display());
    }
  }

  Ok(())
}
