//! # Diff Module
//!
//! Renders a line diff between original and normalized content. Used by the
//! hook's check and warn actions to show what a normalization pass would
//! change without mutating anything.

use std::path::Path;

use similar::{ChangeTag, TextDiff};

/// Formats a diff between the original and normalized content.
///
/// The output carries a per-file header line followed by unified-style
/// `+`/`-`/` ` prefixed lines.
pub fn format_diff(path: &Path, original: &str, normalized: &str) -> String {
  let diff = TextDiff::from_lines(original, normalized);

  let mut output = format!("Diff for {}:\n", path.display());
  for change in diff.iter_all_changes() {
    let sign = match change.tag() {
      ChangeTag::Delete => "-",
      ChangeTag::Insert => "+",
      ChangeTag::Equal => " ",
    };
    output.push_str(sign);
    output.push_str(change.value());
  }

  output
}

/// Prints a diff between original and normalized content to stderr.
pub fn print_diff(path: &Path, original: &str, normalized: &str) {
  eprint!("{}", format_diff(path, original, normalized));
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_format_diff_marks_changed_lines() {
    let original = "// Copyright 2013 deso\ncode\n";
    let normalized = "// Copyright 2013,2015 deso\ncode\n";
    let diff = format_diff(Path::new("test.c"), original, normalized);

    assert!(diff.starts_with("Diff for test.c:\n"));
    assert!(diff.contains("-// Copyright 2013 deso\n"));
    assert!(diff.contains("+// Copyright 2013,2015 deso\n"));
    assert!(diff.contains(" code\n"));
  }
}
