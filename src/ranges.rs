//! # Ranges Module
//!
//! Parsing, normalization and stringification of sequences of [`Range`]
//! values, i.e. the comma-separated year list found in a copyright header.

use crate::range::{Range, RangeError};

/// The character separating two ranges in a year list.
pub const RANGES_SEPARATOR: char = ',';

/// Parses a year list string into a sequence of ranges.
///
/// Elements are split on [`RANGES_SEPARATOR`] and trimmed; empty elements
/// are dropped, so a trailing separator (`"2011-2012,"`) is tolerated.
///
/// # Errors
///
/// Returns the first element's [`RangeError`] if any element is malformed.
pub fn parse_ranges(list: &str) -> Result<Vec<Range>, RangeError> {
  list
    .split(RANGES_SEPARATOR)
    .map(str::trim)
    .filter(|element| !element.is_empty())
    .map(Range::parse)
    .collect()
}

/// Normalizes a sequence of ranges in place.
///
/// The sequence is sorted ascending and then merged so that afterwards no
/// adjacent pair is mergeable: for every adjacent pair, the later range's
/// first year is neither contained in nor exactly one greater than the
/// earlier range's last year.
pub fn normalize_ranges(ranges: &mut Vec<Range>) {
  // The merge scan requires a sorted sequence; otherwise multiple passes
  // would be needed.
  ranges.sort_unstable();

  // Scan from back to front because elements are removed mid-sequence.
  let mut index = ranges.len().saturating_sub(1);

  while index > 0 {
    let earlier = ranges[index - 1];
    let later = ranges[index];

    debug_assert!(earlier <= later, "merge scan requires sorted input");

    if earlier.contains(later.first()) || earlier.extended_by(later.first()) {
      ranges.remove(index);
      ranges[index - 1] = earlier.merge(&later);

      // A merge can create a new adjacency with the element now at this
      // index, so only step back when the index fell off the end.
      if index >= ranges.len() {
        index -= 1;
      }
    } else {
      index -= 1;
    }
  }
}

/// Converts a sequence of ranges into a year list string.
///
/// Elements are joined in sequence order; after normalization that order is
/// ascending, but no reordering happens here.
pub fn stringify_ranges(ranges: &[Range]) -> String {
  ranges
    .iter()
    .map(ToString::to_string)
    .collect::<Vec<_>>()
    .join(&RANGES_SEPARATOR.to_string())
}
