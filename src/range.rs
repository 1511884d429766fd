//! # Range Module
//!
//! This module defines [`Range`], a closed interval of copyright years, along
//! with parsing and formatting of its textual form (`"2015"` or
//! `"2012-2015"`).

use std::fmt;

/// The character separating the first and last year of a range.
pub const YEAR_SEPARATOR: char = '-';

/// Error type for constructing or parsing a [`Range`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RangeError {
  /// The first year of the range is greater than the last year.
  #[error("first year ({first}) is greater than last year ({last})")]
  Inverted { first: i32, last: i32 },

  /// The input text is not a single year or a `first-last` range.
  #[error("not a valid year range: \"{0}\"")]
  Malformed(String),
}

/// A time span between (and including) two years.
///
/// A single year is represented with the first year equal to the last year.
/// Ranges are immutable; merging produces a new `Range`.
///
/// The derived ordering is lexicographic on `(first, last)`, which is what
/// the merge pass in [`crate::ranges::normalize_ranges`] relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Range {
  first: i32,
  last: i32,
}

impl Range {
  /// Creates a range spanning `first..=last`.
  ///
  /// # Errors
  ///
  /// Returns [`RangeError::Inverted`] if `first > last`.
  pub const fn new(first: i32, last: i32) -> Result<Self, RangeError> {
    if first > last {
      return Err(RangeError::Inverted { first, last });
    }
    Ok(Self { first, last })
  }

  /// Creates a range covering a single year.
  pub const fn single(year: i32) -> Self {
    Self { first: year, last: year }
  }

  /// The first year covered by this range.
  pub const fn first(&self) -> i32 {
    self.first
  }

  /// The last year covered by this range.
  pub const fn last(&self) -> i32 {
    self.last
  }

  /// Checks whether a year falls inside this range.
  pub const fn contains(&self, year: i32) -> bool {
    self.first <= year && year <= self.last
  }

  /// Checks whether a year extends this range upward.
  ///
  /// Only upper extension is considered: a year below the range never
  /// extends it. The merge pass works on a sorted sequence, so forward
  /// extension is the only case that can occur.
  pub const fn extended_by(&self, year: i32) -> bool {
    year == self.last + 1
  }

  /// Merges this range with a later (not smaller) one into a single span.
  pub(crate) fn merge(&self, later: &Self) -> Self {
    Self {
      first: self.first,
      last: self.last.max(later.last),
    }
  }

  /// Parses a range from its textual form.
  ///
  /// Accepts either a single year (`"2015"`) or a separated pair
  /// (`"2012-2015"`). Whitespace around either component is tolerated.
  ///
  /// # Errors
  ///
  /// Returns [`RangeError::Malformed`] naming the offending text, or
  /// [`RangeError::Inverted`] when the first year exceeds the last.
  pub fn parse(string: &str) -> Result<Self, RangeError> {
    // A single year converts to an integer directly.
    if let Ok(year) = string.trim().parse::<i32>() {
      return Ok(Self::single(year));
    }

    let malformed = || RangeError::Malformed(string.to_string());
    let (first, last) = string.split_once(YEAR_SEPARATOR).ok_or_else(malformed)?;
    let first = first.trim().parse::<i32>().map_err(|_| malformed())?;
    let last = last.trim().parse::<i32>().map_err(|_| malformed())?;

    Self::new(first, last)
  }
}

impl fmt::Display for Range {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.first == self.last {
      write!(f, "{}", self.first)
    } else {
      write!(f, "{}{}{}", self.first, YEAR_SEPARATOR, self.last)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_construct_valid_range() {
    let range = Range::new(2012, 2015).unwrap();
    assert_eq!(range.first(), 2012);
    assert_eq!(range.last(), 2015);
  }

  #[test]
  fn test_construct_inverted_range_fails() {
    let err = Range::new(2015, 2012).unwrap_err();
    assert_eq!(err, RangeError::Inverted { first: 2015, last: 2012 });
    assert_eq!(err.to_string(), "first year (2015) is greater than last year (2012)");
  }

  #[test]
  fn test_display_single_year() {
    assert_eq!(Range::single(2015).to_string(), "2015");
  }

  #[test]
  fn test_display_span() {
    assert_eq!(Range::new(1999, 2004).unwrap().to_string(), "1999-2004");
  }

  #[test]
  fn test_display_round_trips_through_parse() {
    for range in [Range::single(98), Range::new(2010, 2012).unwrap(), Range::new(1995, 2015).unwrap()] {
      assert_eq!(Range::parse(&range.to_string()).unwrap(), range);
    }
  }

  #[test]
  fn test_contains() {
    let range = Range::new(2010, 2012).unwrap();
    assert!(!range.contains(2009));
    assert!(range.contains(2010));
    assert!(range.contains(2011));
    assert!(range.contains(2012));
    assert!(!range.contains(2013));
  }

  #[test]
  fn test_extended_by_is_upper_only() {
    let range = Range::new(2010, 2012).unwrap();
    assert!(range.extended_by(2013));
    assert!(!range.extended_by(2014));
    assert!(!range.extended_by(2012));
    // A year below the range never extends it.
    assert!(!range.extended_by(2009));
  }

  #[test]
  fn test_parse_single_year() {
    assert_eq!(Range::parse("2015").unwrap(), Range::single(2015));
    // Two-digit shorthand years are matched as-is, never expanded.
    assert_eq!(Range::parse("98").unwrap(), Range::single(98));
  }

  #[test]
  fn test_parse_span() {
    assert_eq!(Range::parse("2012-2015").unwrap(), Range::new(2012, 2015).unwrap());
  }

  #[test]
  fn test_parse_tolerates_inner_whitespace() {
    assert_eq!(Range::parse("2014 -2015").unwrap(), Range::new(2014, 2015).unwrap());
    assert_eq!(Range::parse(" 2014 - 2015 ").unwrap(), Range::new(2014, 2015).unwrap());
  }

  #[test]
  fn test_parse_malformed_names_offending_text() {
    let err = Range::parse("20x5").unwrap_err();
    assert_eq!(err.to_string(), "not a valid year range: \"20x5\"");

    assert!(Range::parse("").is_err());
    assert!(Range::parse("2010-2012-2014").is_err());
  }

  #[test]
  fn test_parse_inverted_span_propagates_construction_error() {
    let err = Range::parse("2015-2012").unwrap_err();
    assert_eq!(err, RangeError::Inverted { first: 2015, last: 2012 });
  }
}
