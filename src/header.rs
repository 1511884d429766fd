//! # Header Module
//!
//! This module locates copyright headers in free-form text. A header is the
//! literal word "copyright" (any case) followed, on the same line, by a year
//! list such as `2007, 2008` or `1999-2000,2012-2014`. Real headers live
//! inside block comments and framing characters, so matching is performed
//! over the whole buffer rather than per physical line.

use std::sync::LazyLock;

use regex::Regex;

/// Matches the copyright keyword, case-insensitively.
static KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)copyright").expect("keyword regex must compile"));

/// Matches a year list: one year, optionally followed by repeated
/// separator-year groups. A year is any run of decimal digits; shortened
/// years like "98" are matched as-is and never expanded, which at least
/// raises awareness of them during normalization.
static YEAR_LIST_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[0-9]+(?:\s*[-,]\s*[0-9]+)*").expect("year list regex must compile"));

/// A located copyright header occurrence.
///
/// Concatenating `prefix`, `years` and `suffix` reproduces the exact matched
/// substring of the scanned content.
#[derive(Debug)]
pub struct HeaderMatch<'a> {
  /// Text from the copyright keyword up to (excluding) the year list.
  pub prefix: &'a str,

  /// The raw year list substring.
  pub years: &'a str,

  /// Trailing text from the end of the year list to the end of the line.
  /// Exists so the padded rewrite policy can adjust surrounding whitespace.
  pub suffix: &'a str,

  start: usize,
  end: usize,
}

impl HeaderMatch<'_> {
  /// Byte offset of the start of the match within the scanned content.
  pub const fn start(&self) -> usize {
    self.start
  }

  /// Byte offset one past the end of the match within the scanned content.
  pub const fn end(&self) -> usize {
    self.end
  }
}

/// Locator for copyright headers in a character buffer.
///
/// The prefix between the keyword and the year list may contain arbitrary
/// non-newline characters (punctuation, "(C)", author names) but never
/// anything that itself looks like a year list: the year list reported is
/// always the first one that could begin after the keyword. This keeps a
/// header with an earlier numeric token from being mis-split.
pub struct HeaderPattern;

impl HeaderPattern {
  /// Finds the next header occurrence at or after `from`.
  ///
  /// Callers scanning a whole buffer should resume from [`HeaderMatch::end`]
  /// of the previous match so that every independent header in a
  /// multi-header document is found exactly once.
  pub fn find_at(content: &str, from: usize) -> Option<HeaderMatch<'_>> {
    let mut search_from = from;

    while let Some(keyword) = KEYWORD_RE.find_at(content, search_from) {
      let line_end = content[keyword.end()..]
        .find(['\n', '\r'])
        .map_or(content.len(), |offset| keyword.end() + offset);
      let rest = &content[keyword.end()..line_end];

      // At least one character must separate the keyword from the year
      // list, so the search for the list skips the first character.
      if let Some(gap) = rest.chars().next() {
        let skip = gap.len_utf8();
        if let Some(years) = YEAR_LIST_RE.find(&rest[skip..]) {
          let years_start = keyword.end() + skip + years.start();
          let years_end = keyword.end() + skip + years.end();

          return Some(HeaderMatch {
            prefix: &content[keyword.start()..years_start],
            years: &content[years_start..years_end],
            suffix: &content[years_end..line_end],
            start: keyword.start(),
            end: line_end,
          });
        }
      }

      // No year list on this keyword's line; try the next occurrence.
      search_from = keyword.end();
    }

    None
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn find(content: &str) -> HeaderMatch<'_> {
    HeaderPattern::find_at(content, 0).expect("expected a header match")
  }

  #[test]
  fn test_simple_header() {
    let content = "// Copyright (c) 2007, 2008 All Right Reserved, http://microsoft.com/";
    let matched = find(content);
    assert_eq!(matched.prefix, "Copyright (c) ");
    assert_eq!(matched.years, "2007, 2008");
    assert_eq!(matched.suffix, " All Right Reserved, http://microsoft.com/");
  }

  #[test]
  fn test_match_is_case_insensitive() {
    let matched = find("# COPYRIGHT 2013 Gentoo Foundation");
    assert_eq!(matched.years, "2013");
  }

  #[test]
  fn test_concatenation_reproduces_matched_substring() {
    let content = " * Copyright (C) 1999,2000,2012-2014 VMware, Inc. All rights reserved.\n * more\n";
    let matched = find(content);
    let rebuilt = format!("{}{}{}", matched.prefix, matched.years, matched.suffix);
    assert_eq!(rebuilt, &content[matched.start()..matched.end()]);
  }

  #[test]
  fn test_tab_separated_year_list() {
    let matched = find("@(#)Copyright:      (C) XYZ\t1988-1991,\t2005-2010");
    assert_eq!(matched.years, "1988-1991,\t2005-2010");
  }

  #[test]
  fn test_keyword_without_years_is_skipped() {
    // The first keyword occurrence has no year list on its line; the
    // second one does and must be the reported match.
    let content = "// <copyright file=\"test.cs\" company=\"MSFT\">\n// Copyright (c) 2007 MSFT\n";
    let matched = find(content);
    assert_eq!(matched.years, "2007");
    assert!(matched.prefix.starts_with("Copyright (c) "));
  }

  #[test]
  fn test_no_match_in_plain_text() {
    assert!(HeaderPattern::find_at("no annotation here, just 2015", 0).is_none());
    assert!(HeaderPattern::find_at("copyright without any years", 0).is_none());
  }

  #[test]
  fn test_years_must_share_the_keyword_line() {
    assert!(HeaderPattern::find_at("copyright\n2015", 0).is_none());
  }

  #[test]
  fn test_suffix_stops_at_end_of_line() {
    let matched = find("# Copyright 2013 Gentoo Foundation\n# Distributed under the GPL v2\n");
    assert_eq!(matched.suffix, " Gentoo Foundation");
  }

  #[test]
  fn test_scanning_resumes_past_previous_match() {
    let content = "// Copyright 2011 one\ncode\n// Copyright 2012 two\n";
    let first = find(content);
    assert_eq!(first.years, "2011");
    let second = HeaderPattern::find_at(content, first.end()).expect("second header");
    assert_eq!(second.years, "2012");
    assert!(HeaderPattern::find_at(content, second.end()).is_none());
  }
}
