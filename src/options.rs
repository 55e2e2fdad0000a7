//!
//! Parser options.
//!
//! Both the line normalizer and the key/value mapper can be tuned :
//!
//! - inline comment marker (`" #"`), only the first occurrence truncates a line
//! - full-line comment prefix (`'#'`)
//! - pair separators (`'='` and `':'`), the first one found in a line wins
//! - quote characters, deleted from values wherever they appear
//!
//! `Options::default()` is what [`split_content`](crate::split_content) and
//! [`map_content`](crate::map_content) use.
//!

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

#[derive(Builder, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[builder(setter(into), default, build_fn(validate = "Self::validate"))]
#[serde(try_from = "RawOptions")]
pub struct Options {
    comment_marker: String,
    comment_prefix: char,
    separators: Vec<char>,
    quotes: Vec<char>,
}

///
/// Unchecked mirror of [`Options`](Options), deserialized first and then
/// validated the same way the builder does.
///
#[derive(Deserialize)]
#[serde(default)]
struct RawOptions {
    comment_marker: String,
    comment_prefix: char,
    separators: Vec<char>,
    quotes: Vec<char>,
}

impl Default for RawOptions {
    #[inline]
    fn default() -> Self {
        let Options {
            comment_marker,
            comment_prefix,
            separators,
            quotes,
        } = Options::default();

        Self {
            comment_marker,
            comment_prefix,
            separators,
            quotes,
        }
    }
}

impl TryFrom<RawOptions> for Options {
    type Error = String;

    fn try_from(raw: RawOptions) -> Result<Self, Self::Error> {
        check_separators(&raw.separators)?;
        check_comment_marker(&raw.comment_marker)?;

        Ok(Self {
            comment_marker: raw.comment_marker,
            comment_prefix: raw.comment_prefix,
            separators: raw.separators,
            quotes: raw.quotes,
        })
    }
}

fn check_separators(separators: &[char]) -> Result<(), String> {
    if separators.is_empty() {
        Err(String::from("at least one separator is required"))
    } else {
        Ok(())
    }
}

fn check_comment_marker(marker: &str) -> Result<(), String> {
    if marker.is_empty() {
        Err(String::from("comment marker can't be empty"))
    } else {
        Ok(())
    }
}

impl Default for Options {
    #[inline]
    fn default() -> Self {
        Self {
            comment_marker: String::from(" #"),
            comment_prefix: '#',
            separators: vec!['=', ':'],
            quotes: vec!['"', '\''],
        }
    }
}

impl OptionsBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref separators) = self.separators {
            check_separators(separators)?;
        }

        if let Some(ref marker) = self.comment_marker {
            check_comment_marker(marker)?;
        }

        Ok(())
    }
}

impl Options {
    #[inline]
    pub fn comment_marker(&self) -> &str {
        &self.comment_marker
    }

    #[inline]
    pub fn comment_prefix(&self) -> char {
        self.comment_prefix
    }

    #[inline]
    pub fn separators(&self) -> &[char] {
        &self.separators
    }

    #[inline]
    pub fn quotes(&self) -> &[char] {
        &self.quotes
    }

    /// byte index of the first separator in `line`, whichever it is.
    #[inline]
    pub(crate) fn find_separator(&self, line: &str) -> Option<usize> {
        line.find(|ch: char| self.separators.contains(&ch))
    }

    #[inline]
    pub(crate) fn is_quote(&self, ch: char) -> bool {
        self.quotes.contains(&ch)
    }
}
