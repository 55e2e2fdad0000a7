//! Overview
//!
//! Most of the types in here are public only to crates, except [`EnvMap`](EnvMap).
//!
use crate::{error::PairError, options::Options};
use std::{borrow::Cow, collections::HashMap};

/// Variable name to value, the output of the whole pipeline.
pub type EnvMap = HashMap<String, String>;

///
/// Parser trait for this crates.
///
/// Every parser in here is driven by the same [`Options`](Options).
///
pub(crate) trait Parser<'a> {
    type Item: Sized;
    type Error;

    fn parse(raw: &'a str, options: &Options) -> Result<Self::Item, Self::Error>;
}

#[derive(Debug, Eq, PartialEq)]
pub(crate) struct Pair<'a> {
    pub key: Cow<'a, str>,
    pub value: Cow<'a, str>,
}

impl<'a> Pair<'a> {
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<Cow<'a, str>>,
        V: Into<Cow<'a, str>>,
    {
        Self {
            key: K::into(key),
            value: V::into(value),
        }
    }

    #[inline]
    pub fn into_owned(self) -> (String, String) {
        (self.key.into_owned(), self.value.into_owned())
    }
}

///
/// Remove every quote character from `value`.
///
/// Borrowed when there is nothing to remove.
///
fn strip_quotes<'a>(value: &'a str, options: &Options) -> Cow<'a, str> {
    if value.chars().any(|ch| options.is_quote(ch)) {
        Cow::Owned(value.chars().filter(|ch| !options.is_quote(*ch)).collect())
    } else {
        Cow::Borrowed(value)
    }
}

impl<'a> Parser<'a> for Pair<'a> {
    type Item = Self;
    type Error = PairError;

    ///
    /// Parse one cleaned line into a pair.
    ///
    /// 1. split at the first separator, later separators belong to the value
    /// 2. trim both sides
    /// 3. reject empty key
    /// 4. drop quote characters from the value
    ///
    fn parse(raw: &'a str, options: &Options) -> Result<Self::Item, Self::Error> {
        if raw.is_empty() {
            return Err(PairError::EmptyPair);
        }

        let idx = options
            .find_separator(raw)
            .ok_or_else(|| PairError::MissingSeparator(String::from(raw)))?;

        // idx comes from find, so raw[idx..] starts with the separator char
        let sep_len = raw[idx..].chars().next().map_or(1, char::len_utf8);
        let key = raw[..idx].trim();
        let value = raw[idx + sep_len..].trim();

        if key.is_empty() {
            Err(PairError::EmptyKey(String::from(raw)))
        } else {
            Ok(Pair::new(key, strip_quotes(value, options)))
        }
    }
}
