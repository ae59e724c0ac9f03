//! Typed accessors over a string-keyed metadata mapping.
//!
//! Every accessor does one lookup and at most one conversion. An entry
//! whose value is the empty string counts as absent.

use std::collections::HashMap;
use std::fmt::Display;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::error::{MetadataError, MetadataResult};

/// Read-only view over one trigger mapping.
#[derive(Debug, Clone, Copy)]
pub struct MetadataReader<'a> {
    entries: &'a HashMap<String, String>,
}

impl<'a> MetadataReader<'a> {
    /// Wrap one metadata or auth-parameter mapping.
    pub fn new(entries: &'a HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// The value for `key`, if present and non-empty.
    pub fn optional(&self, key: &str) -> Option<&'a str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// The value for `key`, or `MissingField` reported under `label`.
    pub fn required(&self, key: &'static str, label: &'static str) -> MetadataResult<&'a str> {
        self.optional(key)
            .ok_or(MetadataError::MissingField { key, label })
    }

    /// A required integer field.
    pub fn required_int<T>(&self, key: &'static str, label: &'static str) -> MetadataResult<T>
    where
        T: FromStr<Err = ParseIntError>,
    {
        let raw = self.required(key, label)?;
        parse_int(key, raw)
    }

    /// An optional integer field, falling back to `default` when absent.
    pub fn optional_int<T>(&self, key: &'static str, default: T) -> MetadataResult<T>
    where
        T: FromStr<Err = ParseIntError>,
    {
        match self.optional(key) {
            Some(raw) => parse_int(key, raw),
            None => Ok(default),
        }
    }

    /// An optional enumerated field, falling back to `default` when absent.
    ///
    /// Any `FromStr` failure is reported as `InvalidEnumeration`.
    pub fn optional_enum<T>(&self, key: &'static str, default: T) -> MetadataResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.optional(key) {
            Some(raw) => raw.parse().map_err(|e: T::Err| MetadataError::InvalidEnumeration {
                key,
                value: raw.to_string(),
                reason: e.to_string(),
            }),
            None => Ok(default),
        }
    }
}

fn parse_int<T>(key: &'static str, raw: &str) -> MetadataResult<T>
where
    T: FromStr<Err = ParseIntError>,
{
    raw.parse().map_err(|source| MetadataError::InvalidInteger {
        key,
        value: raw.to_string(),
        source,
    })
}
