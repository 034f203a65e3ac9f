use super::ids::{EntryKey, Signature, SourceLocation};
use crate::constants::TIME_UNIT_SUFFIX;
use std::fmt;

/// One timing record emitted by the Swift frontend.
///
/// Recognised shapes:
///
/// ```text
/// 12.3ms\t/path/File.swift:10:5\tinstance method foo()   (-debug-time-function-bodies)
/// 0.4ms\t/path/File.swift:22:17                          (-debug-time-expression-type-checking)
/// /path/File.swift:10:5 12.3ms                           (location first, no signature)
/// ```
///
/// The time is kept in the unit the compiler wrote it in (milliseconds).
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    key: EntryKey,
    compilation_time: f64,
}

impl LogEntry {
    pub fn new(key: EntryKey, compilation_time: f64) -> Self {
        Self {
            key,
            compilation_time,
        }
    }

    /// Parse a single log line, returning `None` for anything that is not a timing record
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let fields = split_fields(line);
        match fields.as_slice() {
            [time, location] | [time, location, _] if parse_time(time).is_some() => {
                let signature = fields.get(2).map(|s| Signature::from(*s));
                let key = EntryKey::new(SourceLocation::parse(location)?, signature);
                Some(Self::new(key, parse_time(time)?))
            }
            [location, time] => {
                let key = EntryKey::new(SourceLocation::parse(location)?, None);
                Some(Self::new(key, parse_time(time)?))
            }
            _ => None,
        }
    }

    pub fn key(&self) -> &EntryKey {
        &self.key
    }

    pub fn location(&self) -> &SourceLocation {
        self.key.location()
    }

    pub fn signature(&self) -> Option<&Signature> {
        self.key.signature()
    }

    pub fn compilation_time(&self) -> f64 {
        self.compilation_time
    }

    /// Same entity, different time. Used when merging duplicates.
    pub fn with_compilation_time(self, compilation_time: f64) -> Self {
        Self {
            compilation_time,
            ..self
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}{}\t{}",
            self.compilation_time, TIME_UNIT_SUFFIX, self.key
        )
    }
}

/// Parse every line of a raw log, dropping lines that are not timing records
pub fn parse_entries(text: &str) -> Vec<LogEntry> {
    text.split('\n').filter_map(LogEntry::parse).collect()
}

// Tab-separated when the compiler wrote tabs, otherwise at most three
// whitespace-separated fields with the remainder kept as the signature.
fn split_fields(line: &str) -> Vec<&str> {
    if line.contains('\t') {
        return line
            .split('\t')
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .collect();
    }

    let mut fields = Vec::with_capacity(3);
    let mut rest = line;
    while !rest.is_empty() && fields.len() < 2 {
        match rest.split_once(char::is_whitespace) {
            Some((field, tail)) => {
                fields.push(field);
                rest = tail.trim_start();
            }
            None => {
                fields.push(rest);
                rest = "";
            }
        }
    }
    if !rest.is_empty() {
        fields.push(rest);
    }
    fields
}

fn parse_time(token: &str) -> Option<f64> {
    let value: f64 = token.strip_suffix(TIME_UNIT_SUFFIX)?.parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}
