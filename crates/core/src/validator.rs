//! Error-accumulating request validator.
//!
//! A [`Validator`] is created fresh per request, threaded by `&mut`
//! through the validation rules for one candidate entity, then inspected
//! once via [`Validator::is_valid`]. Rules never short-circuit: every
//! check runs and the first failure recorded per field wins, so the
//! client gets one message per offending field.

use std::collections::{BTreeMap, HashSet};

use regex::Regex;

/// Accumulates field-keyed validation error messages.
///
/// Uses a `BTreeMap` so serialized error bodies list fields in a stable
/// order.
#[derive(Debug, Default)]
pub struct Validator {
    errors: BTreeMap<String, String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff no errors have been recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record `message` under `key`, unless `key` already holds an error.
    pub fn add_error(&mut self, key: &str, message: &str) {
        self.errors
            .entry(key.to_string())
            .or_insert_with(|| message.to_string());
    }

    /// Record `message` under `key` when `ok` is false.
    pub fn check(&mut self, ok: bool, key: &str, message: &str) {
        if !ok {
            self.add_error(key, message);
        }
    }

    /// The accumulated field -> message map.
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Consume the validator, yielding the field -> message map.
    pub fn into_errors(self) -> BTreeMap<String, String> {
        self.errors
    }
}

/// True iff `values` contains no duplicate entries (case-sensitive).
pub fn unique<T: AsRef<str>>(values: &[T]) -> bool {
    let distinct: HashSet<&str> = values.iter().map(AsRef::as_ref).collect();
    distinct.len() == values.len()
}

/// True iff `value` appears in `candidates`.
pub fn is_in(value: &str, candidates: &[&str]) -> bool {
    candidates.contains(&value)
}

/// True iff `value` matches the given pattern.
pub fn matches(value: &str, pattern: &Regex) -> bool {
    pattern.is_match(value)
}
