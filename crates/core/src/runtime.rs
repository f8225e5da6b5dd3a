//! Movie runtime as a duration in minutes.
//!
//! On the wire a runtime is always the JSON string `"<minutes> mins"`
//! (e.g. `"102 mins"`), never a bare number. The serde implementations
//! below enforce that shape in both directions, so any struct with a
//! `Runtime` field picks up the format automatically.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A movie's duration in whole minutes.
///
/// Formatting does not apply business rules -- zero and negative values
/// encode fine. Positivity is enforced by [`validate_movie`].
///
/// [`validate_movie`]: crate::movie::validate_movie
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Runtime(i32);

impl Runtime {
    pub fn new(minutes: i32) -> Self {
        Self(minutes)
    }

    /// The underlying minute count.
    pub fn minutes(self) -> i32 {
        self.0
    }
}

impl From<i32> for Runtime {
    fn from(minutes: i32) -> Self {
        Self(minutes)
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mins", self.0)
    }
}

impl Serialize for Runtime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{} mins", self.0))
    }
}

impl<'de> Deserialize<'de> for Runtime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(RuntimeVisitor)
    }
}

struct RuntimeVisitor;

impl Visitor<'_> for RuntimeVisitor {
    type Value = Runtime;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string of the form \"<minutes> mins\"")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Runtime, E> {
        let parts: Vec<&str> = value.split(' ').collect();

        if parts.len() != 2 || parts[1] != "mins" {
            return Err(E::custom("invalid runtime format"));
        }

        let minutes: i32 = parts[0]
            .parse()
            .map_err(|_| E::custom("invalid runtime format"))?;

        Ok(Runtime(minutes))
    }
}
