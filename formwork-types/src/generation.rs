//! Unit generation numbers.
//!
//! A generation is a monotonically increasing version marker owned and
//! incremented by the resource store; this core only carries it around
//! and compares it.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A unit's version marker.
///
/// Serializes as a bare number, matching the persisted resource format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Generation(u64);

impl Generation {
    /// Creates a generation from a raw counter value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Returns the following generation.
    ///
    /// The store owns the real counter; this exists for callers (and
    /// tests) that simulate its increments.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u64> for Generation {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Generation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|source| Error::InvalidGeneration {
                value: s.to_string(),
                source,
            })
    }
}
