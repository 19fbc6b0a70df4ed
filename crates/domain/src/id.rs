//! Typed identifier for items.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Integer identifier of an [`Item`](crate::item::Item).
///
/// Nothing enforces uniqueness: the id is whatever the caller sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    /// Wrap a raw integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Access the inner integer.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ItemId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidType {
                field: "item_id",
                expected: "integer",
            })
    }
}
