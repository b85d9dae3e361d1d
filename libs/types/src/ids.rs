//! Identifier types for cache entities
//!
//! Order ids carry a fixed textual prefix followed by a decimal integer.
//! The integer addresses the order's slot in the primary store, so the
//! id ↔ slot mapping is total, deterministic, and injective.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal prefix every well-formed order id starts with.
pub const ORDER_ID_PREFIX: &str = "OrdId";

/// Unique identifier for an order
///
/// Wire format: `OrdId` followed by one or more decimal digits. The numeric
/// tail is the order's slot in the primary store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Create an OrderId from a raw string
    ///
    /// The string is not validated here; use [`OrderId::slot`] to check the
    /// format when the numeric tail is needed.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Build the canonical id for a storage slot
    pub fn from_slot(slot: u64) -> Self {
        Self(format!("{ORDER_ID_PREFIX}{slot}"))
    }

    /// Get the id string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the id is the empty string
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode the numeric tail into a storage slot
    ///
    /// Returns `None` unless the id is the literal prefix followed by a
    /// non-empty run of ASCII decimal digits that fits in a `u64`.
    pub fn slot(&self) -> Option<u64> {
        let digits = self.0.strip_prefix(ORDER_ID_PREFIX)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Security identifier
///
/// An opaque instrument key; any non-empty string is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecurityId(String);

impl SecurityId {
    /// Create a new SecurityId from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the id is the empty string
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SecurityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SecurityId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
