//! Order quantity type
//!
//! Quantities are unsigned 32-bit integers. Aggregate sums are carried in
//! `u64` so that no realistic number of orders can overflow them; use
//! [`Quantity::widen`] at the aggregation boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order quantity
///
/// Zero is representable so that invalid orders can be constructed and then
/// rejected by validation rather than panicking at the call site.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// Create a new Quantity
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The zero quantity
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the inner value
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Check if the quantity is zero
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Widen to `u64` for aggregate arithmetic
    pub const fn widen(self) -> u64 {
        self.0 as u64
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
