//! Order value object and side

use crate::errors::ValidationError;
use crate::ids::{OrderId, SecurityId};
use crate::numeric::Quantity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order side (buyer or seller)
///
/// Serializes as the exact strings `"Buy"` and `"Sell"`, matching the
/// textual wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// The wire string for this side
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Buy => "Buy",
            Side::Sell => "Sell",
        }
    }

    pub fn is_buy(self) -> bool {
        matches!(self, Side::Buy)
    }
}

impl FromStr for Side {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Buy" => Ok(Side::Buy),
            "Sell" => Ok(Side::Sell),
            _ => Err(ValidationError::InvalidSide),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single order
///
/// Immutable once constructed; the cache never mutates a stored order.
/// The only edit model is cancel + re-add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub security_id: SecurityId,
    pub side: Side,
    pub qty: Quantity,
    pub user: String,
    pub company: String,
}

impl Order {
    /// Create a new order
    ///
    /// Construction does not validate; the cache validates at `add_order`.
    pub fn new(
        order_id: OrderId,
        security_id: SecurityId,
        side: Side,
        qty: Quantity,
        user: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            order_id,
            security_id,
            side,
            qty,
            user: user.into(),
            company: company.into(),
        }
    }
}
