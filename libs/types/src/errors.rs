//! Error types for the order cache
//!
//! Error taxonomy using thiserror

use thiserror::Error;

/// Validation failures surfaced when an order is rejected at ingress
///
/// Variants are listed in the order the checks run.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("empty order id")]
    EmptyOrderId,

    #[error("order id must be \"OrdId\" followed by decimal digits")]
    InvalidOrderIdFormat,

    #[error("empty security id")]
    EmptySecurityId,

    #[error("empty user")]
    EmptyUser,

    #[error("empty company")]
    EmptyCompany,

    #[error("side must be \"Buy\" or \"Sell\"")]
    InvalidSide,

    #[error("zero quantity")]
    ZeroQuantity,
}

/// Top-level cache error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("invalid order: {0}")]
    InvalidOrder(#[from] ValidationError),

    #[error("malformed order id: {0}")]
    MalformedOrderId(String),
}
