//! Ingress order validation
//!
//! Field-level checks applied before an order enters the cache. Checks run
//! in a fixed sequence and report the first failure.
//!
//! `ValidationError::InvalidSide` never arises here: a constructed `Order`
//! carries a closed `Side` enum, so side errors surface where the textual
//! form is parsed (`Side::from_str`).

use types::errors::ValidationError;
use types::order::Order;

/// Validate an order for admission
///
/// Checks performed (in order):
/// 1. Order id is non-empty
/// 2. Order id decodes to a storage slot
/// 3. Security id is non-empty
/// 4. User is non-empty
/// 5. Company is non-empty
/// 6. Quantity is positive
pub fn validate(order: &Order) -> Result<(), ValidationError> {
    if order.order_id.is_empty() {
        return Err(ValidationError::EmptyOrderId);
    }
    if order.order_id.slot().is_none() {
        return Err(ValidationError::InvalidOrderIdFormat);
    }
    if order.security_id.is_empty() {
        return Err(ValidationError::EmptySecurityId);
    }
    if order.user.is_empty() {
        return Err(ValidationError::EmptyUser);
    }
    if order.company.is_empty() {
        return Err(ValidationError::EmptyCompany);
    }
    if order.qty.is_zero() {
        return Err(ValidationError::ZeroQuantity);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::{OrderId, SecurityId};
    use types::numeric::Quantity;
    use types::order::Side;

    fn valid_order() -> Order {
        Order::new(
            OrderId::new("OrdId1"),
            SecurityId::new("SecId1"),
            Side::Buy,
            Quantity::new(100),
            "user1",
            "CompanyA",
        )
    }

    #[test]
    fn test_validate_accepts_well_formed_order() {
        assert_eq!(validate(&valid_order()), Ok(()));
    }

    #[test]
    fn test_validate_empty_order_id() {
        let mut order = valid_order();
        order.order_id = OrderId::new("");
        assert_eq!(validate(&order), Err(ValidationError::EmptyOrderId));
    }

    #[test]
    fn test_validate_bad_order_id_format() {
        for raw in ["Ord1", "OrdId", "OrdIdx", "OrdId1x", "1OrdId"] {
            let mut order = valid_order();
            order.order_id = OrderId::new(raw);
            assert_eq!(
                validate(&order),
                Err(ValidationError::InvalidOrderIdFormat),
                "id {raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_empty_security_id() {
        let mut order = valid_order();
        order.security_id = SecurityId::new("");
        assert_eq!(validate(&order), Err(ValidationError::EmptySecurityId));
    }

    #[test]
    fn test_validate_empty_user() {
        let mut order = valid_order();
        order.user = String::new();
        assert_eq!(validate(&order), Err(ValidationError::EmptyUser));
    }

    #[test]
    fn test_validate_empty_company() {
        let mut order = valid_order();
        order.company = String::new();
        assert_eq!(validate(&order), Err(ValidationError::EmptyCompany));
    }

    #[test]
    fn test_validate_zero_quantity() {
        let mut order = valid_order();
        order.qty = Quantity::zero();
        assert_eq!(validate(&order), Err(ValidationError::ZeroQuantity));
    }

    #[test]
    fn test_validate_reports_first_failure() {
        // Both the id and the quantity are bad; the id check runs first
        let mut order = valid_order();
        order.order_id = OrderId::new("bogus");
        order.qty = Quantity::zero();
        assert_eq!(validate(&order), Err(ValidationError::InvalidOrderIdFormat));
    }
}
