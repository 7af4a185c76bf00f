//! Commerce error types.

use crate::ids::ProductId;
use crate::money::Money;
use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// All of these are local validation outcomes surfaced as inline UI
/// feedback; nothing here is fatal and there is no I/O to retry.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Submitted coupon code does not match any known coupon.
    #[error("Invalid coupon code: {0}")]
    InvalidCoupon(String),

    /// Coupon is valid but the order is below its threshold.
    #[error("Coupon {code} requires a minimum order of {required}")]
    MinimumOrderNotMet { code: String, required: Money },

    /// Operation referenced a product id not present in the cart.
    #[error("Product not in cart: {0}")]
    ProductNotFound(ProductId),

    /// Catalog record rejected at the load boundary.
    #[error("Catalog validation failed: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_minimum() {
        let err = CommerceError::MinimumOrderNotMet {
            code: "SRB500".to_string(),
            required: Money::rupees(10000),
        };
        assert_eq!(
            err.to_string(),
            "Coupon SRB500 requires a minimum order of \u{20b9}10,000"
        );
    }

    #[test]
    fn test_invalid_coupon_message() {
        let err = CommerceError::InvalidCoupon("BOGUS".to_string());
        assert_eq!(err.to_string(), "Invalid coupon code: BOGUS");
    }
}
