//! Coupon types and lookup.

use crate::error::CommerceError;
use crate::ids::CouponCode;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Value of a coupon. Exactly one form is active per coupon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CouponValue {
    /// Flat amount off.
    Flat(Money),
    /// Percentage off, with an optional cap on the discount amount.
    Percent {
        percent: u8,
        max_discount: Option<Money>,
    },
}

impl CouponValue {
    /// Calculate the discount amount for a given subtotal.
    ///
    /// The discount never exceeds the subtotal, so the order total
    /// cannot go negative.
    pub fn discount_for(&self, subtotal: Money) -> Money {
        match self {
            CouponValue::Flat(amount) => amount.min(subtotal),
            CouponValue::Percent {
                percent,
                max_discount,
            } => {
                let raw = subtotal.percentage(*percent as f64);
                let capped = match max_discount {
                    Some(cap) => raw.min(*cap),
                    None => raw,
                };
                capped.min(subtotal)
            }
        }
    }
}

/// A named discount rule with an eligibility threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coupon {
    /// Coupon code; matched case-insensitively.
    pub code: CouponCode,
    /// Display label (e.g., "₹500 off on orders above ₹10,000").
    pub label: String,
    /// Minimum pre-coupon order subtotal.
    pub min_order: Money,
    /// The discount this coupon grants.
    pub value: CouponValue,
}

impl Coupon {
    /// Create a flat-amount coupon.
    pub fn flat(
        code: impl Into<CouponCode>,
        label: impl Into<String>,
        amount: Money,
        min_order: Money,
    ) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            min_order,
            value: CouponValue::Flat(amount),
        }
    }

    /// Create a percentage coupon with an optional discount cap.
    pub fn percent(
        code: impl Into<CouponCode>,
        label: impl Into<String>,
        percent: u8,
        max_discount: Option<Money>,
        min_order: Money,
    ) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            min_order,
            value: CouponValue::Percent {
                percent,
                max_discount,
            },
        }
    }
}

/// The store's fixed coupon table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CouponBook {
    coupons: Vec<Coupon>,
}

impl CouponBook {
    pub fn new(coupons: Vec<Coupon>) -> Self {
        Self { coupons }
    }

    pub fn coupons(&self) -> &[Coupon] {
        &self.coupons
    }

    /// Case-insensitive lookup by code.
    pub fn find(&self, code: &str) -> Option<&Coupon> {
        self.coupons.iter().find(|c| c.code.matches(code))
    }

    /// Validate a submitted code against the current order subtotal.
    ///
    /// The threshold check uses the pre-coupon subtotal (current selling
    /// prices × quantities). Failures carry the inline message for the
    /// UI; nothing is mutated here.
    pub fn apply(&self, code: &str, subtotal: Money) -> Result<&Coupon, CommerceError> {
        let coupon = self
            .find(code)
            .ok_or_else(|| CommerceError::InvalidCoupon(code.trim().to_string()))?;

        if subtotal.amount < coupon.min_order.amount {
            return Err(CommerceError::MinimumOrderNotMet {
                code: coupon.code.to_string(),
                required: coupon.min_order,
            });
        }

        Ok(coupon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> CouponBook {
        CouponBook::new(vec![
            Coupon::flat(
                "SRB500",
                "\u{20b9}500 off on orders above \u{20b9}10,000",
                Money::rupees(500),
                Money::rupees(10000),
            ),
            Coupon::percent(
                "MEGA10",
                "10% off up to \u{20b9}5,000",
                10,
                Some(Money::rupees(5000)),
                Money::rupees(15000),
            ),
        ])
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let book = book();
        assert!(book.find("srb500").is_some());
        assert!(book.find(" MEGA10 ").is_some());
        assert!(book.find("NOPE").is_none());
    }

    #[test]
    fn test_unknown_code_is_invalid() {
        let book = book();
        let result = book.apply("BOGUS", Money::rupees(50000));
        assert!(matches!(result, Err(CommerceError::InvalidCoupon(_))));
    }

    #[test]
    fn test_minimum_order_boundary() {
        let book = book();

        let below = book.apply("SRB500", Money::rupees(9999));
        assert!(matches!(
            below,
            Err(CommerceError::MinimumOrderNotMet { .. })
        ));

        let at = book.apply("SRB500", Money::rupees(10000)).unwrap();
        assert_eq!(at.value.discount_for(Money::rupees(10000)), Money::rupees(500));
    }

    #[test]
    fn test_percent_coupon_is_capped() {
        let book = book();
        let coupon = book.apply("MEGA10", Money::rupees(60000)).unwrap();
        // 10% of 60,000 is 6,000 but the cap is 5,000.
        assert_eq!(
            coupon.value.discount_for(Money::rupees(60000)),
            Money::rupees(5000)
        );

        // Below the cap the raw percentage applies.
        assert_eq!(
            coupon.value.discount_for(Money::rupees(20000)),
            Money::rupees(2000)
        );
    }

    #[test]
    fn test_flat_discount_never_exceeds_subtotal() {
        let value = CouponValue::Flat(Money::rupees(500));
        assert_eq!(value.discount_for(Money::rupees(300)), Money::rupees(300));
    }

    #[test]
    fn test_uncapped_percent() {
        let value = CouponValue::Percent {
            percent: 10,
            max_discount: None,
        };
        assert_eq!(value.discount_for(Money::rupees(60000)), Money::rupees(6000));
    }
}
