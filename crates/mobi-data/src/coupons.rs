//! The store's coupon table.

use mobi_commerce::cart::{Coupon, CouponBook};
use mobi_commerce::money::Money;

/// Build the fixed coupon table.
pub fn coupons() -> CouponBook {
    CouponBook::new(vec![
        Coupon::flat(
            "SRB500",
            "\u{20b9}500 off on orders above \u{20b9}10,000",
            Money::rupees(500),
            Money::rupees(10000),
        ),
        Coupon::flat(
            "FIRST20",
            "\u{20b9}2,000 off for first-time buyers",
            Money::rupees(2000),
            Money::rupees(20000),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_three_coupons() {
        assert_eq!(coupons().coupons().len(), 3);
    }

    #[test]
    fn test_codes_resolve() {
        let book = coupons();
        for code in ["SRB500", "first20", "Mega10"] {
            assert!(book.find(code).is_some(), "missing coupon {code}");
        }
    }
}
