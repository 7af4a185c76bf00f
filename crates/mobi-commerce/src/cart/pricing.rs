//! Cart pricing calculations.

use crate::cart::{Cart, Coupon};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Shipping and threshold constants for the pricing breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingRules {
    /// Orders strictly above this subtotal ship free.
    pub free_shipping_threshold: Money,
    /// Flat fee charged below the threshold.
    pub shipping_fee: Money,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Money::rupees(10000),
            shipping_fee: Money::rupees(99),
        }
    }
}

impl PricingRules {
    /// Shipping charge for a given subtotal.
    pub fn shipping_for(&self, subtotal: Money) -> Money {
        if subtotal.amount > self.free_shipping_threshold.amount {
            Money::zero(subtotal.currency)
        } else {
            self.shipping_fee
        }
    }

    /// Amount still needed to unlock free shipping, for the cart page's
    /// progress banner. `None` once shipping is already free.
    pub fn remaining_for_free_shipping(&self, subtotal: Money) -> Option<Money> {
        if subtotal.amount > self.free_shipping_threshold.amount {
            None
        } else {
            Some(self.free_shipping_threshold - subtotal)
        }
    }
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of pre-discount reference prices × quantities.
    pub total_original: Money,
    /// Sum of current selling prices × quantities.
    pub subtotal: Money,
    /// Catalog markdowns: `total_original - subtotal`.
    pub product_discount: Money,
    /// Discount granted by the applied coupon, if any.
    pub coupon_discount: Money,
    /// Shipping charge.
    pub shipping: Money,
    /// Amount payable: `subtotal - coupon_discount + shipping`.
    pub total: Money,
    /// Display-only savings figure: product discount, coupon discount,
    /// and the waived shipping fee. Not part of `total`.
    pub total_savings: Money,
}

impl CartTotals {
    /// An all-zero breakdown for an empty cart.
    pub fn empty() -> Self {
        let zero = Money::zero(Currency::INR);
        Self {
            total_original: zero,
            subtotal: zero,
            product_discount: zero,
            coupon_discount: zero,
            shipping: zero,
            total: zero,
            total_savings: zero,
        }
    }

    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }

    pub fn has_savings(&self) -> bool {
        self.total_savings.is_positive()
    }
}

/// Compute the authoritative price breakdown for the current cart state
/// and an optional applied coupon.
///
/// Pure and deterministic; the caller re-runs it after every cart or
/// coupon change. An empty cart yields the all-zero breakdown.
pub fn compute_totals(cart: &Cart, coupon: Option<&Coupon>, rules: &PricingRules) -> CartTotals {
    if cart.is_empty() {
        return CartTotals::empty();
    }

    let total_original = cart.total_original();
    let subtotal = cart.subtotal();
    let product_discount = total_original - subtotal;

    let coupon_discount = coupon
        .map(|c| c.value.discount_for(subtotal))
        .unwrap_or_else(|| Money::zero(subtotal.currency));

    let shipping = rules.shipping_for(subtotal);
    let total = subtotal - coupon_discount + shipping;

    let waived_fee = if shipping.is_zero() {
        rules.shipping_fee
    } else {
        Money::zero(subtotal.currency)
    };
    let total_savings = product_discount + coupon_discount + waived_fee;

    CartTotals {
        total_original,
        subtotal,
        product_discount,
        coupon_discount,
        shipping,
        total,
        total_savings,
    }
}
