//! Cart and line item types.

use std::sync::Arc;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Minimum quantity for a line item. Removal is a separate, explicit
/// operation; quantity changes never reach zero.
pub const MIN_QUANTITY_PER_ITEM: u32 = 1;

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: u32 = 10;

/// A line item in the cart.
///
/// Holds a shared, read-only reference to its product; the cart never
/// mutates catalog data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// The product being purchased.
    pub product: Arc<Product>,
    /// Quantity in [1, 10].
    pub quantity: u32,
    /// Chosen color, if the product has color variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<String>,
    /// Chosen storage tier, if the product has storage options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_storage: Option<String>,
}

impl LineItem {
    fn new(
        product: Arc<Product>,
        selected_color: Option<String>,
        selected_storage: Option<String>,
    ) -> Self {
        Self {
            product,
            quantity: MIN_QUANTITY_PER_ITEM,
            selected_color,
            selected_storage,
        }
    }

    /// Price billed per unit. Storage tiers reprice the product page;
    /// cart lines bill the catalog selling price.
    pub fn unit_price(&self) -> Money {
        self.product.price
    }

    /// Pre-discount per-unit reference price.
    pub fn original_unit_price(&self) -> Money {
        self.product.effective_original_price()
    }

    /// Line total at the billed unit price.
    pub fn line_total(&self) -> Money {
        self.unit_price() * self.quantity as i64
    }
}

/// A shopping cart.
///
/// The cart exclusively owns its line items; callers address lines by
/// product id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    /// Items in the cart.
    pub items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the cart.
    ///
    /// If a line item for the same product id exists, its quantity is
    /// incremented by one (clamped to the maximum) and the stored
    /// variant selection is kept; otherwise a new line item with
    /// quantity one is appended. Returns the resulting quantity.
    pub fn add_item(
        &mut self,
        product: Arc<Product>,
        selected_color: Option<String>,
        selected_storage: Option<String>,
    ) -> u32 {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = (existing.quantity + 1).min(MAX_QUANTITY_PER_ITEM);
            return existing.quantity;
        }

        self.items
            .push(LineItem::new(product, selected_color, selected_storage));
        MIN_QUANTITY_PER_ITEM
    }

    /// Adjust a line item's quantity by `delta`, clamped to [1, 10].
    ///
    /// The UI only offers quantity controls for items in the cart, so an
    /// absent product id is a hard fault, not a no-op. Returns the new
    /// quantity.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        delta: i64,
    ) -> Result<u32, CommerceError> {
        let item = self
            .items
            .iter_mut()
            .find(|i| &i.product.id == product_id)
            .ok_or_else(|| CommerceError::ProductNotFound(product_id.clone()))?;

        let updated = (item.quantity as i64 + delta)
            .clamp(MIN_QUANTITY_PER_ITEM as i64, MAX_QUANTITY_PER_ITEM as i64);
        item.quantity = updated as u32;
        Ok(item.quantity)
    }

    /// Remove a line item. Removing an absent product id is a no-op.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product.id != product_id);
        self.items.len() < len_before
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get a line item by product id.
    pub fn get_item(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product.id == product_id)
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct line items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line totals at current selling prices.
    pub fn subtotal(&self) -> Money {
        Money::sum(self.items.iter().map(|i| i.line_total()), Currency::INR)
    }

    /// Sum of line totals at pre-discount reference prices.
    pub fn total_original(&self) -> Money {
        Money::sum(
            self.items
                .iter()
                .map(|i| i.original_unit_price() * i.quantity as i64),
            Currency::INR,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn product(id: &str, price: i64, original: Option<i64>) -> Arc<Product> {
        let mut p = Product::new(id, id, "Acme", Category::Flagship, Money::rupees(price));
        p.original_price = original.map(Money::rupees);
        Arc::new(p)
    }

    #[test]
    fn test_add_item_starts_at_one() {
        let mut cart = Cart::new();
        let qty = cart.add_item(product("a", 1000, None), None, None);
        assert_eq!(qty, 1);
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_add_same_product_increments() {
        let mut cart = Cart::new();
        cart.add_item(product("a", 1000, None), None, None);
        let qty = cart.add_item(product("a", 1000, None), None, None);
        assert_eq!(qty, 2);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_add_item_clamps_at_maximum() {
        let mut cart = Cart::new();
        for _ in 0..15 {
            cart.add_item(product("a", 1000, None), None, None);
        }
        assert_eq!(cart.item_count(), MAX_QUANTITY_PER_ITEM);
    }

    #[test]
    fn test_add_item_keeps_variant_selection() {
        let mut cart = Cart::new();
        cart.add_item(
            product("a", 1000, None),
            Some("Titanium Blue".to_string()),
            Some("512GB".to_string()),
        );
        cart.add_item(product("a", 1000, None), None, None);

        let item = cart.get_item(&"a".into()).unwrap();
        assert_eq!(item.quantity, 2);
        assert_eq!(item.selected_color.as_deref(), Some("Titanium Blue"));
        assert_eq!(item.selected_storage.as_deref(), Some("512GB"));
    }

    #[test]
    fn test_update_quantity_clamps_both_ends() {
        let mut cart = Cart::new();
        cart.add_item(product("a", 1000, None), None, None);

        assert_eq!(cart.update_quantity(&"a".into(), 100).unwrap(), 10);
        assert_eq!(cart.update_quantity(&"a".into(), -100).unwrap(), 1);
        assert_eq!(cart.update_quantity(&"a".into(), -1).unwrap(), 1);
        assert_eq!(cart.update_quantity(&"a".into(), 3).unwrap(), 4);
    }

    #[test]
    fn test_update_quantity_on_absent_item_is_an_error() {
        let mut cart = Cart::new();
        let result = cart.update_quantity(&"ghost".into(), 1);
        assert!(matches!(result, Err(CommerceError::ProductNotFound(_))));
    }

    #[test]
    fn test_remove_item_is_noop_when_absent() {
        let mut cart = Cart::new();
        cart.add_item(product("a", 1000, None), None, None);

        let before = cart.clone();
        assert!(!cart.remove_item(&"ghost".into()));
        assert_eq!(cart, before);

        assert!(cart.remove_item(&"a".into()));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotals() {
        let mut cart = Cart::new();
        cart.add_item(product("a", 1000, Some(1200)), None, None);
        cart.update_quantity(&"a".into(), 1).unwrap();
        cart.add_item(product("b", 500, None), None, None);

        assert_eq!(cart.subtotal(), Money::rupees(2500));
        assert_eq!(cart.total_original(), Money::rupees(2900));
    }

    #[test]
    fn test_unit_price_ignores_storage_selection() {
        let mut p = Product::new("a", "a", "Acme", Category::Flagship, Money::rupees(1000));
        p.storage_options = vec![crate::catalog::StorageOption {
            size: "512GB".to_string(),
            price: Money::rupees(1500),
        }];
        let mut cart = Cart::new();
        cart.add_item(Arc::new(p), None, Some("512GB".to_string()));

        let item = cart.get_item(&"a".into()).unwrap();
        assert_eq!(item.unit_price(), Money::rupees(1000));
    }
}
