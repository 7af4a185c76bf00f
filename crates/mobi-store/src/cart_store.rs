//! Cart state container.
//!
//! Owns the cart, the saved-for-later list, and the applied coupon, and
//! notifies subscribers after every change so the UI layer can
//! re-render badges and totals.

use std::fmt;
use std::sync::Arc;

use mobi_commerce::cart::{compute_totals, Cart, CartTotals, Coupon, CouponBook, PricingRules};
use mobi_commerce::catalog::Product;
use mobi_commerce::error::CommerceError;
use mobi_commerce::ids::ProductId;
use tracing::{debug, info, warn};

/// A change notification for the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    ItemAdded { product_id: ProductId, quantity: u32 },
    QuantityChanged { product_id: ProductId, quantity: u32 },
    ItemRemoved { product_id: ProductId },
    SavedForLater { product_id: ProductId },
    MovedToCart { product_id: ProductId },
    CouponApplied { code: String },
    CouponRemoved,
    Cleared,
}

type Listener = Box<dyn Fn(&CartEvent)>;

/// State container for the cart page and the navbar badge.
///
/// All operations apply synchronously on the UI thread; subscribers are
/// notified after the state change lands. Saved-for-later is a parallel
/// collection: items moved there drop out of the pricing computation
/// entirely.
pub struct CartStore {
    cart: Cart,
    saved: Vec<Arc<Product>>,
    applied_coupon: Option<Coupon>,
    book: CouponBook,
    rules: PricingRules,
    listeners: Vec<Listener>,
}

impl CartStore {
    /// Create an empty cart store over the static coupon table.
    pub fn new(book: CouponBook, rules: PricingRules) -> Self {
        Self {
            cart: Cart::new(),
            saved: Vec::new(),
            applied_coupon: None,
            book,
            rules,
            listeners: Vec::new(),
        }
    }

    /// Register a change listener.
    pub fn subscribe(&mut self, listener: impl Fn(&CartEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&self, event: CartEvent) {
        for listener in &self.listeners {
            listener(&event);
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn saved_for_later(&self) -> &[Arc<Product>] {
        &self.saved
    }

    pub fn applied_coupon(&self) -> Option<&Coupon> {
        self.applied_coupon.as_ref()
    }

    /// The authoritative pricing breakdown for the current state.
    pub fn totals(&self) -> CartTotals {
        compute_totals(&self.cart, self.applied_coupon.as_ref(), &self.rules)
    }

    /// Add a product, merging with an existing line item for the same
    /// product id. Returns the resulting quantity.
    pub fn add_item(
        &mut self,
        product: Arc<Product>,
        selected_color: Option<String>,
        selected_storage: Option<String>,
    ) -> u32 {
        let product_id = product.id.clone();
        let quantity = self.cart.add_item(product, selected_color, selected_storage);
        debug!(product = %product_id, quantity, "added to cart");
        self.emit(CartEvent::ItemAdded {
            product_id,
            quantity,
        });
        quantity
    }

    /// Adjust a line item's quantity by `delta`, clamped to [1, 10].
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        delta: i64,
    ) -> Result<u32, CommerceError> {
        let quantity = self.cart.update_quantity(product_id, delta)?;
        debug!(product = %product_id, quantity, "quantity updated");
        self.emit(CartEvent::QuantityChanged {
            product_id: product_id.clone(),
            quantity,
        });
        Ok(quantity)
    }

    /// Remove a line item. Removing an absent id is a no-op and emits
    /// nothing.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let removed = self.cart.remove_item(product_id);
        if removed {
            debug!(product = %product_id, "removed from cart");
            self.emit(CartEvent::ItemRemoved {
                product_id: product_id.clone(),
            });
        }
        removed
    }

    /// Move a line item to saved-for-later, removing it from pricing.
    pub fn move_to_saved(&mut self, product_id: &ProductId) -> bool {
        let Some(item) = self.cart.get_item(product_id) else {
            return false;
        };
        let product = item.product.clone();
        self.cart.remove_item(product_id);
        self.saved.push(product);
        debug!(product = %product_id, "saved for later");
        self.emit(CartEvent::SavedForLater {
            product_id: product_id.clone(),
        });
        true
    }

    /// Move a saved product back into the cart with quantity one.
    pub fn move_to_cart(&mut self, product_id: &ProductId) -> bool {
        let Some(pos) = self.saved.iter().position(|p| &p.id == product_id) else {
            return false;
        };
        let product = self.saved.remove(pos);
        self.cart.add_item(product, None, None);
        debug!(product = %product_id, "moved back to cart");
        self.emit(CartEvent::MovedToCart {
            product_id: product_id.clone(),
        });
        true
    }

    /// Apply a coupon code against the current subtotal.
    ///
    /// On success the new coupon replaces any previously applied one
    /// (only one coupon is active at a time). On failure nothing
    /// changes and the error carries the inline message.
    pub fn apply_coupon(&mut self, code: &str) -> Result<Coupon, CommerceError> {
        let subtotal = self.cart.subtotal();
        let coupon = match self.book.apply(code, subtotal) {
            Ok(coupon) => coupon.clone(),
            Err(err) => {
                warn!(code, %err, "coupon rejected");
                return Err(err);
            }
        };

        info!(code = %coupon.code, "coupon applied");
        self.applied_coupon = Some(coupon.clone());
        self.emit(CartEvent::CouponApplied {
            code: coupon.code.to_string(),
        });
        Ok(coupon)
    }

    /// Remove the applied coupon, if any.
    pub fn remove_coupon(&mut self) -> bool {
        if self.applied_coupon.take().is_some() {
            debug!("coupon removed");
            self.emit(CartEvent::CouponRemoved);
            true
        } else {
            false
        }
    }

    /// Empty the cart and drop the applied coupon.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.applied_coupon = None;
        self.emit(CartEvent::Cleared);
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("saved", &self.saved)
            .field("applied_coupon", &self.applied_coupon)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
