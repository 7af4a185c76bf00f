//! UI-facing state containers for the MobiMart storefront.
//!
//! The domain core in `mobi-commerce` is pure; this crate owns the
//! mutable state the views bind to and keeps it consistent:
//!
//! - [`ShopState`]: filter/sort selections and the derived product list
//! - [`CartStore`]: the cart, saved-for-later, the applied coupon, and
//!   change notifications for the UI layer
//! - [`SearchDebouncer`]: keystroke debouncing for search suggestions
//! - [`StoreConfig`]: tunable constants with TOML/JSON loading
//!
//! Everything runs on the UI thread; state changes apply synchronously
//! in event order.

pub mod cart_store;
pub mod config;
pub mod error;
pub mod search;
pub mod shop;

pub use cart_store::{CartEvent, CartStore};
pub use config::{PricingConfig, SearchConfig, StoreConfig};
pub use error::StoreError;
pub use search::SearchDebouncer;
pub use shop::{QueryStatus, ShopState};
