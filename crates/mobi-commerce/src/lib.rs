//! Storefront domain types and logic for MobiMart.
//!
//! This crate provides the in-memory core of the MobiMart phone store:
//!
//! - **Catalog**: Products, specs, variants, categories, boundary validation
//! - **Query**: Deterministic filtering, sorting, search suggestions, deal feeds
//! - **Cart**: Shopping cart with line items, coupons, pricing breakdown
//!
//! Everything here is pure data and pure functions: no I/O, no network,
//! no persistence. The catalog is supplied once at startup and treated as
//! read-only; carts and filter state are owned by the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use mobi_commerce::prelude::*;
//!
//! let visible = query(
//!     &catalog,
//!     CategoryFilter::Only(Category::Flagship),
//!     &FilterSpec::default().with_feature(Feature::FiveG),
//!     SortOption::PriceLowToHigh,
//! );
//!
//! let mut cart = Cart::new();
//! cart.add_item(product, None, None);
//! let totals = compute_totals(&cart, None, &PricingRules::default());
//! println!("Total: {}", totals.total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod query;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Catalog, Category, ColorVariant, Product, ProductSpecs, StorageOption,
    };

    // Query
    pub use crate::query::{
        query, suggest, CategoryFilter, Feature, FilterSpec, SortOption, Suggestion,
    };

    // Cart
    pub use crate::cart::{
        compute_totals, Cart, CartTotals, Coupon, CouponBook, CouponValue, LineItem,
        PricingRules, MAX_QUANTITY_PER_ITEM, MIN_QUANTITY_PER_ITEM,
    };
}
