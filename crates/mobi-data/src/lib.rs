//! Static reference data for the MobiMart storefront.
//!
//! The catalog and coupon table are fixed, in-memory mock data supplied
//! once at process start and read-only thereafter. There is no loading
//! mechanism behind them; this crate *is* the data source.

mod coupons;
mod products;

pub use coupons::coupons;
pub use products::catalog;
