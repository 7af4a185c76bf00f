//! Catalog query module.
//!
//! Pure, deterministic derivations over the catalog: the shop page's
//! filter/sort pipeline, search suggestions, and the deal feeds.

mod deals;
mod engine;
mod filter;
mod sort;

pub use deals::{biggest_savers, deals_in, featured, new_arrivals, on_sale, trending};
pub use engine::{query, suggest, CategoryFilter, Suggestion};
pub use filter::{Feature, FilterSpec};
pub use sort::SortOption;
