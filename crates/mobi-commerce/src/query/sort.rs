//! Sort options for the shop listing.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Sort order applied after filtering.
///
/// Every variant is a stable sort, so products that compare equal keep
/// their catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Ascending by price.
    #[serde(rename = "price-low")]
    PriceLowToHigh,
    /// Descending by price.
    #[serde(rename = "price-high")]
    PriceHighToLow,
    /// Descending by rating.
    #[serde(rename = "rating")]
    Rating,
    /// New arrivals first.
    ///
    /// The catalog has no timestamp field, so this is a stable partition
    /// on the `is_new` flag rather than a recency sort.
    #[default]
    #[serde(rename = "newest")]
    Newest,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::PriceLowToHigh => "price-low",
            SortOption::PriceHighToLow => "price-high",
            SortOption::Rating => "rating",
            SortOption::Newest => "newest",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "price-low" => Some(SortOption::PriceLowToHigh),
            "price-high" => Some(SortOption::PriceHighToLow),
            "rating" => Some(SortOption::Rating),
            "newest" => Some(SortOption::Newest),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::PriceLowToHigh => "Price: Low to High",
            SortOption::PriceHighToLow => "Price: High to Low",
            SortOption::Rating => "Highest Rated",
            SortOption::Newest => "Newest",
        }
    }

    /// Sort products in place.
    pub fn apply(&self, products: &mut [Product]) {
        match self {
            SortOption::PriceLowToHigh => products.sort_by_key(|p| p.price.amount),
            SortOption::PriceHighToLow => {
                products.sort_by(|a, b| b.price.amount.cmp(&a.price.amount))
            }
            SortOption::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortOption::Newest => products.sort_by_key(|p| !p.is_new),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::money::Money;

    fn phone(id: &str, price: i64, rating: f64, is_new: bool) -> Product {
        let mut p = Product::new(id, id, "Acme", Category::Budget, Money::rupees(price));
        p.rating = rating;
        p.is_new = is_new;
        p
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_price_low_to_high() {
        let mut products = vec![
            phone("a", 300, 4.0, false),
            phone("b", 100, 4.0, false),
            phone("c", 200, 4.0, false),
        ];
        SortOption::PriceLowToHigh.apply(&mut products);
        assert_eq!(ids(&products), ["b", "c", "a"]);
        for pair in products.windows(2) {
            assert!(pair[0].price.amount <= pair[1].price.amount);
        }
    }

    #[test]
    fn test_price_high_to_low() {
        let mut products = vec![
            phone("a", 300, 4.0, false),
            phone("b", 100, 4.0, false),
            phone("c", 200, 4.0, false),
        ];
        SortOption::PriceHighToLow.apply(&mut products);
        assert_eq!(ids(&products), ["a", "c", "b"]);
    }

    #[test]
    fn test_rating_descending() {
        let mut products = vec![
            phone("a", 100, 4.1, false),
            phone("b", 100, 4.8, false),
            phone("c", 100, 4.5, false),
        ];
        SortOption::Rating.apply(&mut products);
        assert_eq!(ids(&products), ["b", "c", "a"]);
    }

    #[test]
    fn test_newest_is_a_stable_partition() {
        let mut products = vec![
            phone("a", 100, 4.0, false),
            phone("b", 100, 4.0, true),
            phone("c", 100, 4.0, false),
            phone("d", 100, 4.0, true),
        ];
        SortOption::Newest.apply(&mut products);
        // New products first; within each partition the original relative
        // order is preserved.
        assert_eq!(ids(&products), ["b", "d", "a", "c"]);
    }

    #[test]
    fn test_equal_prices_keep_catalog_order() {
        let mut products = vec![
            phone("a", 100, 4.0, false),
            phone("b", 100, 4.0, false),
            phone("c", 50, 4.0, false),
        ];
        SortOption::PriceLowToHigh.apply(&mut products);
        assert_eq!(ids(&products), ["c", "a", "b"]);
    }

    #[test]
    fn test_round_trip_names() {
        for opt in [
            SortOption::PriceLowToHigh,
            SortOption::PriceHighToLow,
            SortOption::Rating,
            SortOption::Newest,
        ] {
            assert_eq!(SortOption::from_str(opt.as_str()), Some(opt));
        }
        assert_eq!(SortOption::from_str("relevance"), None);
    }
}
