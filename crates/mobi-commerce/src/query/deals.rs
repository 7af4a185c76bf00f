//! Deal and merchandising feeds.
//!
//! Pure derivations over the catalog backing the deals page and the
//! homepage rails. Each returns products in catalog order unless the
//! feed is explicitly ranked.

use crate::catalog::{Catalog, Category, Product};

/// Products flagged as on sale.
pub fn on_sale(catalog: &Catalog) -> Vec<Product> {
    catalog.iter().filter(|p| p.is_sale).cloned().collect()
}

/// Deals within one category: on sale or carrying an advertised discount.
pub fn deals_in(catalog: &Catalog, category: Category) -> Vec<Product> {
    catalog
        .iter()
        .filter(|p| p.category == category && p.has_deal())
        .cloned()
        .collect()
}

/// The steepest advertised discounts, ranked descending, capped at
/// `limit`. Ties keep catalog order.
pub fn biggest_savers(catalog: &Catalog, limit: usize) -> Vec<Product> {
    let mut ranked: Vec<Product> = catalog
        .iter()
        .filter(|p| p.discount_percentage.is_some())
        .cloned()
        .collect();
    ranked.sort_by(|a, b| {
        b.discount_percentage
            .unwrap_or(0)
            .cmp(&a.discount_percentage.unwrap_or(0))
    });
    ranked.truncate(limit);
    ranked
}

/// Products flagged as new arrivals.
pub fn new_arrivals(catalog: &Catalog) -> Vec<Product> {
    catalog.iter().filter(|p| p.is_new).cloned().collect()
}

/// Products curated for the featured rail.
pub fn featured(catalog: &Catalog) -> Vec<Product> {
    catalog.iter().filter(|p| p.is_featured).cloned().collect()
}

/// Highly rated products, capped at `limit`.
pub fn trending(catalog: &Catalog, min_rating: f64, limit: usize) -> Vec<Product> {
    catalog
        .iter()
        .filter(|p| p.rating >= min_rating)
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: &str, category: Category) -> Product {
        let mut p = Product::new(id, id, "Acme", category, Money::rupees(10000));
        p.rating = 4.0;
        p
    }

    fn fixture() -> Catalog {
        let mut a = product("a", Category::Flagship);
        a.is_sale = true;
        a.discount_percentage = Some(10);
        let mut b = product("b", Category::Flagship);
        b.discount_percentage = Some(25);
        let mut c = product("c", Category::Budget);
        c.is_sale = true;
        let mut d = product("d", Category::Accessories);
        d.rating = 4.7;
        d.is_new = true;
        let mut e = product("e", Category::Refurbished);
        e.discount_percentage = Some(25);
        e.is_featured = true;
        e.rating = 4.6;
        Catalog::new(vec![a, b, c, d, e]).unwrap()
    }

    #[test]
    fn test_on_sale_uses_the_flag_only() {
        let ids: Vec<String> = on_sale(&fixture()).iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn test_deals_in_accepts_flag_or_discount() {
        let ids: Vec<String> = deals_in(&fixture(), Category::Flagship)
            .iter()
            .map(|p| p.id.to_string())
            .collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_biggest_savers_ranked_with_stable_ties() {
        let ids: Vec<String> = biggest_savers(&fixture(), 6)
            .iter()
            .map(|p| p.id.to_string())
            .collect();
        // b and e tie at 25%; b comes first in catalog order.
        assert_eq!(ids, ["b", "e", "a"]);

        assert_eq!(biggest_savers(&fixture(), 2).len(), 2);
    }

    #[test]
    fn test_merchandising_rails() {
        let catalog = fixture();
        assert_eq!(new_arrivals(&catalog).len(), 1);
        assert_eq!(featured(&catalog).len(), 1);

        let hot: Vec<String> = trending(&catalog, 4.5, 8)
            .iter()
            .map(|p| p.id.to_string())
            .collect();
        assert_eq!(hot, ["d", "e"]);
    }
}
