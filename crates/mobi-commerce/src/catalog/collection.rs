//! The validated catalog collection.

use std::collections::HashSet;

use crate::catalog::{Category, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// The full static set of products available to the store.
///
/// Construction validates every record once, so downstream code can rely
/// on the invariants (`original_price >= price`, rating and discount in
/// range, unique ids) instead of re-checking them at each use site.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from product records, validating at the boundary.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::new();
        for product in &products {
            validate(product)?;
            if !seen.insert(product.id.clone()) {
                return Err(CommerceError::Validation(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products in a category, for navigation badges.
    pub fn category_count(&self, category: Category) -> usize {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .count()
    }

    /// Distinct brand labels, sorted, for the filter panel.
    pub fn brands(&self) -> Vec<String> {
        let mut brands: Vec<String> = self
            .products
            .iter()
            .map(|p| p.brand.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        brands.sort();
        brands
    }
}

fn validate(product: &Product) -> Result<(), CommerceError> {
    if product.price.amount < 0 {
        return Err(CommerceError::Validation(format!(
            "product {} has a negative price",
            product.id
        )));
    }
    if !(0.0..=5.0).contains(&product.rating) {
        return Err(CommerceError::Validation(format!(
            "product {} rating {} outside [0, 5]",
            product.id, product.rating
        )));
    }
    if let Some(pct) = product.discount_percentage {
        if pct > 100 {
            return Err(CommerceError::Validation(format!(
                "product {} discount {}% outside [0, 100]",
                product.id, pct
            )));
        }
    }
    if let Some(original) = product.original_price {
        if original.amount < product.price.amount {
            return Err(CommerceError::Validation(format!(
                "product {} original price below selling price",
                product.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: &str, brand: &str, category: Category, price: i64) -> Product {
        let mut p = Product::new(id, id, brand, category, Money::rupees(price));
        p.rating = 4.2;
        p
    }

    #[test]
    fn test_catalog_accepts_valid_products() {
        let catalog = Catalog::new(vec![
            product("a", "Samsung", Category::Flagship, 100000),
            product("b", "Xiaomi", Category::Budget, 15000),
        ])
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get(&"a".into()).is_some());
        assert!(catalog.get(&"missing".into()).is_none());
    }

    #[test]
    fn test_catalog_rejects_duplicate_ids() {
        let result = Catalog::new(vec![
            product("a", "Samsung", Category::Flagship, 100000),
            product("a", "Samsung", Category::Flagship, 90000),
        ]);
        assert!(matches!(result, Err(CommerceError::Validation(_))));
    }

    #[test]
    fn test_catalog_rejects_bad_rating() {
        let mut p = product("a", "Samsung", Category::Flagship, 100000);
        p.rating = 5.5;
        assert!(matches!(
            Catalog::new(vec![p]),
            Err(CommerceError::Validation(_))
        ));
    }

    #[test]
    fn test_catalog_rejects_original_below_price() {
        let mut p = product("a", "Samsung", Category::Flagship, 100000);
        p.original_price = Some(Money::rupees(90000));
        assert!(matches!(
            Catalog::new(vec![p]),
            Err(CommerceError::Validation(_))
        ));
    }

    #[test]
    fn test_catalog_rejects_excess_discount() {
        let mut p = product("a", "Samsung", Category::Flagship, 100000);
        p.discount_percentage = Some(101);
        assert!(matches!(
            Catalog::new(vec![p]),
            Err(CommerceError::Validation(_))
        ));
    }

    #[test]
    fn test_category_count_and_brands() {
        let catalog = Catalog::new(vec![
            product("a", "Samsung", Category::Flagship, 100000),
            product("b", "Samsung", Category::Budget, 15000),
            product("c", "Apple", Category::Flagship, 140000),
        ])
        .unwrap();

        assert_eq!(catalog.category_count(Category::Flagship), 2);
        assert_eq!(catalog.category_count(Category::Refurbished), 0);
        assert_eq!(catalog.brands(), vec!["Apple", "Samsung"]);
    }
}
