//! The catalog query engine.

use crate::catalog::{Catalog, Category, Product};
use crate::ids::ProductId;
use crate::money::Money;
use crate::query::{FilterSpec, SortOption};
use serde::{Deserialize, Serialize};

/// Category selection on the shop page: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// "All Products".
    #[default]
    All,
    /// A single category.
    Only(Category),
}

impl CategoryFilter {
    /// Parse the shop page's selection value ("All" or a category name).
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("all") {
            Some(CategoryFilter::All)
        } else {
            Category::from_str(s).map(CategoryFilter::Only)
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }
}

/// Derive the ordered, visible product list for the shop page.
///
/// Filtering is an AND across every axis (category, price range, brands,
/// RAM, storage, feature tags); the sort is stable and applied after
/// filtering. The derivation is pure: identical arguments always yield a
/// list-equal result, and an empty result is a valid outcome, not an
/// error.
pub fn query(
    catalog: &Catalog,
    category: CategoryFilter,
    filters: &FilterSpec,
    sort: SortOption,
) -> Vec<Product> {
    let mut visible: Vec<Product> = catalog
        .iter()
        .filter(|p| category.matches(p) && filters.matches(p))
        .cloned()
        .collect();
    sort.apply(&mut visible);
    visible
}

/// A search suggestion row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub category: Category,
    pub price: Money,
    pub image: String,
}

impl Suggestion {
    fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            category: product.category,
            price: product.price,
            image: product.image.clone(),
        }
    }
}

/// Derive search-bar suggestions for a (debounced) text query.
///
/// Matches case-insensitively against name, brand, and description,
/// optionally narrowed to a category and brand, and returns the first
/// `limit` hits in catalog order. Blank input yields no suggestions.
pub fn suggest(
    catalog: &Catalog,
    text: &str,
    category: CategoryFilter,
    brand: Option<&str>,
    limit: usize,
) -> Vec<Suggestion> {
    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() {
        return Vec::new();
    }

    catalog
        .iter()
        .filter(|p| {
            let matches_text = p.name.to_lowercase().contains(&normalized)
                || p.brand.to_lowercase().contains(&normalized)
                || p.description.to_lowercase().contains(&normalized);
            let matches_brand = brand.map(|b| p.brand == b).unwrap_or(true);
            matches_text && category.matches(p) && matches_brand
        })
        .take(limit)
        .map(Suggestion::from_product)
        .collect()
}
