//! Shop page state.
//!
//! An explicit state container for the shop view: the current category,
//! filter, and sort selections plus the derived product list. Every
//! mutation recomputes the derivation synchronously, so the view always
//! renders a consistent snapshot.

use std::sync::Arc;

use mobi_commerce::catalog::{Catalog, Product};
use mobi_commerce::ids::ProductId;
use mobi_commerce::money::Money;
use mobi_commerce::query::{query, CategoryFilter, Feature, FilterSpec, SortOption};
use tracing::debug;

/// The derived product list, distinguishing "not yet computed" from a
/// computed-but-empty result.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryStatus {
    /// No derivation has run yet; the view shows skeletons.
    #[default]
    Loading,
    /// The derivation ran; the list may legitimately be empty.
    Ready(Vec<Product>),
}

impl QueryStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryStatus::Loading)
    }

    /// The visible products, if computed.
    pub fn products(&self) -> Option<&[Product]> {
        match self {
            QueryStatus::Loading => None,
            QueryStatus::Ready(products) => Some(products),
        }
    }
}

/// State container for the shop page.
#[derive(Debug, Clone)]
pub struct ShopState {
    catalog: Arc<Catalog>,
    category: CategoryFilter,
    filters: FilterSpec,
    sort: SortOption,
    wishlist: Vec<ProductId>,
    status: QueryStatus,
}

impl ShopState {
    /// Create shop state over a catalog snapshot. The product list
    /// starts in [`QueryStatus::Loading`] until the first refresh.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            category: CategoryFilter::All,
            filters: FilterSpec::default(),
            sort: SortOption::default(),
            wishlist: Vec::new(),
            status: QueryStatus::Loading,
        }
    }

    /// Recompute the visible product list from the current selections.
    pub fn refresh(&mut self) {
        let visible = query(&self.catalog, self.category, &self.filters, self.sort);
        debug!(count = visible.len(), "shop query recomputed");
        self.status = QueryStatus::Ready(visible);
    }

    pub fn status(&self) -> &QueryStatus {
        &self.status
    }

    /// The visible products, if the derivation has run.
    pub fn visible_products(&self) -> Option<&[Product]> {
        self.status.products()
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn filters(&self) -> &FilterSpec {
        &self.filters
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    /// Number of active filter selections, for the "Clear All" control.
    pub fn active_filter_count(&self) -> usize {
        self.filters.active_count()
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.refresh();
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
        self.refresh();
    }

    pub fn set_price_range(&mut self, min: Money, max: Money) {
        self.filters.price_range = (min, max);
        self.refresh();
    }

    /// Toggle a brand checkbox.
    pub fn toggle_brand(&mut self, brand: &str) {
        toggle(&mut self.filters.brands, brand.to_string());
        self.refresh();
    }

    /// Toggle a RAM checkbox.
    pub fn toggle_ram(&mut self, ram: &str) {
        toggle(&mut self.filters.ram, ram.to_string());
        self.refresh();
    }

    /// Toggle a storage checkbox.
    pub fn toggle_storage(&mut self, storage: &str) {
        toggle(&mut self.filters.storage, storage.to_string());
        self.refresh();
    }

    /// Toggle a feature checkbox.
    pub fn toggle_feature(&mut self, feature: Feature) {
        toggle(&mut self.filters.features, feature);
        self.refresh();
    }

    /// Reset every filter axis and the category selection.
    pub fn clear_filters(&mut self) {
        self.filters = FilterSpec::default();
        self.category = CategoryFilter::All;
        debug!("shop filters cleared");
        self.refresh();
    }

    pub fn wishlist(&self) -> &[ProductId] {
        &self.wishlist
    }

    pub fn is_wishlisted(&self, product_id: &ProductId) -> bool {
        self.wishlist.contains(product_id)
    }

    /// Toggle a product on the wishlist. Returns true if the product is
    /// now wishlisted.
    pub fn toggle_wishlist(&mut self, product_id: &ProductId) -> bool {
        if let Some(pos) = self.wishlist.iter().position(|id| id == product_id) {
            self.wishlist.remove(pos);
            debug!(product = %product_id, "removed from wishlist");
            false
        } else {
            self.wishlist.push(product_id.clone());
            debug!(product = %product_id, "added to wishlist");
            true
        }
    }
}

fn toggle<T: PartialEq>(selections: &mut Vec<T>, value: T) {
    if let Some(pos) = selections.iter().position(|v| *v == value) {
        selections.remove(pos);
    } else {
        selections.push(value);
    }
}
