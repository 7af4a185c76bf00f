//! Product records and their variants.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Structured spec sheet for a product.
///
/// `ram` and `storage` are always present and drive the shop filters;
/// everything else is optional. A missing field means the product does
/// not have the corresponding feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductSpecs {
    /// RAM label (e.g., "8GB").
    pub ram: String,
    /// Storage label (e.g., "256GB").
    pub storage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_5g: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_wireless_charging: Option<bool>,
    /// Display refresh rate (e.g., "120Hz AMOLED").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_rate: Option<String>,
    /// Ingress protection rating (e.g., "IP68").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
}

/// A color option for a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorVariant {
    /// Color name (e.g., "Titanium Blue").
    pub name: String,
    /// Hex value for the swatch.
    pub hex: String,
    /// Color-specific image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A storage tier for a product.
///
/// The tier price replaces the base price when selected on the product
/// page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageOption {
    /// Storage label (e.g., "512GB").
    pub size: String,
    /// Price at this tier.
    pub price: Money,
}

/// A product in the catalog.
///
/// Products are immutable reference data, supplied once at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier, stable across the catalog.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Brand label, grouped for filtering.
    pub brand: String,
    /// Store category.
    pub category: Category,
    /// Current selling price.
    pub price: Money,
    /// Pre-discount reference price; at least `price` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Advertised discount percentage in [0, 100].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<u8>,
    /// Average rating in [0, 5].
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Short marketing description.
    pub description: String,
    /// Primary image URL.
    pub image: String,
    /// Gallery image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Whether the product can be purchased.
    pub in_stock: bool,
    /// Units remaining; absent means not tracked (unlimited).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_count: Option<u32>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_sale: bool,
    #[serde(default)]
    pub is_featured: bool,
    /// Spec sheet used by the shop filters.
    pub specs: ProductSpecs,
    /// Color options.
    #[serde(default)]
    pub colors: Vec<ColorVariant>,
    /// Storage tiers with their own prices.
    #[serde(default)]
    pub storage_options: Vec<StorageOption>,
}

impl Product {
    /// Create a product with the required fields; everything else starts
    /// at its default.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        brand: impl Into<String>,
        category: Category,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            category,
            price,
            original_price: None,
            discount_percentage: None,
            rating: 0.0,
            review_count: 0,
            description: String::new(),
            image: String::new(),
            images: Vec::new(),
            in_stock: true,
            stock_count: None,
            is_new: false,
            is_sale: false,
            is_featured: false,
            specs: ProductSpecs::default(),
            colors: Vec::new(),
            storage_options: Vec::new(),
        }
    }

    /// The pre-discount price, falling back to the selling price.
    pub fn effective_original_price(&self) -> Money {
        self.original_price.unwrap_or(self.price)
    }

    /// Per-unit markdown against the original price.
    pub fn savings(&self) -> Money {
        self.effective_original_price() - self.price
    }

    /// Whether this product belongs on a deals feed.
    pub fn has_deal(&self) -> bool {
        self.is_sale || self.discount_percentage.is_some()
    }

    /// Price for a selected storage tier, falling back to the base price
    /// when the tier is unknown.
    pub fn price_for_storage(&self, size: &str) -> Money {
        self.storage_options
            .iter()
            .find(|opt| opt.size == size)
            .map(|opt| opt.price)
            .unwrap_or(self.price)
    }

    /// Stock status message for listings.
    pub fn stock_status(&self) -> &'static str {
        if !self.in_stock {
            "Out of Stock"
        } else {
            match self.stock_count {
                Some(count) if count <= 5 => "Low Stock - Order Soon!",
                _ => "In Stock",
            }
        }
    }
}
