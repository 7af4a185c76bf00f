//! Shop filter types.

use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A feature tag selectable in the shop's filter panel.
///
/// Closed set; each tag maps to one spec predicate. A product with a
/// missing or malformed spec field simply does not have the feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    /// 5G connectivity.
    FiveG,
    /// Qi wireless charging.
    WirelessCharging,
    /// Any ingress protection rating.
    IpRating,
    /// 120Hz-class display.
    HighRefreshRate,
}

impl Feature {
    /// All feature tags, in filter panel order.
    pub const ALL: [Feature; 4] = [
        Feature::FiveG,
        Feature::WirelessCharging,
        Feature::IpRating,
        Feature::HighRefreshRate,
    ];

    /// Label shown in the filter panel.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::FiveG => "5G",
            Feature::WirelessCharging => "Wireless Charging",
            Feature::IpRating => "IP Rating",
            Feature::HighRefreshRate => "High Refresh Rate",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Feature::ALL.into_iter().find(|f| f.label() == label)
    }

    /// Whether a product satisfies this feature predicate.
    pub fn matches(&self, product: &Product) -> bool {
        let specs = &product.specs;
        match self {
            Feature::FiveG => specs.is_5g.unwrap_or(false),
            Feature::WirelessCharging => specs.has_wireless_charging.unwrap_or(false),
            Feature::IpRating => specs
                .ip_rating
                .as_deref()
                .map(|r| !r.is_empty())
                .unwrap_or(false),
            Feature::HighRefreshRate => specs
                .refresh_rate
                .as_deref()
                .map(|r| r.contains("120Hz"))
                .unwrap_or(false),
        }
    }
}

/// The filter selections that narrow the catalog.
///
/// An empty set on any axis means "no restriction on this axis".
/// Brand, RAM, and storage match by inclusion; feature tags are ANDed
/// (a product must satisfy every selected feature).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterSpec {
    /// Inclusive price range `[min, max]`. An inverted range (min > max)
    /// is an empty range: nothing passes.
    pub price_range: (Money, Money),
    /// Selected brand labels.
    pub brands: Vec<String>,
    /// Selected RAM labels.
    pub ram: Vec<String>,
    /// Selected storage labels.
    pub storage: Vec<String>,
    /// Selected feature tags.
    pub features: Vec<Feature>,
}

/// Upper bound of the shop's price slider.
pub(crate) const PRICE_SLIDER_MAX: i64 = 200_000;

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            price_range: (Money::rupees(0), Money::rupees(PRICE_SLIDER_MAX)),
            brands: Vec::new(),
            ram: Vec::new(),
            storage: Vec::new(),
            features: Vec::new(),
        }
    }
}

impl FilterSpec {
    /// Set the inclusive price range.
    pub fn with_price_range(mut self, min: Money, max: Money) -> Self {
        self.price_range = (min, max);
        self
    }

    /// Add a brand selection.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brands.push(brand.into());
        self
    }

    /// Add a RAM selection.
    pub fn with_ram(mut self, ram: impl Into<String>) -> Self {
        self.ram.push(ram.into());
        self
    }

    /// Add a storage selection.
    pub fn with_storage(mut self, storage: impl Into<String>) -> Self {
        self.storage.push(storage.into());
        self
    }

    /// Add a feature tag.
    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    /// Number of active selections, shown on the "Clear All" control.
    pub fn active_count(&self) -> usize {
        self.brands.len() + self.ram.len() + self.storage.len() + self.features.len()
    }

    /// Whether a product passes every axis of this spec.
    pub fn matches(&self, product: &Product) -> bool {
        let (min, max) = self.price_range;
        let in_price_range =
            product.price.amount >= min.amount && product.price.amount <= max.amount;

        let matches_brand = self.brands.is_empty() || self.brands.contains(&product.brand);
        let matches_ram = self.ram.is_empty() || self.ram.contains(&product.specs.ram);
        let matches_storage =
            self.storage.is_empty() || self.storage.contains(&product.specs.storage);
        let matches_features = self.features.iter().all(|f| f.matches(product));

        in_price_range && matches_brand && matches_ram && matches_storage && matches_features
    }
}
