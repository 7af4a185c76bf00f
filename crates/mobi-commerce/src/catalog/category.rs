//! Product categories.

use serde::{Deserialize, Serialize};

/// Product category in the store.
///
/// This is a closed set; every catalog record belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Premium flagship phones.
    Flagship,
    /// Entry and mid-range phones.
    Budget,
    /// Chargers, earbuds, cases, and other add-ons.
    Accessories,
    /// Certified refurbished devices.
    Refurbished,
}

impl Category {
    /// All categories, in storefront navigation order.
    pub const ALL: [Category; 4] = [
        Category::Flagship,
        Category::Budget,
        Category::Accessories,
        Category::Refurbished,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Flagship => "Flagship",
            Category::Budget => "Budget",
            Category::Accessories => "Accessories",
            Category::Refurbished => "Refurbished",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "flagship" => Some(Category::Flagship),
            "budget" => Some(Category::Budget),
            "accessories" => Some(Category::Accessories),
            "refurbished" => Some(Category::Refurbished),
            _ => None,
        }
    }

    /// Label shown in navigation.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Flagship => "Flagship",
            Category::Budget => "Budget",
            Category::Accessories => "Accessories",
            Category::Refurbished => "Refurbished",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Category::from_str("Flagship"), Some(Category::Flagship));
        assert_eq!(Category::from_str("budget"), Some(Category::Budget));
        assert_eq!(Category::from_str("unknown"), None);
    }

    #[test]
    fn test_all_covers_every_category() {
        for cat in Category::ALL {
            assert_eq!(Category::from_str(cat.as_str()), Some(cat));
        }
    }
}
