//! The mock product catalog.
//!
//! Fourteen records spanning every category, with enough spread across
//! brands, price points, and spec features to exercise every filter
//! axis.

use mobi_commerce::catalog::{Catalog, Category, ColorVariant, Product, StorageOption};
use mobi_commerce::error::CommerceError;
use mobi_commerce::money::Money;

fn base(
    id: &str,
    name: &str,
    brand: &str,
    category: Category,
    price: i64,
    rating: f64,
    review_count: u32,
) -> Product {
    let mut p = Product::new(id, name, brand, category, Money::rupees(price));
    p.rating = rating;
    p.review_count = review_count;
    p.image = format!("/images/products/{id}.jpg");
    p
}

fn color(name: &str, hex: &str) -> ColorVariant {
    ColorVariant {
        name: name.to_string(),
        hex: hex.to_string(),
        image: None,
    }
}

fn storage(size: &str, price: i64) -> StorageOption {
    StorageOption {
        size: size.to_string(),
        price: Money::rupees(price),
    }
}

/// Build the validated store catalog.
pub fn catalog() -> Result<Catalog, CommerceError> {
    let mut products = Vec::new();

    // ── Flagship ────────────────────────────────────────────────

    let mut p = base(
        "phone-s24u",
        "Galaxy S24 Ultra",
        "Samsung",
        Category::Flagship,
        129999,
        4.8,
        2341,
    );
    p.original_price = Some(Money::rupees(139999));
    p.discount_percentage = Some(7);
    p.description = "Samsung's top flagship with a 200MP camera and S Pen".to_string();
    p.is_featured = true;
    p.stock_count = Some(12);
    p.specs.ram = "12GB".to_string();
    p.specs.storage = "256GB".to_string();
    p.specs.display = Some("6.8\" QHD+ Dynamic AMOLED".to_string());
    p.specs.processor = Some("Snapdragon 8 Gen 3".to_string());
    p.specs.camera = Some("200MP + 50MP + 12MP + 10MP".to_string());
    p.specs.battery = Some("5000mAh".to_string());
    p.specs.os = Some("Android 14, One UI 6.1".to_string());
    p.specs.is_5g = Some(true);
    p.specs.has_wireless_charging = Some(true);
    p.specs.refresh_rate = Some("120Hz LTPO".to_string());
    p.specs.ip_rating = Some("IP68".to_string());
    p.colors = vec![
        color("Titanium Black", "#3b3b3b"),
        color("Titanium Gray", "#8a8d8f"),
        color("Titanium Violet", "#a99fc0"),
    ];
    p.storage_options = vec![
        storage("256GB", 129999),
        storage("512GB", 141999),
        storage("1TB", 159999),
    ];
    products.push(p);

    let mut p = base(
        "phone-ip15pro",
        "iPhone 15 Pro",
        "Apple",
        Category::Flagship,
        134900,
        4.9,
        3102,
    );
    p.description = "A17 Pro chip, titanium design, Action button".to_string();
    p.is_new = true;
    p.is_featured = true;
    p.stock_count = Some(8);
    p.specs.ram = "8GB".to_string();
    p.specs.storage = "128GB".to_string();
    p.specs.display = Some("6.1\" Super Retina XDR".to_string());
    p.specs.processor = Some("A17 Pro".to_string());
    p.specs.camera = Some("48MP + 12MP + 12MP".to_string());
    p.specs.battery = Some("3274mAh".to_string());
    p.specs.os = Some("iOS 17".to_string());
    p.specs.is_5g = Some(true);
    p.specs.has_wireless_charging = Some(true);
    p.specs.refresh_rate = Some("120Hz ProMotion".to_string());
    p.specs.ip_rating = Some("IP68".to_string());
    p.colors = vec![
        color("Natural Titanium", "#b4ad9f"),
        color("Blue Titanium", "#3e4a5c"),
    ];
    p.storage_options = vec![
        storage("128GB", 134900),
        storage("256GB", 144900),
        storage("512GB", 164900),
    ];
    products.push(p);

    let mut p = base(
        "phone-op12",
        "OnePlus 12",
        "OnePlus",
        Category::Flagship,
        64999,
        4.6,
        1876,
    );
    p.original_price = Some(Money::rupees(69999));
    p.discount_percentage = Some(7);
    p.is_sale = true;
    p.description = "Flagship killer with Hasselblad cameras and 100W charging".to_string();
    p.specs.ram = "16GB".to_string();
    p.specs.storage = "512GB".to_string();
    p.specs.display = Some("6.82\" 2K ProXDR AMOLED".to_string());
    p.specs.processor = Some("Snapdragon 8 Gen 3".to_string());
    p.specs.battery = Some("5400mAh".to_string());
    p.specs.is_5g = Some(true);
    p.specs.has_wireless_charging = Some(true);
    p.specs.refresh_rate = Some("120Hz LTPO".to_string());
    p.specs.ip_rating = Some("IP65".to_string());
    products.push(p);

    let mut p = base(
        "phone-pixel8p",
        "Pixel 8 Pro",
        "Google",
        Category::Flagship,
        106999,
        4.7,
        1432,
    );
    p.original_price = Some(Money::rupees(112999));
    p.discount_percentage = Some(5);
    p.is_new = true;
    p.description = "Google Tensor G3 with seven years of OS updates".to_string();
    p.specs.ram = "12GB".to_string();
    p.specs.storage = "128GB".to_string();
    p.specs.processor = Some("Tensor G3".to_string());
    p.specs.is_5g = Some(true);
    p.specs.has_wireless_charging = Some(true);
    p.specs.refresh_rate = Some("120Hz LTPO".to_string());
    p.specs.ip_rating = Some("IP68".to_string());
    p.colors = vec![color("Obsidian", "#1f1f1f"), color("Bay", "#a8c7e8")];
    products.push(p);

    // ── Budget ──────────────────────────────────────────────────

    let mut p = base(
        "phone-redmi13p",
        "Redmi Note 13 Pro",
        "Xiaomi",
        Category::Budget,
        23999,
        4.4,
        5210,
    );
    p.original_price = Some(Money::rupees(26999));
    p.discount_percentage = Some(11);
    p.is_sale = true;
    p.description = "200MP camera and fast charging at a midrange price".to_string();
    p.specs.ram = "8GB".to_string();
    p.specs.storage = "128GB".to_string();
    p.specs.is_5g = Some(true);
    p.specs.refresh_rate = Some("120Hz AMOLED".to_string());
    products.push(p);

    let mut p = base(
        "phone-realme12x",
        "realme 12x",
        "realme",
        Category::Budget,
        13999,
        4.2,
        3876,
    );
    p.original_price = Some(Money::rupees(15999));
    p.discount_percentage = Some(13);
    p.description = "Slim 5G phone with a 5000mAh battery".to_string();
    p.specs.ram = "6GB".to_string();
    p.specs.storage = "128GB".to_string();
    p.specs.is_5g = Some(true);
    p.specs.refresh_rate = Some("120Hz".to_string());
    products.push(p);

    let mut p = base(
        "phone-nothing2a",
        "Phone (2a)",
        "Nothing",
        Category::Budget,
        25999,
        4.5,
        2654,
    );
    p.is_new = true;
    p.description = "Glyph interface and a clean Nothing OS experience".to_string();
    p.specs.ram = "8GB".to_string();
    p.specs.storage = "256GB".to_string();
    p.specs.is_5g = Some(true);
    p.specs.refresh_rate = Some("120Hz AMOLED".to_string());
    products.push(p);

    let mut p = base(
        "phone-galaxym15",
        "Galaxy M15 5G",
        "Samsung",
        Category::Budget,
        13499,
        4.1,
        4123,
    );
    p.original_price = Some(Money::rupees(14999));
    p.discount_percentage = Some(10);
    p.description = "6000mAh battery with Samsung's 90Hz AMOLED panel".to_string();
    p.specs.ram = "6GB".to_string();
    p.specs.storage = "128GB".to_string();
    p.specs.is_5g = Some(true);
    p.specs.refresh_rate = Some("90Hz AMOLED".to_string());
    products.push(p);

    // ── Accessories ─────────────────────────────────────────────

    let mut p = base(
        "acc-buds3pro",
        "Galaxy Buds3 Pro",
        "Samsung",
        Category::Accessories,
        19999,
        4.5,
        876,
    );
    p.original_price = Some(Money::rupees(24999));
    p.discount_percentage = Some(20);
    p.is_sale = true;
    p.description = "ANC earbuds with 360 audio and a charging case".to_string();
    p.specs.ram = "N/A".to_string();
    p.specs.storage = "N/A".to_string();
    p.specs.has_wireless_charging = Some(true);
    p.specs.ip_rating = Some("IPX7".to_string());
    products.push(p);

    let mut p = base(
        "acc-airdopes441",
        "Airdopes 441",
        "boAt",
        Category::Accessories,
        1999,
        4.0,
        15234,
    );
    p.original_price = Some(Money::rupees(2999));
    p.discount_percentage = Some(33);
    p.is_sale = true;
    p.description = "TWS earbuds with IPX7 rating and 30-hour playback".to_string();
    p.specs.ram = "N/A".to_string();
    p.specs.storage = "N/A".to_string();
    p.specs.ip_rating = Some("IPX7".to_string());
    products.push(p);

    let mut p = base(
        "acc-jbl-flip6",
        "Flip 6",
        "JBL",
        Category::Accessories,
        9999,
        4.4,
        2876,
    );
    p.original_price = Some(Money::rupees(11999));
    p.discount_percentage = Some(17);
    p.is_featured = true;
    p.description = "Portable Bluetooth speaker with bold JBL Pro sound".to_string();
    p.specs.ram = "N/A".to_string();
    p.specs.storage = "N/A".to_string();
    p.specs.ip_rating = Some("IP67".to_string());
    products.push(p);

    // ── Refurbished ─────────────────────────────────────────────

    let mut p = base(
        "ref-ip13",
        "iPhone 13 (Renewed)",
        "Apple",
        Category::Refurbished,
        38999,
        4.3,
        892,
    );
    p.original_price = Some(Money::rupees(49999));
    p.discount_percentage = Some(22);
    p.description = "Certified renewed iPhone 13 with a 6-month warranty".to_string();
    p.stock_count = Some(5);
    p.specs.ram = "4GB".to_string();
    p.specs.storage = "128GB".to_string();
    p.specs.is_5g = Some(true);
    p.specs.has_wireless_charging = Some(true);
    p.specs.ip_rating = Some("IP68".to_string());
    p.specs.refresh_rate = Some("60Hz".to_string());
    products.push(p);

    let mut p = base(
        "ref-s21fe",
        "Galaxy S21 FE (Renewed)",
        "Samsung",
        Category::Refurbished,
        24999,
        4.2,
        654,
    );
    p.original_price = Some(Money::rupees(31999));
    p.discount_percentage = Some(22);
    p.is_sale = true;
    p.description = "Fan Edition flagship, professionally refurbished".to_string();
    p.specs.ram = "8GB".to_string();
    p.specs.storage = "128GB".to_string();
    p.specs.is_5g = Some(true);
    p.specs.has_wireless_charging = Some(true);
    p.specs.ip_rating = Some("IP68".to_string());
    p.specs.refresh_rate = Some("120Hz AMOLED".to_string());
    products.push(p);

    let mut p = base(
        "ref-op9",
        "OnePlus 9 (Renewed)",
        "OnePlus",
        Category::Refurbished,
        21999,
        4.1,
        445,
    );
    p.original_price = Some(Money::rupees(28999));
    p.discount_percentage = Some(24);
    p.description = "Renewed OnePlus 9 with Hasselblad color tuning".to_string();
    p.stock_count = Some(3);
    p.specs.ram = "8GB".to_string();
    p.specs.storage = "256GB".to_string();
    p.specs.is_5g = Some(true);
    p.specs.has_wireless_charging = Some(true);
    p.specs.refresh_rate = Some("120Hz".to_string());
    products.push(p);

    Catalog::new(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mobi_commerce::query::{query, CategoryFilter, FilterSpec, SortOption};

    #[test]
    fn test_catalog_passes_boundary_validation() {
        let catalog = catalog().unwrap();
        assert_eq!(catalog.len(), 14);
    }

    #[test]
    fn test_every_category_is_stocked() {
        let catalog = catalog().unwrap();
        for category in Category::ALL {
            assert!(
                catalog.category_count(category) > 0,
                "no products in {}",
                category.as_str()
            );
        }
    }

    #[test]
    fn test_default_filters_show_the_whole_catalog() {
        let catalog = catalog().unwrap();
        let visible = query(
            &catalog,
            CategoryFilter::All,
            &FilterSpec::default(),
            SortOption::Newest,
        );
        assert_eq!(visible.len(), catalog.len());
    }

    #[test]
    fn test_brand_list_is_sorted_and_distinct() {
        let brands = catalog().unwrap().brands();
        assert!(brands.contains(&"Samsung".to_string()));
        assert!(brands.contains(&"boAt".to_string()));
        let mut sorted = brands.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(brands, sorted);
    }
}
