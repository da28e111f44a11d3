//! Persistence adapter: the whole catalog lives as one JSON array under a
//! single localStorage key. Every mutation is a read-modify-rewrite of the
//! full blob; the usage model is one user, one tab.

use chrono::{Duration, Utc};
use contracts::domain::error::CatalogError;
use contracts::domain::product::{Product, ProductDraft};
use web_sys::window;

const PRODUCTS_KEY: &str = "adminDashboardProducts";

fn get_local_storage() -> Result<web_sys::Storage, CatalogError> {
    window()
        .ok_or_else(|| CatalogError::Storage("no window".into()))?
        .local_storage()
        .map_err(|_| CatalogError::Storage("localStorage access was denied".into()))?
        .ok_or_else(|| CatalogError::Storage("localStorage is not available".into()))
}

/// Read the whole stored collection. A missing key means first run: the
/// demo catalog is written and returned. A present-but-unparseable blob is
/// a hard error, never a silent reseed.
pub fn load() -> Result<Vec<Product>, CatalogError> {
    let storage = get_local_storage()?;
    let raw = storage
        .get_item(PRODUCTS_KEY)
        .map_err(|_| CatalogError::Storage("localStorage read failed".into()))?;

    match raw {
        Some(json) => {
            serde_json::from_str(&json).map_err(|e| CatalogError::Persistence(e.to_string()))
        }
        None => {
            let seed = seed_products();
            save(&seed)?;
            log::info!("seeded catalog with {} demo products", seed.len());
            Ok(seed)
        }
    }
}

/// Overwrite the stored collection in a single write.
pub fn save(products: &[Product]) -> Result<(), CatalogError> {
    let storage = get_local_storage()?;
    let json =
        serde_json::to_string(products).map_err(|e| CatalogError::Persistence(e.to_string()))?;
    storage
        .set_item(PRODUCTS_KEY, &json)
        .map_err(|_| CatalogError::Storage("localStorage write failed".into()))
}

fn seed_product(
    name: &str,
    description: &str,
    tags: &[&str],
    price: f64,
    created_days_ago: i64,
    updated_days_ago: i64,
) -> Product {
    let mut product = Product::new(
        ProductDraft {
            name: name.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            price,
        },
        Utc::now() - Duration::days(created_days_ago),
    );
    product.updated_at = Utc::now() - Duration::days(updated_days_ago);
    product
}

/// Demo catalog written on first run, with staggered creation dates so the
/// newest-first ordering is visible out of the box.
fn seed_products() -> Vec<Product> {
    vec![
        seed_product(
            "Eco-Friendly Water Bottle",
            "Stay hydrated with this stylish and durable eco-friendly water bottle. Made from BPA-free materials.",
            &["eco-friendly", "reusable", "water bottle", "health"],
            24.99,
            5,
            2,
        ),
        seed_product(
            "Wireless Noise-Cancelling Headphones",
            "Immerse yourself in sound with these premium wireless headphones featuring active noise cancellation.",
            &["electronics", "audio", "headphones", "wireless", "travel"],
            199.50,
            10,
            1,
        ),
        seed_product(
            "Organic Cotton T-Shirt",
            "Comfortable and sustainable t-shirt made from 100% organic cotton. Soft and breathable.",
            &["apparel", "organic", "cotton", "t-shirt", "sustainable fashion"],
            35.00,
            3,
            3,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_three_distinct_products_with_staggered_dates() {
        let seed = seed_products();
        assert_eq!(seed.len(), 3);

        let mut ids: Vec<String> = seed.iter().map(|p| p.id.to_string()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);

        let mut created: Vec<_> = seed.iter().map(|p| p.created_at).collect();
        created.sort();
        created.dedup();
        assert_eq!(created.len(), 3);

        for product in &seed {
            assert!(product.updated_at >= product.created_at);
            assert!(product.price > 0.0);
            assert!(!product.tags.is_empty());
        }
    }
}
