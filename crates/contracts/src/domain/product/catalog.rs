//! Pure operations over the in-memory product collection.
//!
//! The collection is persisted as one blob, so every mutation works on the
//! whole `Vec` and the caller rewrites storage afterwards.

use super::aggregate::{Product, ProductId};

/// Sort newest first, by creation timestamp.
pub fn sort_newest_first(products: &mut [Product]) {
    products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

pub fn find_by_id(products: &[Product], id: ProductId) -> Option<&Product> {
    products.iter().find(|p| p.id == id)
}

pub fn position_of(products: &[Product], id: ProductId) -> Option<usize> {
    products.iter().position(|p| p.id == id)
}

/// Remove a record if present. Returns whether anything was removed;
/// deleting an absent id is a no-op by contract.
pub fn remove_by_id(products: &mut Vec<Product>, id: ProductId) -> bool {
    let before = products.len();
    products.retain(|p| p.id != id);
    products.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::ProductDraft;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn product(name: &str, created_secs: i64) -> Product {
        Product::new(
            ProductDraft {
                name: name.into(),
                description: format!("{} description", name),
                tags: vec![],
                price: 10.0,
            },
            at(created_secs),
        )
    }

    #[test]
    fn sort_is_newest_first_regardless_of_insertion_order() {
        let mut products = vec![product("middle", 50), product("old", 0), product("new", 100)];
        sort_newest_first(&mut products);
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["new", "middle", "old"]);
    }

    #[test]
    fn find_and_position_agree() {
        let products = vec![product("a", 0), product("b", 1)];
        let id = products[1].id;
        assert_eq!(find_by_id(&products, id).unwrap().name, "b");
        assert_eq!(position_of(&products, id), Some(1));
        assert!(find_by_id(&products, ProductId::new_v4()).is_none());
    }

    #[test]
    fn remove_is_idempotent() {
        let mut products = vec![product("a", 0), product("b", 1)];
        let id = products[0].id;

        assert!(remove_by_id(&mut products, id));
        assert_eq!(products.len(), 1);
        assert!(find_by_id(&products, id).is_none());

        // Second delete of the same id: no-op, not an error
        assert!(!remove_by_id(&mut products, id));
        assert_eq!(products.len(), 1);
    }

    #[test]
    fn collection_round_trips_through_json() {
        let mut products = vec![product("a", 0), product("b", 1), product("c", 2)];
        products[1].tags = vec!["x".into(), "y".into()];

        let blob = serde_json::to_string(&products).unwrap();
        let back: Vec<Product> = serde_json::from_str(&blob).unwrap();
        assert_eq!(back, products);
    }
}
