//! Product service: async CRUD over the persisted collection.
//!
//! Every operation awaits a fixed simulated latency so the loading states in
//! the UI are actually exercised. No field validation happens here; the form
//! validates before calling in.

use chrono::Utc;
use contracts::domain::error::CatalogError;
use contracts::domain::product::catalog;
use contracts::domain::product::{Product, ProductDraft, ProductId};
use gloo_timers::future::TimeoutFuture;

use super::repo;

const LATENCY_MS: u32 = 500;

async fn simulate_delay() {
    TimeoutFuture::new(LATENCY_MS).await;
}

/// Full collection, newest first.
pub async fn list() -> Result<Vec<Product>, CatalogError> {
    let mut products = repo::load()?;
    catalog::sort_newest_first(&mut products);
    simulate_delay().await;
    Ok(products)
}

pub async fn get_by_id(id: ProductId) -> Result<Option<Product>, CatalogError> {
    let products = repo::load()?;
    let found = catalog::find_by_id(&products, id).cloned();
    simulate_delay().await;
    Ok(found)
}

/// Append a new record and persist the collection.
pub async fn create(draft: ProductDraft) -> Result<Product, CatalogError> {
    let mut products = repo::load()?;
    let product = Product::new(draft, Utc::now());
    products.push(product.clone());
    repo::save(&products)?;
    simulate_delay().await;
    Ok(product)
}

/// Merge form values over an existing record. Fails with `NotFound` when
/// the id is absent from the collection.
pub async fn update(id: ProductId, draft: ProductDraft) -> Result<Product, CatalogError> {
    let mut products = repo::load()?;
    let pos = catalog::position_of(&products, id).ok_or(CatalogError::NotFound)?;
    products[pos].apply(draft, Utc::now());
    let updated = products[pos].clone();
    repo::save(&products)?;
    simulate_delay().await;
    Ok(updated)
}

/// Remove a record. Deleting an id that is already gone is a no-op.
pub async fn delete(id: ProductId) -> Result<(), CatalogError> {
    let mut products = repo::load()?;
    if !catalog::remove_by_id(&mut products, id) {
        log::debug!("delete: product {} already absent", id);
    }
    repo::save(&products)?;
    simulate_delay().await;
    Ok(())
}
