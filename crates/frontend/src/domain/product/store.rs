//! In-memory half of the catalog: the signals the views render between
//! service calls. Mutations land here only after the service call has
//! succeeded; on failure the previous state stays and a banner message is
//! set instead.

use contracts::domain::product::catalog;
use contracts::domain::product::{Product, ProductDraft, ProductId};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::service;

#[derive(Clone, Copy)]
pub struct ProductStore {
    pub products: RwSignal<Vec<Product>>,
    pub loading: RwSignal<bool>,
    /// True once the initial fetch has completed, even with an empty or
    /// failed result. Distinguishes "no products yet" from "not fetched yet".
    pub loaded: RwSignal<bool>,
    /// Global banner message, rendered above every authenticated page
    pub error: RwSignal<Option<String>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            products: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            loaded: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Replace the in-memory list from storage. Keeps the previous list on
    /// failure; the loading flag is cleared on both paths.
    pub fn fetch(self) {
        self.loading.set(true);
        self.error.set(None);

        spawn_local(async move {
            match service::list().await {
                Ok(products) => self.products.set(products),
                Err(e) => {
                    log::error!("failed to fetch products: {}", e);
                    self.error.set(Some("Failed to fetch products.".to_string()));
                }
            }
            self.loading.set(false);
            self.loaded.set(true);
        });
    }

    /// Create a record; the in-memory list gains it only on success. The new
    /// record is the newest, so it goes to the front of the sorted list.
    pub async fn create(self, draft: ProductDraft) -> Result<(), String> {
        match service::create(draft).await {
            Ok(product) => {
                self.products.update(|products| products.insert(0, product));
                self.error.set(None);
                Ok(())
            }
            Err(e) => {
                log::error!("failed to add product: {}", e);
                self.error.set(Some("Failed to add product.".to_string()));
                Err(e.to_string())
            }
        }
    }

    pub async fn update(self, id: ProductId, draft: ProductDraft) -> Result<(), String> {
        match service::update(id, draft).await {
            Ok(updated) => {
                self.products.update(|products| {
                    if let Some(pos) = catalog::position_of(products, id) {
                        products[pos] = updated;
                    }
                });
                self.error.set(None);
                Ok(())
            }
            Err(e) => {
                log::error!("failed to update product {}: {}", id, e);
                self.error.set(Some("Failed to update product.".to_string()));
                Err(e.to_string())
            }
        }
    }

    pub async fn remove(self, id: ProductId) -> Result<(), String> {
        match service::delete(id).await {
            Ok(()) => {
                self.products.update(|products| {
                    catalog::remove_by_id(products, id);
                });
                self.error.set(None);
                Ok(())
            }
            Err(e) => {
                log::error!("failed to delete product {}: {}", id, e);
                self.error.set(Some("Failed to delete product.".to_string()));
                Err(e.to_string())
            }
        }
    }

    /// Logout teardown: forget the in-memory list and any banner. The
    /// persisted collection stays in localStorage.
    pub fn clear(self) {
        self.products.set(Vec::new());
        self.error.set(None);
        self.loading.set(false);
        self.loaded.set(false);
    }
}

/// Whether an edit view should keep its loading placeholder up instead of
/// declaring the record missing. Once a fetch has completed, an absent
/// record means gone, even when the catalog came back empty.
pub fn awaiting_record(record_present: bool, loading: bool, loaded: bool) -> bool {
    !record_present && (loading || !loaded)
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_product_store() -> ProductStore {
    use_context::<ProductStore>().expect("ProductStore not found in context")
}

#[cfg(test)]
mod tests {
    use super::awaiting_record;

    #[test]
    fn waits_while_fetch_in_flight() {
        assert!(awaiting_record(false, true, false));
        assert!(awaiting_record(false, true, true));
    }

    #[test]
    fn waits_before_first_fetch_completes() {
        assert!(awaiting_record(false, false, false));
    }

    #[test]
    fn empty_catalog_after_fetch_is_not_waiting() {
        // Missing record in a fetched (possibly empty) catalog: the record
        // is gone, the view must not keep a spinner up.
        assert!(!awaiting_record(false, false, true));
    }

    #[test]
    fn present_record_never_waits() {
        assert!(!awaiting_record(true, true, false));
        assert!(!awaiting_record(true, false, true));
    }
}
