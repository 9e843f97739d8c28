//! The catalog store: the authoritative ordered product sequence.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::catalog::{seed, Product, ProductField, SortKey};
use crate::error::CatalogError;
use crate::ids::ProductId;

/// An in-memory, ordered collection of products with unique ids.
///
/// Insertion order is the display order until [`sort_by`](Self::sort_by)
/// reorders it. Every mutation validates first and only then changes the
/// sequence, so a failed call leaves the store untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogStore {
    products: Vec<Product>,
    active_sort: Option<SortKey>,
}

impl CatalogStore {
    /// Create a store from a seed, rejecting invalid records and repeated ids.
    pub fn new(seed: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(seed.len());
        for product in &seed {
            product.validate()?;
            if !seen.insert(product.id) {
                return Err(duplicate_id(product.id));
            }
        }
        debug!(len = seed.len(), "catalog seeded");
        Ok(Self {
            products: seed,
            active_sort: None,
        })
    }

    /// Create a store holding the built-in five products.
    pub fn with_default_seed() -> Self {
        Self {
            products: seed::default_seed(),
            active_sort: None,
        }
    }

    /// Append a product.
    pub fn add(&mut self, product: Product) -> Result<(), CatalogError> {
        product.validate()?;
        if self.contains(product.id) {
            return Err(duplicate_id(product.id));
        }

        let id = product.id;
        self.products.push(product);
        self.active_sort = None;
        debug!(product_id = %id, len = self.products.len(), "product added");
        Ok(())
    }

    /// Remove the product with `id` and return it.
    pub fn remove(&mut self, id: ProductId) -> Result<Product, CatalogError> {
        let Some(index) = self.position(id) else {
            warn!(product_id = %id, "remove skipped: product not found");
            return Err(CatalogError::NotFound(id));
        };

        let removed = self.products.remove(index);
        debug!(product_id = %id, len = self.products.len(), "product removed");
        Ok(removed)
    }

    /// Replace the product with `id` wholesale, keeping its position.
    ///
    /// `product` may carry a new id as long as no other record uses it.
    pub fn update(&mut self, id: ProductId, product: Product) -> Result<(), CatalogError> {
        let Some(index) = self.position(id) else {
            warn!(product_id = %id, "update skipped: product not found");
            return Err(CatalogError::NotFound(id));
        };

        product.validate()?;
        if product.id != id && self.contains(product.id) {
            return Err(duplicate_id(product.id));
        }

        let new_id = product.id;
        self.products[index] = product;
        self.active_sort = None;
        debug!(product_id = %id, new_id = %new_id, "product updated");
        Ok(())
    }

    /// Reorder the whole catalog ascending by `key`.
    pub fn sort_by(&mut self, key: SortKey) -> &[Product] {
        key.apply(&mut self.products);
        self.active_sort = Some(key);
        info!(key = %key, len = self.products.len(), "catalog sorted");
        &self.products
    }

    /// Look up a product.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.position(id).is_some()
    }

    /// Current index of the product with `id`.
    pub fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }

    /// Products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Ids in display order.
    pub fn ids(&self) -> Vec<ProductId> {
        self.products.iter().map(|p| p.id).collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The sort last applied, if the order still reflects it.
    pub fn active_sort(&self) -> Option<SortKey> {
        self.active_sort
    }
}

fn duplicate_id(id: ProductId) -> CatalogError {
    CatalogError::invalid(ProductField::Id, format!("{id} is already in use"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Price;

    fn product(id: i64, cents: i64) -> Product {
        Product::new(id, format!("Product {id}"), Price::from_cents(cents).unwrap())
    }

    fn ids(store: &CatalogStore) -> Vec<i64> {
        store.ids().into_iter().map(ProductId::get).collect()
    }

    #[test]
    fn test_seeded_store() {
        let store = CatalogStore::with_default_seed();
        assert_eq!(store.len(), 5);
        assert_eq!(ids(&store), vec![1, 2, 3, 4, 5]);
        assert_eq!(store.active_sort(), None);
    }

    #[test]
    fn test_new_rejects_duplicate_seed_ids() {
        let err = CatalogStore::new(vec![product(1, 100), product(1, 200)]).unwrap_err();
        assert_eq!(err.fields(), vec![ProductField::Id]);
    }

    #[test]
    fn test_add_appends() {
        let mut store = CatalogStore::with_default_seed();
        store.add(product(9, 100)).unwrap();
        assert_eq!(ids(&store), vec![1, 2, 3, 4, 5, 9]);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut store = CatalogStore::with_default_seed();
        let err = store.add(product(3, 100)).unwrap_err();
        assert_eq!(err.fields(), vec![ProductField::Id]);
        assert!(err.to_string().contains("3 is already in use"));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let mut store = CatalogStore::default();
        let mut nameless = product(1, 100);
        nameless.name = String::new();
        let err = store.add(nameless).unwrap_err();
        assert_eq!(err.fields(), vec![ProductField::Name]);
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut store = CatalogStore::with_default_seed();
        let removed = store.remove(ProductId::new(2)).unwrap();
        assert_eq!(removed.name, "Product 2");
        assert_eq!(ids(&store), vec![1, 3, 4, 5]);
        assert!(store.get(ProductId::new(2)).is_none());
    }

    #[test]
    fn test_remove_missing_is_not_found() {
        let mut store = CatalogStore::with_default_seed();
        let err = store.remove(ProductId::new(99)).unwrap_err();
        assert_eq!(err, CatalogError::NotFound(ProductId::new(99)));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_update_replaces_wholesale() {
        let mut store = CatalogStore::with_default_seed();
        let replacement = product(3, 100);
        store.update(ProductId::new(3), replacement.clone()).unwrap();

        let stored = store.get(ProductId::new(3)).unwrap();
        assert_eq!(stored, &replacement);
        assert!(stored.category.is_empty());
        assert_eq!(store.position(ProductId::new(3)), Some(2));
    }

    #[test]
    fn test_update_can_change_id() {
        let mut store = CatalogStore::with_default_seed();
        store.update(ProductId::new(3), product(30, 100)).unwrap();
        assert_eq!(ids(&store), vec![1, 2, 30, 4, 5]);
    }

    #[test]
    fn test_update_rejects_id_collision() {
        let mut store = CatalogStore::with_default_seed();
        let before = store.clone();
        let err = store.update(ProductId::new(3), product(4, 100)).unwrap_err();
        assert_eq!(err.fields(), vec![ProductField::Id]);
        assert_eq!(store, before);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut store = CatalogStore::with_default_seed();
        let err = store.update(ProductId::new(42), product(42, 1)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_sort_tracks_active_key() {
        let mut store = CatalogStore::with_default_seed();
        store.sort_by(SortKey::Price);
        assert_eq!(store.active_sort(), Some(SortKey::Price));

        store.remove(ProductId::new(1)).unwrap();
        assert_eq!(store.active_sort(), Some(SortKey::Price));

        store.add(product(6, 1)).unwrap();
        assert_eq!(store.active_sort(), None);
    }
}
