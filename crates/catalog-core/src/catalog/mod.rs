//! Product catalog module.
//!
//! Contains the product record, form drafts, sort keys, seed data and the
//! store that owns the ordered product sequence.

mod draft;
mod product;
pub mod seed;
mod sort;
mod store;

pub use draft::ProductDraft;
pub use product::{Product, ProductField};
pub use sort::SortKey;
pub use store::CatalogStore;
