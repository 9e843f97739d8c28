//! In-memory product catalog for a list + detail screen pair.
//!
//! This crate provides:
//!
//! - **Catalog**: the product record, form drafts, sort keys and the
//!   [`CatalogStore`] that owns the ordered product sequence
//! - **Navigation**: identity-based first/previous/next/last cursor moves
//! - **Session**: the list/detail/add/edit screen state machine
//!
//! # Example
//!
//! ```rust
//! use catalog_core::prelude::*;
//!
//! let mut store = CatalogStore::with_default_seed();
//! store.sort_by(SortKey::Price);
//! store.remove(ProductId::new(3)).unwrap();
//!
//! let next = navigate(store.products(), Direction::Next, Some(ProductId::new(4)));
//! assert_eq!(next, Some(ProductId::new(1)));
//! ```

pub mod error;
pub mod ids;
pub mod price;

pub mod catalog;
pub mod navigation;
pub mod session;

pub use error::CatalogError;
pub use ids::ProductId;
pub use price::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CatalogError, FieldError, ValidationErrors};
    pub use crate::ids::ProductId;
    pub use crate::price::{Price, PriceError};

    // Catalog
    pub use crate::catalog::{CatalogStore, Product, ProductDraft, ProductField, SortKey};

    // Navigation
    pub use crate::navigation::{navigate, Cursor, Direction};

    // Session
    pub use crate::session::{CatalogSession, Screen};
}
