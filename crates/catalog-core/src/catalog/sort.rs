//! Catalog sort keys.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Keys the catalog can be ordered by. Always ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Id,
    Price,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Price => "price",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Id => "Sort by ID",
            SortKey::Price => "Sort by Price",
        }
    }

    /// Sort `products` ascending by this key. Stable: ties keep their order.
    pub fn apply(&self, products: &mut [Product]) {
        match self {
            SortKey::Id => products.sort_by_key(|p| p.id),
            SortKey::Price => products.sort_by_key(|p| p.price),
        }
    }

    /// Check that `products` is already ordered by this key.
    pub fn is_sorted(&self, products: &[Product]) -> bool {
        products.windows(2).all(|pair| match self {
            SortKey::Id => pair[0].id <= pair[1].id,
            SortKey::Price => pair[0].price <= pair[1].price,
        })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" => Ok(SortKey::Id),
            "price" => Ok(SortKey::Price),
            other => Err(format!("unknown sort key: {other} (expected id or price)")),
        }
    }
}
