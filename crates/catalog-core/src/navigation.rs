//! Cursor navigation over the catalog.
//!
//! The cursor remembers *which* product is selected, never *where* it was.
//! Its position is looked up from the id right before each move, so adds,
//! removes and sorts between moves cannot leave it pointing at the wrong
//! record or past the end of the catalog.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A detail-view navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    First,
    Previous,
    Next,
    Last,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::First,
        Direction::Previous,
        Direction::Next,
        Direction::Last,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::First => "first",
            Direction::Previous => "previous",
            Direction::Next => "next",
            Direction::Last => "last",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" => Ok(Direction::First),
            "previous" | "prev" => Ok(Direction::Previous),
            "next" => Ok(Direction::Next),
            "last" => Ok(Direction::Last),
            other => Err(format!("unknown direction: {other}")),
        }
    }
}

/// Compute the index a move lands on.
///
/// Returns `None` only for an empty catalog. Moves past either end stay
/// where they are; there is no wraparound. An `index` of `None` or one that
/// is out of range is treated as "nothing selected", in which case
/// `Next`/`Previous` land on the first record.
pub fn step(direction: Direction, index: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    let index = index.filter(|&i| i < len);

    Some(match (direction, index) {
        (Direction::First, _) => 0,
        (Direction::Last, _) => last,
        (Direction::Next, Some(i)) => (i + 1).min(last),
        (Direction::Previous, Some(i)) => i.saturating_sub(1),
        (Direction::Next | Direction::Previous, None) => 0,
    })
}

/// Move from `current` in `direction`, by identity.
///
/// On an empty catalog this is a no-op and `current` comes back unchanged.
pub fn navigate(
    products: &[Product],
    direction: Direction,
    current: Option<ProductId>,
) -> Option<ProductId> {
    let index = current.and_then(|id| products.iter().position(|p| p.id == id));
    match step(direction, index, products.len()) {
        Some(target) => Some(products[target].id),
        None => current,
    }
}

/// The selected record for sequential detail navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    current: Option<ProductId>,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cursor already on `id`.
    pub fn at(id: ProductId) -> Self {
        Self { current: Some(id) }
    }

    pub fn current(&self) -> Option<ProductId> {
        self.current
    }

    pub fn select(&mut self, id: ProductId) {
        self.current = Some(id);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Position of the selected record in `products`, if it is still there.
    pub fn resolve(&self, products: &[Product]) -> Option<usize> {
        let id = self.current?;
        products.iter().position(|p| p.id == id)
    }

    /// Move the cursor and return the record it now points at.
    pub fn navigate<'a>(
        &mut self,
        products: &'a [Product],
        direction: Direction,
    ) -> Option<&'a Product> {
        self.current = navigate(products, direction, self.current);
        self.resolve(products).map(|i| &products[i])
    }
}
