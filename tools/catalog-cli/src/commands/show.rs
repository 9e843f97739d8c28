//! Show one product with its neighbours.

use anyhow::Result;
use catalog_core::catalog::Product;
use catalog_core::navigation::{navigate, Direction};
use catalog_core::{CatalogError, ProductId};
use serde::Serialize;

use super::ShowArgs;
use crate::context::Context;

/// Where each navigation button would lead from a product.
#[derive(Debug, PartialEq, Serialize)]
pub struct Neighbours {
    pub position: usize,
    pub total: usize,
    pub first: Option<ProductId>,
    pub previous: Option<ProductId>,
    pub next: Option<ProductId>,
    pub last: Option<ProductId>,
}

impl Neighbours {
    /// Compute neighbours of `id`, or `None` if it is not in `products`.
    pub fn of(products: &[Product], id: ProductId) -> Option<Self> {
        let index = products.iter().position(|p| p.id == id)?;
        // A button that leaves the cursor where it is leads nowhere.
        let target = |direction| navigate(products, direction, Some(id)).filter(|&to| to != id);
        Some(Self {
            position: index + 1,
            total: products.len(),
            first: target(Direction::First),
            previous: target(Direction::Previous),
            next: target(Direction::Next),
            last: target(Direction::Last),
        })
    }
}

#[derive(Serialize)]
struct ShowReport<'a> {
    product: &'a Product,
    neighbours: &'a Neighbours,
}

/// Run the show command.
pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.build_store()?;
    if let Some(key) = args.sort {
        store.sort_by(key);
    }

    let product = store.get(args.id).ok_or(CatalogError::NotFound(args.id))?;
    let neighbours =
        Neighbours::of(store.products(), args.id).ok_or(CatalogError::NotFound(args.id))?;

    if ctx.output.is_json() {
        ctx.output.json(&ShowReport {
            product,
            neighbours: &neighbours,
        });
        return Ok(());
    }

    ctx.output.header("Product Details");
    ctx.output.product_card(product);
    ctx.output.kv(
        "Position",
        &format!("{} of {}", neighbours.position, neighbours.total),
    );
    for (direction, target) in [
        (Direction::First, neighbours.first),
        (Direction::Previous, neighbours.previous),
        (Direction::Next, neighbours.next),
        (Direction::Last, neighbours.last),
    ] {
        let label = match target {
            Some(id) => format!("{direction}: {id}"),
            None => format!("{direction}: -"),
        };
        ctx.output.list_item(&label);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::catalog::{CatalogStore, SortKey};

    fn id(n: i64) -> ProductId {
        ProductId::new(n)
    }

    #[test]
    fn test_neighbours_in_middle() {
        let store = CatalogStore::with_default_seed();
        let n = Neighbours::of(store.products(), id(3)).unwrap();
        assert_eq!(n.position, 3);
        assert_eq!(n.total, 5);
        assert_eq!(n.first, Some(id(1)));
        assert_eq!(n.previous, Some(id(2)));
        assert_eq!(n.next, Some(id(4)));
        assert_eq!(n.last, Some(id(5)));
    }

    #[test]
    fn test_neighbours_at_edges_follow_sort() {
        let mut store = CatalogStore::with_default_seed();
        store.sort_by(SortKey::Price);

        let cheapest = Neighbours::of(store.products(), id(4)).unwrap();
        assert_eq!(cheapest.first, None);
        assert_eq!(cheapest.previous, None);
        assert_eq!(cheapest.next, Some(id(1)));

        let dearest = Neighbours::of(store.products(), id(2)).unwrap();
        assert_eq!(dearest.next, None);
        assert_eq!(dearest.last, None);
        assert_eq!(dearest.previous, Some(id(3)));
    }

    #[test]
    fn test_neighbours_of_missing_product() {
        let store = CatalogStore::with_default_seed();
        assert_eq!(Neighbours::of(store.products(), id(99)), None);
    }
}
