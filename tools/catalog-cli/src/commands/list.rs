//! List the catalog.

use anyhow::Result;

use super::ListArgs;
use crate::context::Context;

/// Run the list command.
pub fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.build_store()?;
    if let Some(key) = args.sort {
        store.sort_by(key);
    }

    ctx.output.header("Products");
    ctx.output.sort_bar(store.active_sort());
    ctx.output.product_table(store.products());
    ctx.output
        .debug(&format!("{} product(s) in catalog", store.len()));
    Ok(())
}
