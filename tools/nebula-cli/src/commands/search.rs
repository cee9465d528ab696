//! Product search.

use anyhow::Result;

use super::SearchArgs;
use crate::context::Context;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let products = if ctx.has_latency() {
        let spinner = ctx.output.spinner("Searching...");
        let products = ctx.service.search(&args.term).await;
        spinner.finish_and_clear();
        products
    } else {
        ctx.service.search(&args.term).await
    };

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    if products.is_empty() {
        ctx.output.info(&format!("No products match '{}'.", args.term));
        return Ok(());
    }

    if args.term.is_empty() {
        ctx.output.header(&format!("All products ({})", products.len()));
    } else {
        ctx.output
            .header(&format!("{} result(s) for '{}'", products.len(), args.term));
    }
    for product in &products {
        ctx.output.product_row(product);
    }

    Ok(())
}
