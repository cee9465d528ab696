//! Alternatives for a product.

use anyhow::Result;
use nebula_catalog::ProductId;

use super::RecommendArgs;
use crate::context::Context;

/// Run the recommend command.
pub async fn run(args: RecommendArgs, ctx: &Context) -> Result<()> {
    let id = ProductId::new(args.id);
    let Some(product) = ctx.service.find_by_id(id).await else {
        ctx.output.not_found(id);
        return Ok(());
    };

    let mut recs = ctx.service.recommend(&product.category, product.rating).await;
    if let Some(limit) = args.limit {
        recs.truncate(limit);
    }

    if ctx.output.is_json() {
        ctx.output.json(&recs);
        return Ok(());
    }

    if recs.is_empty() {
        ctx.output.info(&format!(
            "No better alternatives for {} {} in '{}'.",
            product.brand, product.name, product.category
        ));
        return Ok(());
    }

    ctx.output.header(&format!(
        "Alternatives for {} {}",
        product.brand, product.name
    ));
    for rec in &recs {
        ctx.output.product_row(rec);
    }
    Ok(())
}
