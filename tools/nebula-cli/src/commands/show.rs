//! Product detail: rating, reasons and better choices.

use anyhow::Result;
use nebula_catalog::{ProductDetail, ProductId};
use serde::Serialize;

use super::ShowArgs;
use crate::context::Context;
use crate::output::{favorite_marker, grade_badge};

#[derive(Serialize)]
struct DetailView<'a> {
    #[serde(flatten)]
    detail: &'a ProductDetail,
    favorite: bool,
}

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let id = ProductId::new(args.id);
    let detail = if ctx.has_latency() {
        let spinner = ctx.output.spinner("Loading product...");
        let detail = ctx.service.detail(id).await;
        spinner.finish_and_clear();
        detail
    } else {
        ctx.service.detail(id).await
    };

    match detail {
        Some(detail) => {
            let favorite = ctx.is_favorite(id);
            render(&detail, favorite, args.all, ctx);
        }
        None => ctx.output.not_found(id),
    }
    Ok(())
}

/// Print a product with its reasons and recommendations.
pub fn render(detail: &ProductDetail, favorite: bool, all: bool, ctx: &Context) {
    let out = &ctx.output;
    if out.is_json() {
        out.json(&DetailView { detail, favorite });
        return;
    }

    let product = &detail.product;
    out.header(&format!(
        "{} {} {}",
        favorite_marker(favorite),
        product.brand,
        product.name
    ));
    out.kv("id", &product.id.to_string());
    out.kv("barcode", &product.barcode);
    out.kv("category", &product.category);
    out.kv("rating", &grade_badge(product));
    if !product.image_url.is_empty() {
        out.kv("image", &product.image_url);
    }

    if !product.reasons.is_empty() {
        println!();
        for reason in &product.reasons {
            println!("  {} {}", reason.polarity.marker(), reason.text);
        }
    }

    let recs = &detail.recommendations;
    if recs.is_empty() {
        out.info("No better alternatives in this category.");
        return;
    }

    out.header("Better choices");
    let shown = if all { &recs.items[..] } else { recs.preview() };
    for rec in shown {
        out.product_row(rec);
    }
    if !all && recs.has_more() {
        out.info(&format!(
            "{} more alternative(s), use --all to list them.",
            recs.len() - shown.len()
        ));
    }
}
