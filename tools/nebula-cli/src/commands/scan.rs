//! Barcode scan flow.

use std::io::BufReader;

use anyhow::{Context as _, Result};
use nebula_catalog::scan::{LineSource, ScanOutcome, Scanner};

use super::{ScanArgs, ScannerChoice};
use crate::commands::show;
use crate::context::Context;

/// Run the scan command.
pub async fn run(args: ScanArgs, ctx: &Context) -> Result<()> {
    if let Some(barcode) = args.barcode {
        return handle(&barcode, ctx).await;
    }

    let mut scanner = match args.scanner {
        ScannerChoice::Native => {
            Scanner::Native(Box::new(LineSource::new(BufReader::new(std::io::stdin()))))
        }
        ScannerChoice::Unavailable => Scanner::Unavailable,
    };
    ctx.output
        .debug(&format!("Using {} scanner", scanner.kind().as_str()));

    ctx.output.info("Waiting for barcodes (one per line, Ctrl-D to stop)...");
    while let Some(barcode) = scanner.scan().context("Scanning failed")? {
        handle(&barcode, ctx).await?;
    }
    Ok(())
}

async fn handle(barcode: &str, ctx: &Context) -> Result<()> {
    match ctx.service.resolve_scan(barcode).await {
        ScanOutcome::Found { product } => match ctx.service.detail(product.id).await {
            Some(detail) => {
                let favorite = ctx.is_favorite(product.id);
                show::render(&detail, favorite, false, ctx);
            }
            None => ctx.output.not_found(product.id),
        },
        outcome @ ScanOutcome::NotFound { .. } => {
            if ctx.output.is_json() {
                ctx.output.json(&outcome);
            } else {
                ctx.output
                    .warn(&format!("No product found for barcode: {}", barcode));
            }
        }
    }
    Ok(())
}
