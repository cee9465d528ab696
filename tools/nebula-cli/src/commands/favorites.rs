//! Favorites commands.

use anyhow::Result;
use nebula_catalog::{Product, ProductId};
use nebula_store::{Favorites, FileStore};

use super::{FavoritesArgs, FavoritesCommand};
use crate::context::Context;

/// Run the favorites command.
pub async fn run(args: FavoritesArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(FavoritesCommand::List) | None => {
            let stored = ctx.stored_favorites();
            let products = match stored {
                Some(ref favorites) => ctx.service.catalog().favorites(favorites),
                None => Vec::new(),
            };
            list(products, ctx)
        }
        Some(FavoritesCommand::Toggle { id }) => {
            let favorites = ctx.favorites()?;
            let result = toggle(ProductId::new(id), &favorites, ctx);
            // Flush failures are already logged by the service.
            if favorites.shutdown().is_err() {
                ctx.output.warn("Favorites could not be saved.");
            }
            result
        }
    }
}

fn list(products: Vec<&Product>, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    if products.is_empty() {
        ctx.output.info("You have no favorites yet.");
        ctx.output
            .info("Use `nebula favorites toggle <ID>` to bookmark a product.");
        return Ok(());
    }

    ctx.output.header(&format!("Favorites ({})", products.len()));
    for product in products {
        ctx.output.product_row(product);
    }
    Ok(())
}

fn toggle(id: ProductId, favorites: &Favorites<FileStore>, ctx: &Context) -> Result<()> {
    let Some(product) = ctx.service.catalog().find_by_id(id) else {
        ctx.output.not_found(id);
        return Ok(());
    };

    let outcome = favorites.toggle(id);
    if ctx.output.is_json() {
        ctx.output.json(&outcome);
        return Ok(());
    }

    let name = format!("{} {}", product.brand, product.name);
    if outcome.favorite {
        ctx.output.success(&format!("Added {} to favorites", name));
    } else {
        ctx.output.success(&format!("Removed {} from favorites", name));
    }
    if favorites.load_failed() {
        ctx.output.warn(&format!(
            "Stored favorites in {} could not be read; fix or remove the file to save changes.",
            ctx.resolve_path(&ctx.config.store.dir).display()
        ));
    } else if !outcome.persisted {
        ctx.output.warn("Change kept for this session but not saved yet.");
    }
    Ok(())
}
