//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    ctx.output.info("[catalog]");
    match ctx.config.catalog.path {
        Some(ref path) => ctx.output.kv("path", path),
        None => ctx.output.kv("path", "(built-in)"),
    }
    ctx.output.kv("products", &ctx.service.catalog().len().to_string());

    ctx.output.info("[service]");
    ctx.output
        .kv("list_latency_ms", &ctx.config.service.list_latency_ms.to_string());
    ctx.output
        .kv("lookup_latency_ms", &ctx.config.service.lookup_latency_ms.to_string());

    ctx.output.info("[store]");
    ctx.output.kv(
        "dir",
        &ctx.resolve_path(&ctx.config.store.dir).display().to_string(),
    );

    ctx.output.info("[log]");
    ctx.output.kv("level", &ctx.config.log.level);
    ctx.output.kv("format", &ctx.config.log.format);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("nebula.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
