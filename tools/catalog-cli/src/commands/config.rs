//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    ctx.output.info("[catalog]");
    ctx.output.kv(
        "seed_file",
        ctx.config
            .catalog
            .seed_file
            .as_deref()
            .unwrap_or("(built-in)"),
    );
    ctx.output.kv(
        "default_sort",
        ctx.config
            .catalog
            .default_sort
            .map_or("(none)", |key| key.as_str()),
    );

    ctx.output.info("[log]");
    ctx.output.kv("filter", &ctx.config.log.filter);

    ctx.output.info("[shell]");
    ctx.output
        .kv("confirm_delete", &ctx.config.shell.confirm_delete.to_string());

    if let Some(seed) = &ctx.seed {
        ctx.output.warn(&format!("--seed overrides seed_file: {seed}"));
    }
    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("catalog.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())?;
    ctx.output
        .success(&format!("Created: {}", config_path.display()));
    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    if let Err(e) = tracing_subscriber::EnvFilter::try_new(&ctx.config.log.filter) {
        bail!("log.filter is not a valid filter: {e}");
    }

    let store = ctx.build_store()?;
    ctx.output.kv("products", &store.len().to_string());

    if store.is_empty() {
        ctx.output.warn("The seed fixture has no products");
    }

    ctx.output.success("Configuration is valid");
    Ok(())
}
