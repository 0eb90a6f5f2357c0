//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, Backend};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
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

    ctx.output.info("[storage]");
    let backend = match ctx.config.storage.backend {
        Backend::File => "file",
        Backend::Memory => "memory",
    };
    ctx.output.kv("backend", backend);
    if let Some(dir) = &ctx.config.storage.dir {
        ctx.output.kv("dir", &dir.display().to_string());
    }
    ctx.output.kv("namespace", ctx.cache.namespace().unwrap_or("(none)"));

    ctx.output.info("[log]");
    ctx.output.kv("level", &ctx.config.log.level);
    ctx.output.kv("format", &format!("{:?}", ctx.config.log.format).to_lowercase());

    ctx.output.info("[shop]");
    ctx.output.kv("default_sort", ctx.config.shop.default_sort.as_str());
    ctx.output.kv("page_size", &ctx.config.shop.page_size.to_string());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("auro.toml");

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
