//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use dialoguer::Confirm;
use roam_core::config::generate_default_config;

use super::{ConfigArgs, ConfigCommand};
use crate::context::Context;

/// Band widths above this cover most of a country and rarely separate anything.
const WIDE_BAND_KM: f64 = 500.0;

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
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("source", &path.display().to_string()),
        None => ctx.output.kv("source", "built-in defaults"),
    }

    ctx.output.info("");
    ctx.output.info("[ranking]");
    ctx.output
        .kv("band_width", &ctx.config.ranking.band_width.to_string());

    ctx.output.info("");
    ctx.output.info("[slug]");
    ctx.output.kv("max_len", &ctx.config.slug.max_len.to_string());
    ctx.output
        .kv("fragment_len", &ctx.config.slug.fragment_len.to_string());

    ctx.output.info("");
    ctx.output.info("[export]");
    ctx.output.kv("date_format", &ctx.config.export.date_format);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("roam.toml");

    if config_path.exists() && !force {
        if ctx.output.is_json() {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }
        let confirmed = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", config_path.display()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Init cancelled");
            return Ok(());
        }
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "none (using defaults)"),
    }

    if let Err(e) = ctx.config.validate() {
        bail!("Configuration is invalid: {}", e);
    }

    let warnings = collect_warnings(ctx);
    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if warnings.is_empty() {
        ctx.output.success("Configuration is valid");
    } else {
        ctx.output.success("Configuration is valid (with warnings)");
    }

    Ok(())
}

fn collect_warnings(ctx: &Context) -> Vec<String> {
    let mut warnings = Vec::new();

    if ctx.config.ranking.band_width > WIDE_BAND_KM {
        warnings.push(format!(
            "ranking.band_width {} is very wide; proximity will rarely change the order",
            ctx.config.ranking.band_width
        ));
    }

    if ctx.config.slug.fragment_len < 6 {
        warnings.push(format!(
            "slug.fragment_len {} is shorter than the 6 hex digits id recovery looks for",
            ctx.config.slug.fragment_len
        ));
    }

    warnings
}
