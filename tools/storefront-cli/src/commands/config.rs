//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};
use dialoguer::Confirm;
use storefront_sdk::config::{generate_default_config, ApiConfig, CONFIG_FILE_NAMES};
use storefront_sdk::StorefrontConfig;

use super::{ConfigArgs, ConfigCommand};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init {
            base_url,
            force,
            yes,
        } => init_config(base_url, force, yes, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[api]");
    ctx.output.kv("base_url", &ctx.config.api.base_url);

    ctx.output.info("");
    ctx.output.info("[http]");
    ctx.output.kv("timeout_ms", &ctx.config.http.timeout_ms.to_string());
    ctx.output.kv(
        "connect_timeout_ms",
        &ctx.config.http.connect_timeout_ms.to_string(),
    );
    ctx.output.kv("max_retries", &ctx.config.http.max_retries.to_string());

    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output.kv(
        "featured_limit",
        &ctx.config.catalog.featured_limit.to_string(),
    );

    Ok(())
}

async fn init_config(base_url: Option<String>, force: bool, yes: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let base_url = base_url.unwrap_or_else(|| ApiConfig::default().base_url);
    ctx.output.debug(&format!("Using base URL: {}", base_url));
    let content = generate_default_config(&base_url);

    // Reject a bad URL before anything is written.
    let parsed: StorefrontConfig = toml::from_str(&content).context("Generated config is invalid")?;
    parsed.validate()?;

    if config_path.exists() && !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Overwrite {}?", config_path.display()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Init cancelled");
            return Ok(());
        }
    }

    fs::write(&config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if let Err(e) = ctx.config.validate() {
        errors.push(e.to_string());
    }

    let base_url = ctx.config.api.base_url.trim();
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        errors.push(format!("api.base_url '{}' must be an http(s) URL", base_url));
    }

    if ctx.config.http.max_retries > 5 {
        warnings.push(format!(
            "http.max_retries = {} will delay the offline fallback",
            ctx.config.http.max_retries
        ));
    }

    if ctx.config.catalog.featured_limit == 0 {
        warnings.push("catalog.featured_limit = 0 shows no featured products".to_string());
    }

    if ctx.config_path.is_none() {
        warnings.push("no config file found, using defaults".to_string());
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
