//! `omreport-rs config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::render;

pub fn execute(ctx: &Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(ctx),
        ConfigCommands::Set { key, value } => set_config(ctx, &key, &value),
        ConfigCommands::Path => show_path(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = Config::load(&ctx.config_path)?;

    render(ctx.output_format, &config, |config| {
        let unset = || "(not set)".dimmed().to_string();

        println!("{}", "Current Configuration:".bold());
        println!();
        println!(
            "  {} {}",
            "omcliproxy_path:".bold(),
            config
                .omreport
                .omcliproxy_path
                .as_ref()
                .map_or_else(unset, |p| p.display().to_string())
        );
        println!(
            "  {} {}",
            "omcliproxy_dir:".bold(),
            config
                .omreport
                .omcliproxy_dir
                .as_ref()
                .map_or_else(unset, |p| p.display().to_string())
        );
        println!(
            "  {} {}",
            "enhanced_security_mode:".bold(),
            config.omreport.enhanced_security_mode
        );
        println!(
            "  {} {}",
            "expected_fingerprint:".bold(),
            config
                .expected_fingerprint
                .map_or_else(unset, |f| f.to_string())
        );
        println!(
            "  {} {}",
            "output_format:".bold(),
            config.output_format.unwrap_or_default()
        );
        println!();
        println!(
            "  {} {}",
            "resolves to:".dimmed(),
            config.omreport.resolved_path().display()
        );
    })
}

fn set_config(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let mut config = Config::load(&ctx.config_path)?;
    config.set(key, value)?;
    config.save(&ctx.config_path)?;

    println!("{} {} set to {}.", "Success:".green().bold(), key, value.cyan());
    Ok(())
}

fn show_path(ctx: &Context) -> Result<()> {
    println!("{}", ctx.config_path.display());
    Ok(())
}
