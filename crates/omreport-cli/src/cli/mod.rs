//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Run the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config_path = match cli.config_file {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let config = Config::load(&config_path)?;
    debug!(path = %config_path.display(), "configuration loaded");

    // Flags win over the config file
    let output_format = cli.output.or(config.output_format).unwrap_or_default();
    let mut omreport = config.omreport.clone();
    if let Some(path) = cli.proxy_path {
        omreport.omcliproxy_path = Some(path);
    }
    if cli.enhanced_security {
        omreport.enhanced_security_mode = true;
    }

    // Create context for commands
    let ctx = commands::Context {
        omreport,
        expected_fingerprint: config.expected_fingerprint,
        config_path,
        output_format,
        verbose: cli.verbose,
        no_color: cli.no_color,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::About => commands::about::execute(&ctx),
        Commands::Chassis(args) => commands::chassis::execute(&ctx, args),
        Commands::Storage(args) => commands::storage::execute(&ctx, args),
        Commands::Verify(args) => commands::verify::execute(&ctx, args),
        Commands::Config(args) => commands::config::execute(&ctx, args),
    }
}

/// Log to stderr so stdout stays machine-readable.
///
/// `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
