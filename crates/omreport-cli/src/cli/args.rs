//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use omreport::Fingerprint;
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Dell OpenManage omreport with binary integrity checks
///
/// Runs omreport through omcliproxy, refusing binaries that are misnamed,
/// symlinked, or (with --enhanced-security) changed since startup.
#[derive(Parser, Debug)]
#[command(name = "omreport-rs")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Full path to omcliproxy (or set OMREPORT_PROXY_PATH env var)
    #[arg(long, env = "OMREPORT_PROXY_PATH", global = true)]
    pub proxy_path: Option<PathBuf>,

    /// Re-hash omcliproxy before every report
    #[arg(long, global = true)]
    pub enhanced_security: bool,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long = "config", env = "OMREPORT_CONFIG", global = true, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the installed Server Administrator version
    About,

    /// Chassis sensors and components
    Chassis(ChassisArgs),

    /// RAID controllers, enclosures and disks
    Storage(StorageArgs),

    /// Validate and fingerprint omcliproxy
    Verify(VerifyArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Chassis command
// ============================================================================

#[derive(Args, Debug)]
pub struct ChassisArgs {
    #[command(subcommand)]
    pub command: Option<ChassisCommands>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ChassisCommands {
    /// Roll-up status of every subsystem (default)
    Summary,
    /// Battery probes
    Batteries,
    /// Fan probes
    Fans,
    /// Processors
    Processors,
    /// Memory modules
    Memory,
    /// Temperature probes
    Temps,
    /// Power consumption probes
    #[command(name = "pwrmonitoring")]
    PowerMonitoring,
    /// Power supply units
    #[command(name = "pwrsupplies")]
    PowerSupplies,
}

// ============================================================================
// Storage command
// ============================================================================

#[derive(Args, Debug)]
pub struct StorageArgs {
    #[command(subcommand)]
    pub command: StorageCommands,
}

#[derive(Subcommand, Debug)]
pub enum StorageCommands {
    /// RAID controllers
    Controller,
    /// Enclosures and backplanes
    Enclosure,
    /// Virtual disks
    Vdisk,
    /// Physical disks
    Pdisk {
        /// Controller to list (all controllers when omitted)
        #[arg(short, long)]
        controller: Option<u32>,
    },
}

// ============================================================================
// Verify command
// ============================================================================

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Known-good SHA-256 of omcliproxy to compare against
    #[arg(long, value_name = "SHA256")]
    pub expect: Option<Fingerprint>,

    /// Save the current fingerprint to the config file as the expected one
    #[arg(long, conflicts_with = "expect")]
    pub pin: bool,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },

    /// Show configuration file path
    Path,
}
