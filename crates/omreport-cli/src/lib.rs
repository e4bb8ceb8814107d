//! # omreport-cli
//!
//! Command-line front end for Dell OpenManage `omreport`.
//!
//! ## Features
//!
//! - **Typed reports**: chassis sensors, power, memory, RAID controllers and disks
//! - **Binary pinning**: `omcliproxy` is validated and fingerprinted before use
//! - **Tamper checks**: `--enhanced-security` re-hashes it before every report
//! - **Multiple output formats**: Pretty tables, JSON, YAML

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
